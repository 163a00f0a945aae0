//! Response DTOs for the scripts API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::script::Script;

/// Script as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScriptResponse {
    /// Script ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Script text.
    pub content: String,
    /// Scroll speed.
    pub speed: i64,
    /// Font size name.
    pub font_size: String,
    /// Mirror mode.
    pub mirror_mode: bool,
    /// Focus line.
    pub show_focus_line: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time, null until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Script> for ScriptResponse {
    fn from(script: Script) -> Self {
        Self {
            id: script.id,
            title: script.title,
            content: script.content,
            speed: script.speed,
            font_size: script.font_size,
            mirror_mode: script.mirror_mode,
            show_focus_line: script.show_focus_line,
            created_at: script.created_at,
            updated_at: script.updated_at,
        }
    }
}

/// Delete acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    /// Always true.
    pub ok: bool,
}

impl DeleteResponse {
    /// A successful deletion.
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Greeting returned at the root path.
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_script() -> Script {
        Script {
            id: 7,
            title: "Intro".to_string(),
            content: "Hello".to_string(),
            speed: 200,
            font_size: "medium".to_string(),
            mirror_mode: false,
            show_focus_line: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_script_response_fields() {
        let json = serde_json::to_value(ScriptResponse::from(sample_script())).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Intro");
        assert_eq!(json["speed"], 200);
        assert_eq!(json["font_size"], "medium");
        assert_eq!(json["mirror_mode"], false);
        assert_eq!(json["show_focus_line"], true);
        assert_eq!(json["created_at"], "2024-01-02T03:04:05Z");
        assert!(json["updated_at"].is_null());
    }

    #[test]
    fn test_delete_response() {
        let json = serde_json::to_value(DeleteResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"ok": true}));
    }
}
