//! Request DTOs for the scripts API.
//!
//! `null` and a missing key are treated the same: the field is not supplied.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::script::{NewScript, Pagination, ScriptUpdate};

/// Create script request.
///
/// Values are stored exactly as supplied; only `content` is required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateScriptRequest {
    /// Title, defaults to "Untitled".
    pub title: Option<String>,
    /// Script text.
    pub content: String,
    /// Scroll speed, defaults to 200.
    pub speed: Option<i64>,
    /// Font size name, defaults to "medium".
    pub font_size: Option<String>,
    /// Mirror mode, defaults to false.
    pub mirror_mode: Option<bool>,
    /// Focus line, defaults to true.
    pub show_focus_line: Option<bool>,
}

impl CreateScriptRequest {
    /// Convert into a [`NewScript`], filling in defaults.
    pub fn into_new_script(self) -> NewScript {
        let mut script = NewScript::new(self.content);
        if let Some(title) = self.title {
            script = script.with_title(title);
        }
        if let Some(speed) = self.speed {
            script = script.with_speed(speed);
        }
        if let Some(font_size) = self.font_size {
            script = script.with_font_size(font_size);
        }
        if let Some(mirror_mode) = self.mirror_mode {
            script = script.with_mirror_mode(mirror_mode);
        }
        if let Some(show_focus_line) = self.show_focus_line {
            script = script.with_show_focus_line(show_focus_line);
        }
        script
    }
}

/// Update script request. Every field is optional.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateScriptRequest {
    /// New title.
    pub title: Option<String>,
    /// New script text.
    pub content: Option<String>,
    /// New scroll speed.
    pub speed: Option<i64>,
    /// New font size name.
    pub font_size: Option<String>,
    /// New mirror mode.
    pub mirror_mode: Option<bool>,
    /// New focus line setting.
    pub show_focus_line: Option<bool>,
}

impl From<UpdateScriptRequest> for ScriptUpdate {
    fn from(req: UpdateScriptRequest) -> Self {
        ScriptUpdate {
            title: req.title,
            content: req.content,
            speed: req.speed,
            font_size: req.font_size,
            mirror_mode: req.mirror_mode,
            show_focus_line: req.show_focus_line,
        }
    }
}

/// List query parameters.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListScriptsQuery {
    /// Number of scripts to skip.
    #[serde(default)]
    #[validate(range(min = 0, message = "skip must not be negative"))]
    pub skip: i64,
    /// Maximum number of scripts to return.
    #[serde(default = "default_limit")]
    #[validate(range(min = 0, message = "limit must not be negative"))]
    pub limit: i64,
}

fn default_limit() -> i64 {
    Pagination::DEFAULT_LIMIT
}

impl Default for ListScriptsQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl ListScriptsQuery {
    /// Convert to pagination, capping the limit at `max_limit`.
    pub fn to_pagination(&self, max_limit: i64) -> Pagination {
        Pagination::new(self.skip, self.limit).clamp(max_limit)
    }
}
