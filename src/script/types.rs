//! Script type definitions.

use chrono::{DateTime, SecondsFormat, Utc};

/// Default title for scripts created without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Default scroll speed.
pub const DEFAULT_SPEED: i64 = 200;

/// Default font size.
pub const DEFAULT_FONT_SIZE: &str = "medium";

/// Script entity: one teleprompter script and its display settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    /// Unique script ID, assigned by the store.
    pub id: i64,
    /// Script title.
    pub title: String,
    /// Text shown on the prompter.
    pub content: String,
    /// Scroll speed (unit defined by the client).
    pub speed: i64,
    /// Font size name (`small`, `medium`, `large`).
    pub font_size: String,
    /// Whether the text is mirrored horizontally.
    pub mirror_mode: bool,
    /// Whether the focus line is drawn.
    pub show_focus_line: bool,
    /// Insertion timestamp. Never changes.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, `None` until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data for creating a new script.
#[derive(Debug, Clone, PartialEq)]
pub struct NewScript {
    /// Script title.
    pub title: String,
    /// Script text.
    pub content: String,
    /// Scroll speed.
    pub speed: i64,
    /// Font size name.
    pub font_size: String,
    /// Mirror mode flag.
    pub mirror_mode: bool,
    /// Focus line flag.
    pub show_focus_line: bool,
}

impl NewScript {
    /// Create a new script with default display settings.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            content: content.into(),
            speed: DEFAULT_SPEED,
            font_size: DEFAULT_FONT_SIZE.to_string(),
            mirror_mode: false,
            show_focus_line: true,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the scroll speed.
    pub fn with_speed(mut self, speed: i64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = font_size.into();
        self
    }

    /// Set the mirror mode flag.
    pub fn with_mirror_mode(mut self, mirror_mode: bool) -> Self {
        self.mirror_mode = mirror_mode;
        self
    }

    /// Set the focus line flag.
    pub fn with_show_focus_line(mut self, show_focus_line: bool) -> Self {
        self.show_focus_line = show_focus_line;
        self
    }
}

/// Partial update of a script. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptUpdate {
    /// New title.
    pub title: Option<String>,
    /// New content.
    pub content: Option<String>,
    /// New scroll speed.
    pub speed: Option<i64>,
    /// New font size.
    pub font_size: Option<String>,
    /// New mirror mode flag.
    pub mirror_mode: Option<bool>,
    /// New focus line flag.
    pub show_focus_line: Option<bool>,
}

impl ScriptUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the scroll speed.
    pub fn speed(mut self, speed: i64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set the font size.
    pub fn font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = Some(font_size.into());
        self
    }

    /// Set the mirror mode flag.
    pub fn mirror_mode(mut self, mirror_mode: bool) -> Self {
        self.mirror_mode = Some(mirror_mode);
        self
    }

    /// Set the focus line flag.
    pub fn show_focus_line(mut self, show_focus_line: bool) -> Self {
        self.show_focus_line = Some(show_focus_line);
        self
    }
}

/// Current time in the stored timestamp format.
///
/// Fixed-width UTC with microseconds, so text order matches time order.
pub(crate) fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}

pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}
