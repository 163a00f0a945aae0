//! Database schema for ProPrompter.
//!
//! There are no migrations: each statement is idempotent and is run on every
//! startup. Timestamps are RFC 3339 text and flags are integers so that the
//! same queries decode identically through the `Any` driver on both backends.

const SQLITE_SCHEMA: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS scripts (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    title           TEXT NOT NULL DEFAULT 'Untitled',
    content         TEXT NOT NULL,
    speed           INTEGER NOT NULL DEFAULT 200,
    font_size       TEXT NOT NULL DEFAULT 'medium',
    mirror_mode     INTEGER NOT NULL DEFAULT 0,   -- 0 / 1
    show_focus_line INTEGER NOT NULL DEFAULT 1,   -- 0 / 1
    created_at      TEXT NOT NULL,
    updated_at      TEXT
)
"#,
    "CREATE INDEX IF NOT EXISTS idx_scripts_title ON scripts(title)",
];

const POSTGRES_SCHEMA: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS scripts (
    id              BIGSERIAL PRIMARY KEY,
    title           TEXT NOT NULL DEFAULT 'Untitled',
    content         TEXT NOT NULL,
    speed           BIGINT NOT NULL DEFAULT 200,
    font_size       TEXT NOT NULL DEFAULT 'medium',
    mirror_mode     BIGINT NOT NULL DEFAULT 0,
    show_focus_line BIGINT NOT NULL DEFAULT 1,
    created_at      TEXT NOT NULL,
    updated_at      TEXT
)
"#,
    "CREATE INDEX IF NOT EXISTS idx_scripts_title ON scripts(title)",
];

/// Schema statements for the embedded SQLite store.
pub fn sqlite_schema() -> &'static [&'static str] {
    SQLITE_SCHEMA
}

/// Schema statements for PostgreSQL.
pub fn postgres_schema() -> &'static [&'static str] {
    POSTGRES_SCHEMA
}
