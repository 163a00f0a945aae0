//! Script repository for ProPrompter.
//!
//! This module provides CRUD operations for scripts on an open connection.

use sqlx::AnyConnection;

use super::types::{parse_timestamp, timestamp_now, NewScript, Script, ScriptUpdate};
use crate::{PrompterError, Result};

const SELECT_COLUMNS: &str = "SELECT id, title, content, speed, font_size, mirror_mode,
        show_focus_line, created_at, updated_at
 FROM scripts";

/// Repository for script CRUD operations.
///
/// Borrows one connection; every method is a single statement against it.
pub struct ScriptRepository<'c> {
    conn: &'c mut AnyConnection,
}

impl<'c> ScriptRepository<'c> {
    /// Create a new ScriptRepository over the given connection.
    pub fn new(conn: &'c mut AnyConnection) -> Self {
        Self { conn }
    }

    /// Get a script by ID.
    pub async fn get(&mut self, id: i64) -> Result<Option<Script>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = $1");
        let row: Option<ScriptRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        row.map(ScriptRow::into_script).transpose()
    }

    /// List scripts in insertion order (id ascending).
    pub async fn list(&mut self, offset: i64, limit: i64) -> Result<Vec<Script>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY id ASC LIMIT $1 OFFSET $2");
        let rows: Vec<ScriptRow> = sqlx::query_as(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *self.conn)
            .await?;

        rows.into_iter().map(ScriptRow::into_script).collect()
    }

    /// Create a new script.
    ///
    /// Returns the created script with the assigned ID and creation time.
    pub async fn create(&mut self, new_script: &NewScript) -> Result<Script> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO scripts (title, content, speed, font_size, mirror_mode, show_focus_line, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
        .bind(&new_script.title)
        .bind(&new_script.content)
        .bind(new_script.speed)
        .bind(&new_script.font_size)
        .bind(i64::from(new_script.mirror_mode))
        .bind(i64::from(new_script.show_focus_line))
        .bind(timestamp_now())
        .fetch_one(&mut *self.conn)
        .await?;

        self.get(id)
            .await?
            .ok_or_else(|| PrompterError::NotFound("script".to_string()))
    }

    /// Update a script by ID.
    ///
    /// Only fields that are set in the update are written; `updated_at` is
    /// always refreshed. Returns the updated script, or None if not found.
    pub async fn update(&mut self, id: i64, update: &ScriptUpdate) -> Result<Option<Script>> {
        let mut assignments: Vec<(&'static str, Assignment<'_>)> = Vec::new();

        if let Some(ref title) = update.title {
            assignments.push(("title", Assignment::Text(title)));
        }
        if let Some(ref content) = update.content {
            assignments.push(("content", Assignment::Text(content)));
        }
        if let Some(speed) = update.speed {
            assignments.push(("speed", Assignment::Integer(speed)));
        }
        if let Some(ref font_size) = update.font_size {
            assignments.push(("font_size", Assignment::Text(font_size)));
        }
        if let Some(mirror_mode) = update.mirror_mode {
            assignments.push(("mirror_mode", Assignment::Integer(mirror_mode.into())));
        }
        if let Some(show_focus_line) = update.show_focus_line {
            assignments.push(("show_focus_line", Assignment::Integer(show_focus_line.into())));
        }

        let updated_at = timestamp_now();
        assignments.push(("updated_at", Assignment::Text(&updated_at)));

        let set_clause = assignments
            .iter()
            .enumerate()
            .map(|(i, (column, _))| format!("{column} = ${}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE scripts SET {set_clause} WHERE id = ${}",
            assignments.len() + 1
        );

        let mut query = sqlx::query(&sql);
        for (_, value) in &assignments {
            query = match *value {
                Assignment::Text(text) => query.bind(text),
                Assignment::Integer(number) => query.bind(number),
            };
        }

        let result = query.bind(id).execute(&mut *self.conn).await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(id).await
    }

    /// Delete a script by ID.
    ///
    /// Returns true if a script was deleted, false if not found.
    pub async fn delete(&mut self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM scripts WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all scripts.
    pub async fn count(&mut self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scripts")
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count)
    }
}

/// A column value written by a partial update.
enum Assignment<'a> {
    Text(&'a str),
    Integer(i64),
}

/// Internal struct for mapping database rows to Script.
#[derive(sqlx::FromRow)]
struct ScriptRow {
    id: i64,
    title: String,
    content: String,
    speed: i64,
    font_size: String,
    mirror_mode: i64,
    show_focus_line: i64,
    created_at: String,
    updated_at: Option<String>,
}

impl ScriptRow {
    fn into_script(self) -> Result<Script> {
        let created_at = parse_timestamp(&self.created_at).ok_or_else(|| {
            PrompterError::Corrupt(format!(
                "script {} has invalid created_at {:?}",
                self.id, self.created_at
            ))
        })?;
        let updated_at = match self.updated_at {
            Some(ref text) => Some(parse_timestamp(text).ok_or_else(|| {
                PrompterError::Corrupt(format!(
                    "script {} has invalid updated_at {:?}",
                    self.id, text
                ))
            })?),
            None => None,
        };

        Ok(Script {
            id: self.id,
            title: self.title,
            content: self.content,
            speed: self.speed,
            font_size: self.font_size,
            mirror_mode: self.mirror_mode != 0,
            show_focus_line: self.show_focus_line != 0,
            created_at,
            updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        let script = repo.create(&NewScript::new("Hello")).await.unwrap();

        assert!(script.id > 0);
        assert_eq!(script.title, "Untitled");
        assert_eq!(script.content, "Hello");
        assert_eq!(script.speed, 200);
        assert_eq!(script.font_size, "medium");
        assert!(!script.mirror_mode);
        assert!(script.show_focus_line);
        assert!(script.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        let first = repo.create(&NewScript::new("one")).await.unwrap();
        let second = repo.create(&NewScript::new("two")).await.unwrap();
        let third = repo.create(&NewScript::new("three")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);
        assert_ne!(first.id, third.id);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_create_with_all_fields() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        let new_script = NewScript::new("Line one\nLine two")
            .with_title("Opening")
            .with_speed(350)
            .with_font_size("large")
            .with_mirror_mode(true)
            .with_show_focus_line(false);
        let script = repo.create(&new_script).await.unwrap();

        let fetched = repo.get(script.id).await.unwrap().unwrap();
        assert_eq!(fetched, script);
        assert_eq!(fetched.title, "Opening");
        assert_eq!(fetched.content, "Line one\nLine two");
        assert_eq!(fetched.speed, 350);
        assert_eq!(fetched.font_size, "large");
        assert!(fetched.mirror_mode);
        assert!(!fetched.show_focus_line);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        assert!(repo.get(999_999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_only_touches_supplied_fields() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        let created = repo
            .create(&NewScript::new("Hello").with_title("Intro"))
            .await
            .unwrap();
        let updated = repo
            .update(created.id, &ScriptUpdate::new().speed(300))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.speed, 300);
        assert_eq!(updated.title, "Intro");
        assert_eq!(updated.content, "Hello");
        assert_eq!(updated.font_size, created.font_size);
        assert_eq!(updated.mirror_mode, created.mirror_mode);
        assert_eq!(updated.show_focus_line, created.show_focus_line);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.unwrap() >= created.created_at);
    }

    #[tokio::test]
    async fn test_update_flags_and_text() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        let created = repo.create(&NewScript::new("Hello")).await.unwrap();
        let update = ScriptUpdate::new()
            .title("Renamed")
            .content("New body")
            .font_size("small")
            .mirror_mode(true)
            .show_focus_line(false);
        let updated = repo.update(created.id, &update).await.unwrap().unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.content, "New body");
        assert_eq!(updated.font_size, "small");
        assert!(updated.mirror_mode);
        assert!(!updated.show_focus_line);
        assert_eq!(updated.speed, 200);
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at_monotonically() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        let created = repo.create(&NewScript::new("Hello")).await.unwrap();
        let first = repo
            .update(created.id, &ScriptUpdate::new().speed(210))
            .await
            .unwrap()
            .unwrap();
        let second = repo
            .update(created.id, &ScriptUpdate::new().speed(220))
            .await
            .unwrap()
            .unwrap();

        let first_at = first.updated_at.unwrap();
        let second_at = second.updated_at.unwrap();
        assert!(first_at >= created.created_at);
        assert!(second_at >= first_at);
        assert_eq!(second.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_empty_update_sets_updated_at_only() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        let created = repo.create(&NewScript::new("Hello")).await.unwrap();
        let updated = repo
            .update(created.id, &ScriptUpdate::new())
            .await
            .unwrap()
            .unwrap();

        assert!(updated.updated_at.is_some());
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.speed, created.speed);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        let result = repo
            .update(999_999, &ScriptUpdate::new().speed(300))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        let script = repo.create(&NewScript::new("Hello")).await.unwrap();

        assert!(repo.delete(script.id).await.unwrap());
        assert!(repo.get(script.id).await.unwrap().is_none());
        assert!(!repo.delete(script.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_has_no_side_effects() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        repo.create(&NewScript::new("keep me")).await.unwrap();
        assert!(!repo.delete(999_999).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_pagination_is_disjoint_and_ordered() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        for i in 0..7 {
            repo.create(&NewScript::new(format!("script {i}")))
                .await
                .unwrap();
        }

        let first = repo.list(0, 3).await.unwrap();
        let second = repo.list(3, 2).await.unwrap();
        let combined = repo.list(0, 5).await.unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 2);
        let joined: Vec<i64> = first.iter().chain(&second).map(|s| s.id).collect();
        let expected: Vec<i64> = combined.iter().map(|s| s.id).collect();
        assert_eq!(joined, expected);
        assert!(expected.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_list_truncates_to_available() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        for i in 0..3 {
            repo.create(&NewScript::new(format!("script {i}")))
                .await
                .unwrap();
        }

        assert_eq!(repo.list(0, 100).await.unwrap().len(), 3);
        assert_eq!(repo.list(2, 100).await.unwrap().len(), 1);
        assert!(repo.list(10, 100).await.unwrap().is_empty());
        assert!(repo.list(0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleted_script_absent_from_list() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        let mut repo = ScriptRepository::new(&mut conn);

        let keep = repo.create(&NewScript::new("keep")).await.unwrap();
        let gone = repo.create(&NewScript::new("gone")).await.unwrap();
        repo.delete(gone.id).await.unwrap();

        let ids: Vec<i64> = repo
            .list(0, 100)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![keep.id]);
    }

    #[tokio::test]
    async fn test_corrupt_timestamp_is_reported() {
        let db = setup().await;
        let mut conn = db.acquire().await.unwrap();
        sqlx::query("INSERT INTO scripts (content, created_at) VALUES ('x', 'garbage')")
            .execute(&mut *conn)
            .await
            .unwrap();

        let mut repo = ScriptRepository::new(&mut conn);
        let result = repo.list(0, 10).await;
        assert!(matches!(result, Err(PrompterError::Corrupt(_))));
    }
}
