//! Script service for ProPrompter.
//!
//! [`ScriptService`] is the seam between the HTTP layer and persistence.
//! [`DefaultScriptService`] forwards straight to [`ScriptRepository`]; rules
//! that go beyond request validation belong in another implementation.

use async_trait::async_trait;
use sqlx::AnyConnection;

use super::repository::ScriptRepository;
use super::types::{NewScript, Script, ScriptUpdate};
use crate::Result;

/// Pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Number of items to skip.
    pub offset: i64,
    /// Maximum number of items to return.
    pub limit: i64,
}

impl Pagination {
    /// Default page size.
    pub const DEFAULT_LIMIT: i64 = 100;

    /// Create new pagination parameters.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Cap the limit at `max`.
    pub fn clamp(self, max: i64) -> Self {
        Self {
            offset: self.offset,
            limit: self.limit.min(max),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}

/// Operations on scripts, run against the caller's session.
#[async_trait]
pub trait ScriptService: Send + Sync {
    /// Get a script by ID.
    async fn get(&self, session: &mut AnyConnection, id: i64) -> Result<Option<Script>>;

    /// List a page of scripts.
    async fn list(&self, session: &mut AnyConnection, page: Pagination) -> Result<Vec<Script>>;

    /// Create a script.
    async fn create(&self, session: &mut AnyConnection, new_script: NewScript) -> Result<Script>;

    /// Partially update a script. None if it does not exist.
    async fn update(
        &self,
        session: &mut AnyConnection,
        id: i64,
        update: ScriptUpdate,
    ) -> Result<Option<Script>>;

    /// Delete a script. False if it does not exist.
    async fn delete(&self, session: &mut AnyConnection, id: i64) -> Result<bool>;
}

/// Forwards every operation to the repository unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultScriptService;

#[async_trait]
impl ScriptService for DefaultScriptService {
    async fn get(&self, session: &mut AnyConnection, id: i64) -> Result<Option<Script>> {
        ScriptRepository::new(session).get(id).await
    }

    async fn list(&self, session: &mut AnyConnection, page: Pagination) -> Result<Vec<Script>> {
        ScriptRepository::new(session)
            .list(page.offset, page.limit)
            .await
    }

    async fn create(&self, session: &mut AnyConnection, new_script: NewScript) -> Result<Script> {
        let script = ScriptRepository::new(session).create(&new_script).await?;
        tracing::info!(script_id = script.id, "Script created");
        Ok(script)
    }

    async fn update(
        &self,
        session: &mut AnyConnection,
        id: i64,
        update: ScriptUpdate,
    ) -> Result<Option<Script>> {
        ScriptRepository::new(session).update(id, &update).await
    }

    async fn delete(&self, session: &mut AnyConnection, id: i64) -> Result<bool> {
        let deleted = ScriptRepository::new(session).delete(id).await?;
        if deleted {
            tracing::info!(script_id = id, "Script deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_pagination_default() {
        assert_eq!(Pagination::default(), Pagination::new(0, 100));
    }

    #[test]
    fn test_pagination_clamp() {
        assert_eq!(Pagination::new(5, 5000).clamp(1000), Pagination::new(5, 1000));
        assert_eq!(Pagination::new(5, 10).clamp(1000), Pagination::new(5, 10));
    }

    #[tokio::test]
    async fn test_service_through_trait_object() {
        let db = Database::open_in_memory().await.unwrap();
        let service: Box<dyn ScriptService> = Box::new(DefaultScriptService);
        let mut session = db.acquire().await.unwrap();

        let created = service
            .create(&mut session, NewScript::new("Hello"))
            .await
            .unwrap();
        let fetched = service.get(&mut session, created.id).await.unwrap();
        assert_eq!(fetched.as_ref(), Some(&created));

        let updated = service
            .update(&mut session, created.id, ScriptUpdate::new().speed(300))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.speed, 300);

        let page = service
            .list(&mut session, Pagination::default())
            .await
            .unwrap();
        assert_eq!(page.len(), 1);

        assert!(service.delete(&mut session, created.id).await.unwrap());
        assert!(!service.delete(&mut session, created.id).await.unwrap());
        assert!(service
            .get(&mut session, created.id)
            .await
            .unwrap()
            .is_none());
    }
}
