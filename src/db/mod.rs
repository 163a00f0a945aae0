//! Database module for ProPrompter.
//!
//! The store is chosen once at startup from [`DatabaseConfig`]: a configured
//! connection string selects a client/server database (PostgreSQL), otherwise
//! the embedded SQLite file is used. Either way the rest of the crate sees a
//! single [`Database`] handle over sqlx's `Any` driver.

mod schema;

pub use schema::{postgres_schema, sqlite_schema};

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::any::{AnyConnectOptions, AnyPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::{Any, AnyPool};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::{PrompterError, Result};

/// A pooled connection checked out for the duration of one unit of work.
///
/// Dropping it returns the connection to the pool.
pub type DbSession = PoolConnection<Any>;

/// Concrete database backend behind the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Embedded SQLite file (or in-memory database in tests).
    Sqlite,
    /// PostgreSQL server.
    Postgres,
}

impl Backend {
    /// Detect the backend from a connection string's scheme.
    pub fn from_url(url: &str) -> Result<Self> {
        let scheme = url
            .split_once(':')
            .map(|(scheme, _)| scheme.to_ascii_lowercase())
            .unwrap_or_default();
        match scheme.as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            _ => Err(PrompterError::Config(format!(
                "unsupported database url scheme: {scheme:?}"
            ))),
        }
    }

    /// Backend name for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Postgres => "postgres",
        }
    }

    /// Whether this is a client/server database that needs liveness settings.
    pub fn is_client_server(&self) -> bool {
        matches!(self, Backend::Postgres)
    }

    fn schema(&self) -> &'static [&'static str] {
        match self {
            Backend::Sqlite => sqlite_schema(),
            Backend::Postgres => postgres_schema(),
        }
    }
}

/// Database handle: a connection pool plus the backend it talks to.
#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
    backend: Backend,
}

impl Database {
    /// Build the pool described by `config` without connecting yet.
    ///
    /// Connections are opened on first use, so an unreachable store does not
    /// prevent startup. Only a malformed or unsupported URL is an error here.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        sqlx::any::install_default_drivers();

        let url = config.connection_url();
        let backend = Backend::from_url(&url)?;
        if config.uses_fallback() {
            prepare_sqlite_file(&config.sqlite_path)?;
            info!(path = %config.sqlite_path, "No database url configured, using embedded SQLite");
        }

        let options = AnyConnectOptions::from_str(&url)
            .map_err(|e| PrompterError::Config(format!("invalid database url: {e}")))?;

        let mut pool_options = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs));

        pool_options = if backend.is_client_server() {
            pool_options
                .test_before_acquire(true)
                .max_lifetime(Some(Duration::from_secs(config.pool_recycle_secs)))
                .idle_timeout(Some(idle_timeout(config)))
        } else {
            pool_options.test_before_acquire(false)
        };

        let pool = pool_options.connect_lazy_with(options);
        info!(backend = backend.as_str(), "Database pool created");

        Ok(Self { pool, backend })
    }

    /// Open an in-memory SQLite database with the schema applied.
    ///
    /// The pool keeps exactly one connection alive forever, since every
    /// in-memory connection is a separate database.
    pub async fn open_in_memory() -> Result<Self> {
        sqlx::any::install_default_drivers();
        debug!("Opening in-memory database");

        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let db = Self {
            pool,
            backend: Backend::Sqlite,
        };
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Create the schema if it does not exist yet. Idempotent.
    pub async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.acquire().await?;
        for statement in self.backend.schema() {
            sqlx::query(statement).execute(&mut *conn).await?;
        }
        info!(backend = self.backend.as_str(), "Database schema verified");
        Ok(())
    }

    /// Check out a connection for one request.
    pub async fn acquire(&self) -> Result<DbSession> {
        self.pool
            .acquire()
            .await
            .map_err(|e| PrompterError::DatabaseConnection(e.to_string()))
    }

    /// Backend in use.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Check if a table exists.
    pub async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let sql = match self.backend {
            Backend::Sqlite => "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = $1",
            Backend::Postgres => {
                "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = $1"
            }
        };
        let count: i64 = sqlx::query_scalar(sql)
            .bind(table_name)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("backend", &self.backend)
            .finish()
    }
}

/// Idle connections are closed after twice the recycle interval.
fn idle_timeout(config: &DatabaseConfig) -> Duration {
    Duration::from_secs(config.pool_recycle_secs.saturating_mul(2))
}

/// Make sure the directory holding the SQLite file exists.
fn prepare_sqlite_file(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
