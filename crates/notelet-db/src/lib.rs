//! # notelet-db
//!
//! PostgreSQL database layer for the notelet notes service.
//!
//! This crate provides:
//! - Connection pool management
//! - The note repository implementation
//!
//! ## Example
//!
//! ```rust,ignore
//! use notelet_db::Database;
//! use notelet_core::{NoteDraft, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/notelet").await?;
//!
//!     let note = db.notes.insert(NoteDraft {
//!         title: Some("Hello".to_string()),
//!         body: Some("world".to_string()),
//!         archived: None,
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod pool;

// Re-export core types
pub use notelet_core::*;

pub use notes::PgNoteRepository;
pub use pool::{create_lazy_pool, create_pool, create_pool_with_config, PoolConfig};

/// Combined database context with all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Note repository for CRUD operations.
    pub notes: PgNoteRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            pool,
        }
    }

    /// Connect to the database with default pool configuration.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Connect to the database with custom pool configuration.
    pub async fn connect_with_config(database_url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(database_url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending database migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }
}
