//! Note repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use notelet_core::{new_note_id, Note, NoteDraft, NoteRepository, Result};

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn list(&self) -> Result<Vec<Note>> {
        // UUIDv7 ids are time-ordered, so this is insertion order
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, title, body, archived FROM note ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    async fn insert(&self, draft: NoteDraft) -> Result<Note> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO note (id, title, body, archived)
            VALUES ($1, $2, $3, COALESCE($4, FALSE))
            RETURNING id, title, body, archived
            "#,
        )
        .bind(new_note_id())
        .bind(draft.title)
        .bind(draft.body)
        .bind(draft.archived)
        .fetch_one(&self.pool)
        .await?;
        Ok(note)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            "SELECT id, title, body, archived FROM note WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    async fn replace(&self, id: Uuid, draft: NoteDraft) -> Result<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE note
            SET title = $2, body = $3, archived = COALESCE($4, FALSE)
            WHERE id = $1
            RETURNING id, title, body, archived
            "#,
        )
        .bind(id)
        .bind(draft.title)
        .bind(draft.body)
        .bind(draft.archived)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM note").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
