use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, req: CreatePostRequest) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Post, DomainError>;
    async fn update(&self, id: Uuid, req: UpdatePostRequest) -> Result<Post, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<Post>, DomainError>;
}

/// Handle to the `posts` table. The pool is created once in `main` and
/// shared by every worker.
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn post_from_row(row: &PgRow) -> Result<Post, DomainError> {
    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        author: row.try_get("author")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let post = Post::new(req);

        let row = sqlx::query(
            r#"
            INSERT INTO posts (id, title, content, author, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, content, author, created_at, updated_at
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .bind(post.created_at)
        .bind(post.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        post_from_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Post, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, content, author, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => post_from_row(&row),
            None => Err(DomainError::PostNotFound),
        }
    }

    async fn update(&self, id: Uuid, req: UpdatePostRequest) -> Result<Post, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE posts
            SET
                title = COALESCE($1, title),
                content = COALESCE($2, content),
                author = COALESCE($3, author),
                updated_at = GREATEST($4, updated_at)
            WHERE id = $5
            RETURNING id, title, content, author, created_at, updated_at
            "#,
        )
        .bind(req.title)
        .bind(req.content)
        .bind(req.author)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => post_from_row(&row),
            None => Err(DomainError::PostNotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            Err(DomainError::PostNotFound)
        } else {
            Ok(())
        }
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, author, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        rows.iter().map(post_from_row).collect()
    }
}
