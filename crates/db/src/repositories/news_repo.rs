//! Repository for the `news` table.

use newswire_core::pagination;
use newswire_core::types::DbId;
use sqlx::PgPool;

use crate::models::news::{CreateNews, News, NewsWithAuthor, UpdateNews};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, image, author_id, created_at, updated_at";

/// Joined column list including the author's display name.
const JOINED_COLUMNS: &str = "n.id, n.title, n.content, n.image, n.author_id, \
                              u.name AS author_name, n.created_at, n.updated_at";

/// Provides CRUD operations for news articles.
pub struct NewsRepo;

impl NewsRepo {
    /// Insert a new article, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateNews) -> Result<News, sqlx::Error> {
        let query = format!(
            "INSERT INTO news (title, content, image, author_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image)
            .bind(input.author_id)
            .fetch_one(pool)
            .await
    }

    /// Find an article by ID, joined with the author's display name.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<NewsWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM news n
             JOIN users u ON n.author_id = u.id
             WHERE n.id = $1"
        );
        sqlx::query_as::<_, NewsWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of articles newest-first, plus the total row count.
    ///
    /// `search`, when present, is a case-insensitive substring match against
    /// title or content.
    pub async fn list(
        pool: &PgPool,
        page: i64,
        limit: i64,
        search: Option<&str>,
    ) -> Result<(Vec<NewsWithAuthor>, i64), sqlx::Error> {
        let offset = pagination::offset(page, limit);

        match search {
            Some(term) if !term.is_empty() => {
                let pattern = format!("%{term}%");
                let total: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM news WHERE title ILIKE $1 OR content ILIKE $1",
                )
                .bind(&pattern)
                .fetch_one(pool)
                .await?;

                let query = format!(
                    "SELECT {JOINED_COLUMNS} FROM news n
                     JOIN users u ON n.author_id = u.id
                     WHERE n.title ILIKE $1 OR n.content ILIKE $1
                     ORDER BY n.created_at DESC, n.id DESC
                     LIMIT $2 OFFSET $3"
                );
                let rows = sqlx::query_as::<_, NewsWithAuthor>(&query)
                    .bind(&pattern)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?;
                Ok((rows, total))
            }
            _ => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news")
                    .fetch_one(pool)
                    .await?;

                let query = format!(
                    "SELECT {JOINED_COLUMNS} FROM news n
                     JOIN users u ON n.author_id = u.id
                     ORDER BY n.created_at DESC, n.id DESC
                     LIMIT $1 OFFSET $2"
                );
                let rows = sqlx::query_as::<_, NewsWithAuthor>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?;
                Ok((rows, total))
            }
        }
    }

    /// Partial update. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNews,
    ) -> Result<Option<News>, sqlx::Error> {
        let query = format!(
            "UPDATE news SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                image = COALESCE($4, image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article. Comments cascade via the foreign key.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
