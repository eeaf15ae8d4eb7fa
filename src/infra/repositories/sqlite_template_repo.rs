use crate::domain::{models::template::{TemplateDocument, CURRENT_TEMPLATE_ID}, ports::TemplateRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTemplateRepo {
    pool: SqlitePool,
}

impl SqliteTemplateRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateRepository for SqliteTemplateRepo {
    async fn get(&self) -> Result<Option<TemplateDocument>, AppError> {
        sqlx::query_as::<_, TemplateDocument>(
            "SELECT id, content, updated_at FROM templates WHERE id = ?",
        )
            .bind(CURRENT_TEMPLATE_ID)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn set(&self, content: &str) -> Result<TemplateDocument, AppError> {
        let doc = TemplateDocument::new(content.to_string());
        sqlx::query_as::<_, TemplateDocument>(
            "INSERT INTO templates (id, content, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET content = excluded.content, updated_at = excluded.updated_at
             RETURNING id, content, updated_at",
        )
            .bind(&doc.id)
            .bind(&doc.content)
            .bind(doc.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
