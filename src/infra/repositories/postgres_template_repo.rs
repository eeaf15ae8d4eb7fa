use crate::domain::{models::template::{TemplateDocument, CURRENT_TEMPLATE_ID}, ports::TemplateRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresTemplateRepo {
    pool: PgPool,
}

impl PostgresTemplateRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateRepository for PostgresTemplateRepo {
    async fn get(&self) -> Result<Option<TemplateDocument>, AppError> {
        sqlx::query_as::<_, TemplateDocument>(
            "SELECT id, content, updated_at FROM templates WHERE id = $1",
        )
            .bind(CURRENT_TEMPLATE_ID)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn set(&self, content: &str) -> Result<TemplateDocument, AppError> {
        let doc = TemplateDocument::new(content.to_string());
        sqlx::query_as::<_, TemplateDocument>(
            "INSERT INTO templates (id, content, updated_at) VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE SET content = EXCLUDED.content, updated_at = EXCLUDED.updated_at
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
