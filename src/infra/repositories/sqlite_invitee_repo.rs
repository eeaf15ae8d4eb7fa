use crate::domain::{models::invitee::{Invitee, NewInvitee}, ports::InviteeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteInviteeRepo {
    pool: SqlitePool,
}

impl SqliteInviteeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteeRepository for SqliteInviteeRepo {
    async fn list(&self) -> Result<Vec<Invitee>, AppError> {
        sqlx::query_as::<_, Invitee>(
            "SELECT id, name, phone, created_at FROM names ORDER BY created_at DESC, rowid DESC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Invitee>, AppError> {
        sqlx::query_as::<_, Invitee>(
            "SELECT id, name, phone, created_at FROM names WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create(&self, invitee: &Invitee) -> Result<Invitee, AppError> {
        sqlx::query_as::<_, Invitee>(
            "INSERT INTO names (id, name, phone, created_at) VALUES (?, ?, ?, ?) RETURNING id, name, phone, created_at",
        )
            .bind(&invitee.id)
            .bind(&invitee.name)
            .bind(&invitee.phone)
            .bind(invitee.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: &str, details: &NewInvitee) -> Result<Invitee, AppError> {
        sqlx::query_as::<_, Invitee>(
            "UPDATE names SET name = ?, phone = ? WHERE id = ? RETURNING id, name, phone, created_at"
        )
            .bind(&details.name)
            .bind(&details.phone)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Invitee not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM names WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Invitee not found".into()));
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM names")
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
