use crate::domain::models::{
    import::ImportEntry,
    invitee::{Invitee, NewInvitee},
    template::TemplateDocument,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait InviteeRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Invitee>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Invitee>, AppError>;
    async fn create(&self, invitee: &Invitee) -> Result<Invitee, AppError>;
    async fn update(&self, id: &str, details: &NewInvitee) -> Result<Invitee, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    /// Returns the number of deleted rows.
    async fn delete_all(&self) -> Result<u64, AppError>;
}

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn get(&self) -> Result<Option<TemplateDocument>, AppError>;
    async fn set(&self, content: &str) -> Result<TemplateDocument, AppError>;
}

pub trait SpreadsheetAdapter: Send + Sync {
    /// First sheet, header row skipped, column A name, column B phone.
    fn parse(&self, bytes: &[u8]) -> Result<Vec<ImportEntry>, AppError>;
    /// One row per entry with the rendered message.
    fn generate(&self, template: &str, entries: &[ImportEntry]) -> Result<Vec<u8>, AppError>;
}
