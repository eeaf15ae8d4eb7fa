use serde::Serialize;
use crate::domain::models::import::ImportEntry;

#[derive(Serialize)]
pub struct DeleteAllResponse {
    pub success: bool,
    pub deleted: u64,
}

#[derive(Serialize)]
pub struct TemplateResponse {
    pub template: String,
}

#[derive(Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<ImportEntry>,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub id: String,
    pub name: String,
    pub message: String,
    pub share_link: String,
}
