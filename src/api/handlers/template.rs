use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::SaveTemplateRequest, responses::TemplateResponse};
use crate::domain::models::template::DEFAULT_TEMPLATE;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Stored template, or the built-in default when nothing was saved yet.
pub async fn current_template(state: &AppState) -> Result<String, AppError> {
    let stored = state.template_repo.get().await?;
    Ok(stored
        .map(|doc| doc.content)
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()))
}

pub async fn get_template(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let template = current_template(&state).await?;
    Ok(Json(TemplateResponse { template }))
}

pub async fn save_template(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SaveTemplateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let saved = state.template_repo.set(&payload.template).await?;
    info!("Saved template ({} chars)", saved.content.chars().count());
    Ok(Json(TemplateResponse { template: saved.content }))
}
