use axum::{extract::{State, Path, Query, Multipart}, http::StatusCode, response::{IntoResponse, Response}, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateInviteeRequest, ListInviteesParams, UpdateInviteeRequest},
    responses::{DeleteAllResponse, PreviewResponse},
};
use crate::api::handlers::spreadsheet::read_upload;
use crate::api::handlers::template::current_template;
use crate::domain::models::invitee::{Invitee, NewInvitee};
use crate::domain::services::{import::import_entries, pagination::paginate, renderer::render, share::share_link};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn list_invitees(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListInviteesParams>,
) -> Result<Response, AppError> {
    let invitees = state.invitee_repo.list().await?;

    match params.page {
        Some(page) => {
            let per_page = params.per_page.unwrap_or(state.config.page_size);
            Ok(Json(paginate(&invitees, page, per_page)).into_response())
        }
        None => Ok(Json(invitees).into_response()),
    }
}

pub async fn create_invitee(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateInviteeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let details = NewInvitee::new(&payload.name, payload.phone.as_deref())?;
    let created = state.invitee_repo.create(&Invitee::new(details)).await?;

    info!("Created invitee: {}", created.id);
    Ok(Json(created))
}

pub async fn update_invitee(
    State(state): State<Arc<AppState>>,
    Path(invitee_id): Path<String>,
    Json(payload): Json<UpdateInviteeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let details = NewInvitee::new(&payload.name, payload.phone.as_deref())?;
    let updated = state.invitee_repo.update(&invitee_id, &details).await?;

    info!("Updated invitee: {}", invitee_id);
    Ok(Json(updated))
}

pub async fn delete_invitee(
    State(state): State<Arc<AppState>>,
    Path(invitee_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.invitee_repo.delete(&invitee_id).await?;
    info!("Deleted invitee: {}", invitee_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn delete_all_invitees(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.invitee_repo.delete_all().await?;
    info!("Deleted all invitees: {}", deleted);
    Ok(Json(DeleteAllResponse { success: true, deleted }))
}

pub async fn preview_invitee(
    State(state): State<Arc<AppState>>,
    Path(invitee_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitee = state.invitee_repo.find_by_id(&invitee_id).await?
        .ok_or(AppError::NotFound("Invitee not found".into()))?;

    let template = current_template(&state).await?;
    let message = render(&template, &invitee.name);
    let link = share_link(&state.config.share_base_url, &message, invitee.phone.as_deref());

    Ok(Json(PreviewResponse {
        id: invitee.id,
        name: invitee.name,
        message,
        share_link: link,
    }))
}

pub async fn import_invitees(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_upload(multipart).await?;
    let file = upload.file.ok_or(AppError::Validation("No file provided".into()))?;
    let entries = state.spreadsheet.parse(&file.bytes)?;

    let outcome = import_entries(state.invitee_repo.as_ref(), &entries).await;
    if outcome.is_complete() {
        info!("Imported {} invitees from {}", outcome.created, file.filename);
        Ok((StatusCode::OK, Json(outcome)))
    } else {
        warn!("Import of {} stopped at entry {:?}", file.filename, outcome.failed_at);
        Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(outcome)))
    }
}
