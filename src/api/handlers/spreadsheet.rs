use axum::{extract::{State, Multipart}, http::header, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::EntriesResponse;
use crate::api::handlers::template::current_template;
use crate::domain::models::import::UploadedFile;
use crate::domain::services::export::generate_export;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Fields of the `file` / `template` multipart form.
#[derive(Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub template: Option<String>,
}

pub async fn read_upload(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload.xlsx").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                form.file = Some(UploadedFile { filename, bytes: bytes.to_vec() });
            }
            Some("template") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                form.template = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}

pub async fn read_excel(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_upload(multipart).await?;
    let file = upload.file.ok_or(AppError::Validation("No file provided".into()))?;

    let entries = state.spreadsheet.parse(&file.bytes)?;
    info!("Read {} entries from {}", entries.len(), file.filename);
    Ok(Json(EntriesResponse { entries }))
}

pub async fn generate_excel(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_upload(multipart).await?;
    let file = upload.file.ok_or(AppError::Validation("No file provided".into()))?;
    let template = match upload.template {
        Some(template) => template,
        None => current_template(&state).await?,
    };

    let export = generate_export(
        state.spreadsheet.as_ref(),
        &file.bytes,
        &template,
        &state.config.export_filename,
    )?;
    info!("Generated {} ({} bytes) from {}", export.filename, export.bytes.len(), file.filename);

    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.bytes,
    ))
}
