use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, invitee, spreadsheet, template};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_check))

        // Names
        .route("/api/names", get(invitee::list_invitees).post(invitee::create_invitee).delete(invitee::delete_all_invitees))
        .route("/api/names/import", post(invitee::import_invitees))
        .route("/api/names/{id}", put(invitee::update_invitee).delete(invitee::delete_invitee))
        .route("/api/names/{id}/preview", get(invitee::preview_invitee))

        // Template
        .route("/api/template", get(template::get_template).post(template::save_template))

        // Spreadsheets
        .route("/api/read-excel", post(spreadsheet::read_excel))
        .route("/api/generate-excel", post(spreadsheet::generate_excel))

        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
