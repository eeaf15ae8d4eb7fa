use invitation_backend::{
    api::router::create_router,
    config::Config,
    domain::models::{invitee::{Invitee, NewInvitee}, template::TemplateDocument},
    domain::ports::{InviteeRepository, TemplateRepository},
    error::AppError,
    infra::{
        factory::connect_sqlite,
        repositories::{sqlite_invitee_repo::SqliteInviteeRepo, sqlite_template_repo::SqliteTemplateRepo},
        spreadsheet::xlsx_adapter::XlsxSpreadsheetAdapter,
    },
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use rust_xlsxwriter::Workbook;
use serde_json::Value;
use sqlx::{Pool, Sqlite};
use std::sync::{atomic::{AtomicBool, Ordering}, Arc, Mutex};
use uuid::Uuid;

pub const BOUNDARY: &str = "----invitation-test-boundary";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let pool = connect_sqlite(&db_url)
            .await
            .expect("Failed to connect to test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            template_save_debounce_ms: 50,
            ..Config::default()
        };

        let state = Arc::new(AppState {
            config,
            invitee_repo: Arc::new(SqliteInviteeRepo::new(pool.clone())),
            template_repo: Arc::new(SqliteTemplateRepo::new(pool.clone())),
            spreadsheet: Arc::new(XlsxSpreadsheetAdapter::new()),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

/// Builds a `multipart/form-data` request with an optional file and template field.
#[allow(dead_code)]
pub fn multipart_request(uri: &str, file: Option<&[u8]>, template: Option<&str>) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();

    if let Some(bytes) = file {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"file\"; filename=\"guests.xlsx\"\r\n");
        body.extend_from_slice(b"Content-Type: application/vnd.openxmlformats-officedocument.spreadsheetml.sheet\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    if let Some(text) = template {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"template\"\r\n\r\n");
        body.extend_from_slice(text.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY))
        .body(Body::from(body))
        .unwrap()
}

/// Workbook with a header row followed by `(name, phone)` rows.
#[allow(dead_code)]
pub fn guest_workbook(rows: &[(&str, Option<&str>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Nama").unwrap();
    sheet.write_string(0, 1, "WhatsApp").unwrap();
    for (idx, (name, phone)) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, *name).unwrap();
        if let Some(phone) = phone {
            sheet.write_string(row, 1, *phone).unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// In-memory invitee store; optionally fails on the N-th create call (0-based)
/// or on every `list` once `fail_listing(true)` is set.
#[allow(dead_code)]
#[derive(Default)]
pub struct MemoryInviteeRepo {
    rows: Mutex<Vec<Invitee>>,
    creates: Mutex<usize>,
    fail_on_create: Option<usize>,
    fail_list: AtomicBool,
}

#[allow(dead_code)]
impl MemoryInviteeRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on_create(index: usize) -> Self {
        Self {
            fail_on_create: Some(index),
            ..Self::default()
        }
    }

    pub fn fail_listing(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn names(&self) -> Vec<String> {
        self.rows.lock().unwrap().iter().map(|i| i.name.clone()).collect()
    }
}

#[async_trait]
impl InviteeRepository for MemoryInviteeRepo {
    async fn list(&self) -> Result<Vec<Invitee>, AppError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(AppError::InternalWithMsg("store unavailable".into()));
        }
        let mut rows = self.rows.lock().unwrap().clone();
        rows.reverse();
        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Invitee>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn create(&self, invitee: &Invitee) -> Result<Invitee, AppError> {
        let attempt = {
            let mut creates = self.creates.lock().unwrap();
            let attempt = *creates;
            *creates += 1;
            attempt
        };
        if self.fail_on_create == Some(attempt) {
            return Err(AppError::InternalWithMsg("store rejected insert".into()));
        }
        self.rows.lock().unwrap().push(invitee.clone());
        Ok(invitee.clone())
    }

    async fn update(&self, id: &str, details: &NewInvitee) -> Result<Invitee, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut()
            .find(|i| i.id == id)
            .ok_or(AppError::NotFound("Invitee not found".into()))?;
        row.name = details.name.clone();
        row.phone = details.phone.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|i| i.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound("Invitee not found".into()));
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let count = rows.len() as u64;
        rows.clear();
        Ok(count)
    }
}

/// In-memory template store recording every write.
#[allow(dead_code)]
#[derive(Default)]
pub struct MemoryTemplateRepo {
    saves: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MemoryTemplateRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saves(&self) -> Vec<String> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait]
impl TemplateRepository for MemoryTemplateRepo {
    async fn get(&self) -> Result<Option<TemplateDocument>, AppError> {
        Ok(self.saves.lock().unwrap().last().cloned().map(TemplateDocument::new))
    }

    async fn set(&self, content: &str) -> Result<TemplateDocument, AppError> {
        self.saves.lock().unwrap().push(content.to_string());
        Ok(TemplateDocument::new(content.to_string()))
    }
}
