//! Session-level orchestration: wires user actions to the invitee store, the
//! template store and the spreadsheet adapter, and keeps the per-session
//! state (loaded list, sent markers, uploaded file, status banner).

use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::domain::{
    models::{
        import::{ExportFile, ImportEntry, ImportOutcome, UploadedFile},
        invitee::{Invitee, NewInvitee},
        template::DEFAULT_TEMPLATE,
    },
    ports::{InviteeRepository, SpreadsheetAdapter, TemplateRepository},
    services::{
        autosave::TemplateAutosaver,
        export::{check_preconditions, generate_export},
        import::import_entries,
        pagination::{paginate, Page},
        renderer::render,
        sent_tracker::SentTracker,
        share::share_link,
    },
};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusBanner {
    #[default]
    Idle,
    Success,
    Error(String),
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub share_base_url: String,
    pub export_filename: String,
    pub page_size: usize,
    pub template_save_debounce: Duration,
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            share_base_url: config.share_base_url.clone(),
            export_filename: config.export_filename.clone(),
            page_size: config.page_size,
            template_save_debounce: Duration::from_millis(config.template_save_debounce_ms),
        }
    }
}

pub struct InvitationSession {
    invitee_repo: Arc<dyn InviteeRepository>,
    template_repo: Arc<dyn TemplateRepository>,
    spreadsheet: Arc<dyn SpreadsheetAdapter>,
    autosaver: TemplateAutosaver,
    settings: SessionSettings,

    invitees: Vec<Invitee>,
    sent: SentTracker,
    uploaded: Option<UploadedFile>,
    template: String,
    selected_name: Option<String>,
    status: StatusBanner,
    last_import: Option<ImportOutcome>,
}

impl InvitationSession {
    pub fn new(
        invitee_repo: Arc<dyn InviteeRepository>,
        template_repo: Arc<dyn TemplateRepository>,
        spreadsheet: Arc<dyn SpreadsheetAdapter>,
        settings: SessionSettings,
    ) -> Self {
        let autosaver = TemplateAutosaver::new(template_repo.clone(), settings.template_save_debounce);
        Self {
            invitee_repo,
            template_repo,
            spreadsheet,
            autosaver,
            settings,
            invitees: Vec::new(),
            sent: SentTracker::new(),
            uploaded: None,
            template: DEFAULT_TEMPLATE.to_string(),
            selected_name: None,
            status: StatusBanner::Idle,
            last_import: None,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.invitee_repo.clone(),
            state.template_repo.clone(),
            state.spreadsheet.clone(),
            SessionSettings::from(&state.config),
        )
    }

    pub fn invitees(&self) -> &[Invitee] {
        &self.invitees
    }

    pub fn sent(&self) -> &SentTracker {
        &self.sent
    }

    pub fn is_sent(&self, name: &str) -> bool {
        self.sent.is_sent(name)
    }

    pub fn status(&self) -> &StatusBanner {
        &self.status
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected_name.as_deref()
    }

    pub fn uploaded_file(&self) -> Option<&UploadedFile> {
        self.uploaded.as_ref()
    }

    /// Outcome of the most recent batch import, kept even when the reload after it failed.
    pub fn last_import(&self) -> Option<&ImportOutcome> {
        self.last_import.as_ref()
    }

    pub fn is_template_save_pending(&self) -> bool {
        self.autosaver.is_pending()
    }

    pub fn select(&mut self, name: &str) {
        self.selected_name = Some(name.to_string());
    }

    /// Loads the invitee list and the stored template.
    pub async fn load(&mut self) -> Result<(), AppError> {
        if let Err(e) = self.refresh().await {
            error!("Error loading names: {}", e);
            return Err(e);
        }

        match self.template_repo.get().await {
            Ok(Some(doc)) if !doc.content.is_empty() => self.template = doc.content,
            Ok(_) => {}
            Err(e) => {
                error!("Error loading template: {}", e);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Remembers the file, imports its rows and reloads the list.
    pub async fn upload(&mut self, file: UploadedFile) -> Result<ImportOutcome, AppError> {
        self.status = StatusBanner::Idle;
        info!("Uploading {} ({} bytes)", file.filename, file.bytes.len());

        let entries = match self.spreadsheet.parse(&file.bytes) {
            Ok(entries) => entries,
            Err(e) => {
                self.uploaded = Some(file);
                return Err(self.fail(e, "Failed to read Excel file"));
            }
        };
        self.uploaded = Some(file);

        let outcome = self.import(&entries).await?;
        self.status = StatusBanner::Success;
        Ok(outcome)
    }

    /// Imports manually entered names.
    pub async fn add_names(&mut self, entries: &[ImportEntry]) -> Result<ImportOutcome, AppError> {
        let outcome = self.import(entries).await?;
        self.status = StatusBanner::Idle;
        Ok(outcome)
    }

    pub async fn update(&mut self, id: &str, name: &str, phone: Option<&str>) -> Result<Invitee, AppError> {
        let details = NewInvitee::new(name, phone).map_err(|e| self.fail(e, "Name cannot be empty"))?;

        let updated = match self.invitee_repo.update(id, &details).await {
            Ok(updated) => updated,
            Err(e) => return Err(self.fail(e, "Failed to update name")),
        };
        self.reload_or_report("Failed to update name").await?;
        Ok(updated)
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), AppError> {
        if let Err(e) = self.invitee_repo.delete(id).await {
            return Err(self.fail(e, "Failed to delete name"));
        }
        self.reload_or_report("Failed to delete name").await
    }

    /// Deletes every record and drops all sent markers.
    pub async fn delete_all(&mut self) -> Result<u64, AppError> {
        let deleted = match self.invitee_repo.delete_all().await {
            Ok(count) => count,
            Err(e) => return Err(self.fail(e, "Failed to delete all names")),
        };
        self.sent.clear();
        info!("Deleted all {} names", deleted);

        self.reload_or_report("Failed to delete all names").await?;
        Ok(deleted)
    }

    /// Replaces the template and schedules a debounced save.
    ///
    /// An empty template is never stored; it only drops the pending save.
    pub fn edit_template(&mut self, text: impl Into<String>) {
        self.template = text.into();
        if self.template.is_empty() {
            self.autosaver.cancel();
        } else {
            self.autosaver.schedule(self.template.clone());
        }
    }

    pub async fn flush_template(&self) {
        self.autosaver.flush().await;
    }

    pub fn render_for(&self, name: &str) -> String {
        render(&self.template, name)
    }

    pub fn mark_sent(&mut self, name: &str) {
        self.sent.mark_sent(name);
    }

    /// Builds the share link for an invitee and marks its name as sent.
    pub fn share(&mut self, id: &str) -> Result<String, AppError> {
        let invitee = self.invitees.iter()
            .find(|i| i.id == id)
            .ok_or(AppError::NotFound("Invitee not found".into()))?;

        let message = render(&self.template, &invitee.name);
        let link = share_link(&self.settings.share_base_url, &message, invitee.phone.as_deref());
        let name = invitee.name.clone();
        self.sent.mark_sent(&name);
        Ok(link)
    }

    /// Renders the template over the uploaded file's rows.
    pub fn generate(&mut self) -> Result<ExportFile, AppError> {
        let file = match check_preconditions(self.invitees.len(), self.uploaded.as_ref()) {
            Ok(file) => file,
            Err(rejection) => {
                warn!("Export rejected: {}", rejection);
                self.status = StatusBanner::Error(rejection.to_string());
                return Err(rejection.into());
            }
        };

        self.status = StatusBanner::Idle;
        match generate_export(self.spreadsheet.as_ref(), &file.bytes, &self.template, &self.settings.export_filename) {
            Ok(export) => {
                self.status = StatusBanner::Success;
                Ok(export)
            }
            Err(e) => Err(self.fail(e, "Failed to generate Excel")),
        }
    }

    pub fn page(&self, page: usize) -> Page<Invitee> {
        paginate(&self.invitees, page, self.settings.page_size)
    }

    async fn import(&mut self, entries: &[ImportEntry]) -> Result<ImportOutcome, AppError> {
        let outcome = import_entries(self.invitee_repo.as_ref(), entries).await;
        self.last_import = Some(outcome.clone());

        if let Err(e) = self.refresh().await {
            warn!(
                "Reload failed after import (created {}, stopped at {:?})",
                outcome.created, outcome.failed_at
            );
            return Err(self.fail(e, "Failed to load names"));
        }

        if !outcome.is_complete() {
            let cause = outcome.error.clone().unwrap_or_default();
            return Err(self.fail(AppError::InternalWithMsg(cause), "Failed to add name"));
        }
        Ok(outcome)
    }

    async fn reload_or_report(&mut self, message: &str) -> Result<(), AppError> {
        match self.refresh().await {
            Ok(()) => Ok(()),
            Err(e) => Err(self.fail(e, message)),
        }
    }

    async fn refresh(&mut self) -> Result<(), AppError> {
        self.invitees = self.invitee_repo.list().await?;

        let names: Vec<&str> = self.invitees.iter().map(|i| i.name.as_str()).collect();
        self.sent.reconcile(&names);

        let selected_present = self.selected_name.as_deref()
            .is_some_and(|selected| names.contains(&selected));
        if !selected_present {
            self.selected_name = names.first().map(|n| n.to_string());
        }
        Ok(())
    }

    fn fail(&mut self, e: AppError, message: &str) -> AppError {
        error!("{}: {}", message, e);
        let shown = match &e {
            AppError::Validation(msg) => msg.clone(),
            _ => message.to_string(),
        };
        self.status = StatusBanner::Error(shown);
        e
    }
}
