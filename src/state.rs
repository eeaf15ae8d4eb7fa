use std::sync::Arc;
use crate::domain::ports::{InviteeRepository, SpreadsheetAdapter, TemplateRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub invitee_repo: Arc<dyn InviteeRepository>,
    pub template_repo: Arc<dyn TemplateRepository>,
    pub spreadsheet: Arc<dyn SpreadsheetAdapter>,
}
