use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Key of the single process-wide template row.
pub const CURRENT_TEMPLATE_ID: &str = "current";

pub const DEFAULT_TEMPLATE: &str = "Assalamu'alaikum Wr. Wb.

Tanpa mengurangi rasa hormat, kami mengundang Bapak/Ibu/Saudara/i {{nama}} untuk menghadiri acara pernikahan kami.

Terima kasih banyak atas perhatian dan doa restunya.";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct TemplateDocument {
    pub id: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl TemplateDocument {
    pub fn new(content: String) -> Self {
        Self {
            id: CURRENT_TEMPLATE_ID.to_string(),
            content,
            updated_at: Utc::now(),
        }
    }
}
