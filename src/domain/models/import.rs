use serde::{Deserialize, Serialize};

/// One parsed spreadsheet row (or manually entered name).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ImportEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ImportEntry {
    pub fn new(name: impl Into<String>, phone: Option<&str>) -> Self {
        Self {
            name: name.into(),
            phone: phone.map(str::to_string),
        }
    }
}

/// Result of a sequential batch import.
///
/// `failed_at` is the index into the submitted entries (blank rows counted)
/// where the import stopped. Records created before that index stay persisted.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct ImportOutcome {
    pub created: usize,
    pub failed_at: Option<usize>,
    pub error: Option<String>,
}

impl ImportOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed_at.is_none()
    }
}

/// The most recently uploaded spreadsheet, kept for a later export.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Generated spreadsheet ready for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}
