use crate::domain::{
    models::import::{ExportFile, UploadedFile},
    ports::SpreadsheetAdapter,
};
use crate::error::AppError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportRejection {
    #[error("Please add names first")]
    NoInvitees,
    #[error("Please upload an Excel file first to generate")]
    NoUploadedFile,
}

impl From<ExportRejection> for AppError {
    fn from(rejection: ExportRejection) -> Self {
        AppError::Validation(rejection.to_string())
    }
}

/// Both a non-empty invitee list and an uploaded file are required.
pub fn check_preconditions<'a>(
    invitee_count: usize,
    uploaded: Option<&'a UploadedFile>,
) -> Result<&'a UploadedFile, ExportRejection> {
    if invitee_count == 0 {
        return Err(ExportRejection::NoInvitees);
    }
    uploaded.ok_or(ExportRejection::NoUploadedFile)
}

/// Re-parses the uploaded workbook and renders the template once per row.
pub fn generate_export(
    adapter: &dyn SpreadsheetAdapter,
    file_bytes: &[u8],
    template: &str,
    filename: &str,
) -> Result<ExportFile, AppError> {
    let entries = adapter.parse(file_bytes)?;
    let bytes = adapter.generate(template, &entries)?;
    Ok(ExportFile {
        filename: filename.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload() -> UploadedFile {
        UploadedFile { filename: "guests.xlsx".into(), bytes: vec![1, 2, 3] }
    }

    #[test]
    fn test_empty_list_is_rejected_first() {
        let file = upload();
        assert_eq!(check_preconditions(0, Some(&file)), Err(ExportRejection::NoInvitees));
        assert_eq!(check_preconditions(0, None), Err(ExportRejection::NoInvitees));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        assert_eq!(check_preconditions(3, None), Err(ExportRejection::NoUploadedFile));
    }

    #[test]
    fn test_rejections_have_distinct_messages() {
        assert_ne!(
            ExportRejection::NoInvitees.to_string(),
            ExportRejection::NoUploadedFile.to_string()
        );
    }

    #[test]
    fn test_preconditions_met() {
        let file = upload();
        assert_eq!(check_preconditions(1, Some(&file)), Ok(&file));
    }
}
