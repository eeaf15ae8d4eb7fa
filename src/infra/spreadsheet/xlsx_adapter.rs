use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use tracing::debug;

use crate::domain::{
    models::import::ImportEntry,
    ports::SpreadsheetAdapter,
    services::renderer::render,
};
use crate::error::AppError;

/// Column indices of the uploaded sheet.
mod cols {
    pub const NAME: usize = 0;
    pub const PHONE: usize = 1;
}

pub const EXPORT_SHEET_NAME: &str = "Undangan";
pub const EXPORT_HEADERS: [&str; 3] = ["Name", "Phone", "Message"];

/// Reads xlsx/xls/ods uploads with calamine and writes xlsx with rust_xlsxwriter.
#[derive(Debug, Default, Clone)]
pub struct XlsxSpreadsheetAdapter;

impl XlsxSpreadsheetAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SpreadsheetAdapter for XlsxSpreadsheetAdapter {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<ImportEntry>, AppError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| AppError::Spreadsheet(format!("Failed to open workbook: {}", e)))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| AppError::Spreadsheet("Workbook has no sheets".into()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| AppError::Spreadsheet(format!("Failed to read sheet {}: {}", sheet_name, e)))?;

        // Skip header row
        let entries: Vec<ImportEntry> = range
            .rows()
            .skip(1)
            .filter_map(|row| {
                let name = cell_string(row, cols::NAME);
                if name.is_empty() {
                    return None;
                }
                let phone = cell_string(row, cols::PHONE);
                Some(ImportEntry {
                    name,
                    phone: (!phone.is_empty()).then_some(phone),
                })
            })
            .collect();

        debug!("Parsed {} entries from sheet {}", entries.len(), sheet_name);
        Ok(entries)
    }

    fn generate(&self, template: &str, entries: &[ImportEntry]) -> Result<Vec<u8>, AppError> {
        write_messages(template, entries)
            .map_err(|e| AppError::InternalWithMsg(format!("Failed to write Excel file: {}", e)))
    }
}

fn write_messages(template: &str, entries: &[ImportEntry]) -> Result<Vec<u8>, rust_xlsxwriter::XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let message_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);

    let sheet = workbook.add_worksheet();
    sheet.set_name(EXPORT_SHEET_NAME)?;
    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    sheet.set_column_width(0, 30)?;
    sheet.set_column_width(1, 20)?;
    sheet.set_column_width(2, 80)?;

    for (idx, entry) in entries.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, &entry.name)?;
        if let Some(phone) = &entry.phone {
            sheet.write_string(row, 1, phone)?;
        }
        sheet.write_string_with_format(row, 2, &render(template, &entry.name), &message_format)?;
    }

    workbook.save_to_buffer()
}

fn cell_string(row: &[Data], col: usize) -> String {
    row.get(col)
        .map(|c| match c {
            Data::String(s) => s.trim().to_string(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                // Phone numbers typed as numbers come back as floats
                if f.fract() == 0.0 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            Data::Bool(b) => b.to_string(),
            Data::Empty | Data::Error(_) => String::new(),
            other => other.to_string().trim().to_string(),
        })
        .unwrap_or_default()
}
