use crate::record::EmployeeRecord;
use crate::{Error, Result};
use chrono::{DateTime, Local};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Column order of the output sheet
pub const HEADER: [&str; 4] = ["name", "designation", "email", "phone"];

/// Derive the default output filename from a local timestamp,
/// e.g. `employee_data_20260828_143005.xlsx`
pub fn default_filename(at: DateTime<Local>) -> String {
    format!("employee_data_{}.xlsx", at.format("%Y%m%d_%H%M%S"))
}

/// Flatten records into rows matching [`HEADER`], preserving discovery order
pub fn build_rows(records: &[EmployeeRecord]) -> Vec<[&str; 4]> {
    records
        .iter()
        .map(|r| {
            [
                r.name.as_str(),
                r.designation.as_str(),
                r.email.as_str(),
                r.phone.as_str(),
            ]
        })
        .collect()
}

/// Write records to a single-sheet xlsx file at `path`.
///
/// Refuses an empty record sequence so that a run that found nothing leaves
/// no file behind.
pub fn save_records(records: &[EmployeeRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        return Err(Error::NoRecords);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, title) in HEADER.iter().enumerate() {
        worksheet.write_string(0, col as u16, *title)?;
    }

    for (row, cells) in build_rows(records).iter().enumerate() {
        for (col, text) in cells.iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, *text)?;
        }
    }

    workbook.save(path)?;
    tracing::info!("Wrote {} records to {}", records.len(), path.display());

    Ok(())
}
