// Uploaded CSV documents to raw sheet rows.
//
// Purpose
// - Give the extractor the same cell shapes a spreadsheet export produces.
//
// Responsibilities
// - The first record is the header; each later record maps header -> cell.
// - Purely numeric cells become numbers (date serials, HHMM times); blank cells become empty.
// - Skip records where every cell is blank.

use crate::modules::attendance::use_cases::import_attendance::raw_row::{CellValue, RawRow};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabularError {
    #[error("unreadable CSV document: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing header row")]
    MissingHeader,
}

pub fn rows_from_csv(text: &str) -> Result<Vec<RawRow>, TabularError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(TabularError::MissingHeader);
    }

    let mut rows: Vec<RawRow> = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(column, cell)| (column, cell_from_text(cell)))
                .collect(),
        );
    }
    Ok(rows)
}

fn cell_from_text(text: &str) -> CellValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    let numeric = trimmed.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    match trimmed.parse::<f64>() {
        Ok(number) if numeric => CellValue::Number(number),
        _ => CellValue::Text(text.to_string()),
    }
}
