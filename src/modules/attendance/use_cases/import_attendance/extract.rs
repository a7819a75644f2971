// Raw sheet rows to canonical attendance records.
//
// Purpose
// - Validate and normalize every row independently.
// - Collect per-row problems as messages instead of failing the batch.
//
// Responsibilities
// - Validation order: employee name, date presence, date format.
// - Report row numbers as the sheet shows them (first data row is row 2, under the header).
// - Never perform input or output.

use crate::modules::attendance::core::calendar::WorkPolicy;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::use_cases::import_attendance::date_cell::parse_date_cell;
use crate::modules::attendance::use_cases::import_attendance::raw_row::{
    CellValue, RawRow, columns,
};

/// Row numbers count from 1 and the header takes the first line.
pub const FIRST_DATA_ROW: usize = 2;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RowError {
    #[error("Missing Employee Name")]
    MissingEmployeeName,

    #[error("Missing Date")]
    MissingDate,

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid date serial number: {0}")]
    InvalidDateSerial(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub records: Vec<AttendanceRecord>,
    pub errors: Vec<String>,
}

pub fn extract(policy: &WorkPolicy, rows: &[RawRow]) -> Extraction {
    rows.iter()
        .enumerate()
        .fold(Extraction::default(), |mut extraction, (index, row)| {
            match extract_row(policy, row) {
                Ok(record) => extraction.records.push(record),
                Err(error) => extraction
                    .errors
                    .push(format!("Row {}: {error}", index + FIRST_DATA_ROW)),
            }
            extraction
        })
}

pub fn extract_row(policy: &WorkPolicy, row: &RawRow) -> Result<AttendanceRecord, RowError> {
    let employee_name = row
        .first_present(columns::EMPLOYEE_NAME)
        .and_then(CellValue::as_text)
        .ok_or(RowError::MissingEmployeeName)?;
    let date_cell = row
        .first_present(columns::DATE)
        .ok_or(RowError::MissingDate)?;
    let date = parse_date_cell(date_cell)?;

    let in_time = row
        .first_present(columns::IN_TIME)
        .and_then(CellValue::as_text);
    let out_time = row
        .first_present(columns::OUT_TIME)
        .and_then(CellValue::as_text);

    let record = AttendanceRecord::new(policy, employee_name, date, in_time, out_time);
    Ok(record)
}
