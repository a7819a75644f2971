// Date cells as they come out of attendance sheets.
//
// Purpose
// - Accept native dates, spreadsheet serial numbers and free text.
// - Strip any time of day; the result is a calendar date.
//
// Responsibilities
// - Free text: ISO first, then three parts split on '-' or '/' (YYYY-M-D, otherwise D-M-Y).
// - Serial numbers: 1900 date system, serial 1 is 1900-01-01, serial 60 is the phantom
//   1900-02-29 which rolls over to 1900-03-01.

use crate::modules::attendance::use_cases::import_attendance::extract::RowError;
use crate::modules::attendance::use_cases::import_attendance::raw_row::CellValue;
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

/// 9999-12-31, the last date a spreadsheet can hold.
const MAX_SERIAL: f64 = 2_958_465.0;
const PHANTOM_LEAP_DAY_SERIAL: u64 = 60;

pub fn parse_date_cell(cell: &CellValue) -> Result<NaiveDate, RowError> {
    match cell {
        CellValue::Empty => Err(RowError::MissingDate),
        CellValue::Date(date) => Ok(*date),
        CellValue::DateTime(date_time) => Ok(date_time.date()),
        CellValue::Number(serial) => match date_from_serial(*serial) {
            Some(date) => Ok(date),
            None => Err(RowError::InvalidDateSerial(serial.to_string())),
        },
        CellValue::Text(text) => match parse_date_text(text) {
            Some(date) => Ok(date),
            None => Err(RowError::InvalidDateFormat(text.clone())),
        },
    }
}

pub fn date_from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=MAX_SERIAL).contains(&serial) {
        return None;
    }
    let days = serial.floor() as u64;
    let epoch = if days <= PHANTOM_LEAP_DAY_SERIAL {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    epoch.checked_add_days(Days::new(days))
}

pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    parse_iso(text).or_else(|| parse_three_parts(text))
}

fn parse_iso(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = text.parse::<NaiveDate>() {
        return Some(date);
    }
    if let Ok(date_time) = text.parse::<NaiveDateTime>() {
        return Some(date_time.date());
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(date_time.date());
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|date_time| date_time.naive_local().date())
}

fn parse_three_parts(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.split(['-', '/']).collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };
    if first.len() == 4 {
        from_parts(first, second, third)
    } else {
        from_parts(third, second, first)
    }
}

fn from_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year = digits(year)? as i32;
    // Two-digit years belong to the 1900s, as spreadsheet tools read them.
    let year = if year < 100 { 1900 + year } else { year };
    NaiveDate::from_ymd_opt(year, digits(month)?, digits(day)?)
}

fn digits(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || text.len() > 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
