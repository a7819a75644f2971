// One decoded sheet row, before any attendance rule is applied.
//
// Purpose
// - Carry cell values exactly as the decoder produced them (text, numbers, native dates).
// - Resolve a logical field through an ordered list of accepted header spellings.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// Accepted header spellings per logical field, resolved first match wins.
pub mod columns {
    pub const EMPLOYEE_NAME: &[&str] = &["Employee Name", "EmployeeName", "Employee", "Name"];
    pub const DATE: &[&str] = &["Date", "date"];
    pub const IN_TIME: &[&str] = &["In-Time", "InTime", "In Time", "In"];
    pub const OUT_TIME: &[&str] = &["Out-Time", "OutTime", "Out Time", "Out"];
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Trimmed textual form of the cell, `None` when blank.
    /// Date-times render as their clock reading since they only show up in time columns.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            CellValue::Number(number) => Some(number.to_string()),
            CellValue::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
            CellValue::DateTime(date_time) => Some(date_time.format("%H:%M").to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Empty,
            serde_json::Value::String(text) => CellValue::Text(text),
            serde_json::Value::Number(number) => {
                number.as_f64().map_or(CellValue::Empty, CellValue::Number)
            }
            other => CellValue::Text(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// First non-blank cell among `aliases`, in alias order.
    pub fn first_present(&self, aliases: &[&str]) -> Option<&CellValue> {
        aliases
            .iter()
            .filter_map(|alias| self.cells.get(*alias))
            .find(|cell| !cell.is_blank())
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}
