// Shared test fixture for raw sheet rows.
// Defaults describe a full Thursday: Alice Smith, 2024-01-04, 10:00 to 18:30.

use crate::modules::attendance::use_cases::import_attendance::raw_row::{CellValue, RawRow};

pub struct RawRowBuilder {
    employee_name: Option<CellValue>,
    date: Option<CellValue>,
    in_time: Option<CellValue>,
    out_time: Option<CellValue>,
}

impl Default for RawRowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RawRowBuilder {
    pub fn new() -> Self {
        Self {
            employee_name: Some("Alice Smith".into()),
            date: Some("2024-01-04".into()),
            in_time: Some("10:00".into()),
            out_time: Some("18:30".into()),
        }
    }

    pub fn employee_name(mut self, v: &str) -> Self {
        self.employee_name = Some(v.into());
        self
    }

    pub fn date(mut self, v: &str) -> Self {
        self.date = Some(v.into());
        self
    }

    pub fn date_cell(mut self, v: CellValue) -> Self {
        self.date = Some(v);
        self
    }

    pub fn without_date(mut self) -> Self {
        self.date = None;
        self
    }

    pub fn in_time(mut self, v: &str) -> Self {
        self.in_time = Some(v.into());
        self
    }

    pub fn out_time(mut self, v: &str) -> Self {
        self.out_time = Some(v.into());
        self
    }

    pub fn without_times(mut self) -> Self {
        self.in_time = None;
        self.out_time = None;
        self
    }

    pub fn build(self) -> RawRow {
        let mut row = RawRow::new();
        for (column, cell) in [
            ("Employee Name", self.employee_name),
            ("Date", self.date),
            ("In-Time", self.in_time),
            ("Out-Time", self.out_time),
        ] {
            if let Some(cell) = cell {
                row.insert(column, cell);
            }
        }
        row
    }
}

#[cfg(test)]
mod attendance_raw_row_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = RawRowBuilder::default().build();
        assert_eq!(
            built.get("Employee Name"),
            Some(&CellValue::Text("Alice Smith".into()))
        );
        assert_eq!(
            built.get("Date"),
            Some(&CellValue::Text("2024-01-04".into()))
        );
        assert_eq!(built.get("In-Time"), Some(&CellValue::Text("10:00".into())));
        assert_eq!(
            built.get("Out-Time"),
            Some(&CellValue::Text("18:30".into()))
        );
    }

    #[rstest]
    fn setters_override_and_remove_cells() {
        let built = RawRowBuilder::new()
            .employee_name("Bob")
            .without_date()
            .without_times()
            .build();
        assert_eq!(
            built.get("Employee Name"),
            Some(&CellValue::Text("Bob".into()))
        );
        assert_eq!(built.get("Date"), None);
        assert_eq!(built.get("In-Time"), None);
        assert_eq!(built.get("Out-Time"), None);
    }
}
