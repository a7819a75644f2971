use crate::modules::attendance::core::calendar::{WorkPolicy, weekday_name};
use crate::modules::attendance::core::time_of_day::compute_worked_hours;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Normalized attendance for one employee on one calendar date.
///
/// `(employee_name, date)` is the natural key; storing a record for an existing key replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub employee_name: String,
    pub date: NaiveDate,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub worked_hours: f64,
    pub is_leave: bool,
    pub day_of_week: String,
    pub expected_hours: f64,
    pub month: u32,
    pub year: i32,
}

impl AttendanceRecord {
    /// Derives the policy-dependent fields from the raw in/out readings.
    ///
    /// A working day missing either reading is a leave. Hours are only credited on a
    /// working day with both readings present.
    pub fn new(
        policy: &WorkPolicy,
        employee_name: impl Into<String>,
        date: NaiveDate,
        in_time: Option<String>,
        out_time: Option<String>,
    ) -> Self {
        let is_working = policy.is_working_day(date);
        let is_leave = is_working && (in_time.is_none() || out_time.is_none());
        let worked_hours = match (&in_time, &out_time) {
            (Some(in_time), Some(out_time)) if is_working => {
                compute_worked_hours(policy, in_time, out_time, date)
            }
            _ => 0.0,
        };

        Self {
            employee_name: employee_name.into(),
            date,
            in_time,
            out_time,
            worked_hours,
            is_leave,
            day_of_week: weekday_name(date).to_string(),
            expected_hours: policy.expected_hours(date),
            month: date.month(),
            year: date.year(),
        }
    }

    pub fn key(&self) -> (String, NaiveDate) {
        (self.employee_name.clone(), self.date)
    }
}
