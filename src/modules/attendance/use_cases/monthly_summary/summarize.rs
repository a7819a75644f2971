// Monthly productivity for one employee.
//
// Purpose
// - Aggregate the stored days of a month into totals, leave count and productivity.
//
// Responsibilities
// - Expected hours always cover the whole calendar month, whatever days were recorded.
// - Keep full precision while computing; `presented` rounds for display.
// - Report the leave allowance without enforcing it.

use crate::modules::attendance::core::calendar::{WorkPolicy, productivity, round_to_2};
use crate::modules::attendance::core::record::AttendanceRecord;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBreakdown {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub worked_hours: f64,
    pub expected_hours: f64,
    pub is_leave: bool,
}

impl From<&AttendanceRecord> for DailyBreakdown {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            date: record.date,
            day_of_week: record.day_of_week.clone(),
            in_time: record.in_time.clone(),
            out_time: record.out_time.clone(),
            worked_hours: record.worked_hours,
            expected_hours: record.expected_hours,
            is_leave: record.is_leave,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub employee_name: String,
    pub year: i32,
    pub month: u32,
    pub total_expected_hours: f64,
    pub total_actual_hours: f64,
    pub leaves_used: usize,
    pub leaves_allowed: u32,
    pub productivity: f64,
    pub daily_breakdown: Vec<DailyBreakdown>,
}

impl MonthlySummary {
    /// Same summary with every hour figure and the percentage rounded to two decimals.
    pub fn presented(mut self) -> Self {
        self.total_expected_hours = round_to_2(self.total_expected_hours);
        self.total_actual_hours = round_to_2(self.total_actual_hours);
        self.productivity = round_to_2(self.productivity);
        for day in &mut self.daily_breakdown {
            day.worked_hours = round_to_2(day.worked_hours);
            day.expected_hours = round_to_2(day.expected_hours);
        }
        self
    }
}

pub fn summarize(
    policy: &WorkPolicy,
    employee_name: &str,
    records: &[AttendanceRecord],
    year: i32,
    month: u32,
) -> MonthlySummary {
    let mut days: Vec<&AttendanceRecord> = records.iter().collect();
    days.sort_by_key(|record| record.date);

    let total_actual_hours: f64 = days.iter().map(|record| record.worked_hours).sum();
    let total_expected_hours = policy.expected_hours_for_month(year, month);
    let leaves_used = days.iter().filter(|record| record.is_leave).count();

    MonthlySummary {
        employee_name: employee_name.to_string(),
        year,
        month,
        total_expected_hours,
        total_actual_hours,
        leaves_used,
        leaves_allowed: policy.leaves_allowed,
        productivity: productivity(total_actual_hours, total_expected_hours),
        daily_breakdown: days.into_iter().map(DailyBreakdown::from).collect(),
    }
}
