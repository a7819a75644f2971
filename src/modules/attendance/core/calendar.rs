// Working-day policy and the calendar queries derived from it.
//
// Purpose
// - Decide which days are working days and how many hours each one requires.
//
// Responsibilities
// - Answer per-date questions (is it a working day, how many hours are expected).
// - Sum expected hours over a whole calendar month.
// - Never perform input or output.

use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRule {
    pub is_working: bool,
    pub expected_hours: f64,
}

impl DayRule {
    pub const fn working(expected_hours: f64) -> Self {
        Self {
            is_working: true,
            expected_hours,
        }
    }

    pub const fn off() -> Self {
        Self {
            is_working: false,
            expected_hours: 0.0,
        }
    }
}

/// Attendance policy applied when normalizing records and computing month totals.
///
/// `days` is indexed by weekday counted from Sunday (0 = Sunday, 6 = Saturday).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkPolicy {
    pub days: [DayRule; 7],
    pub leaves_allowed: u32,
}

pub const DEFAULT_LEAVES_ALLOWED: u32 = 2;

impl Default for WorkPolicy {
    /// Monday to Friday 10:00-18:30, Saturday 10:00-14:00, Sunday off.
    fn default() -> Self {
        let weekday = DayRule::working(8.5);
        Self {
            days: [
                DayRule::off(),
                weekday,
                weekday,
                weekday,
                weekday,
                weekday,
                DayRule::working(4.0),
            ],
            leaves_allowed: DEFAULT_LEAVES_ALLOWED,
        }
    }
}

impl WorkPolicy {
    pub fn with_leaves_allowed(mut self, leaves_allowed: u32) -> Self {
        self.leaves_allowed = leaves_allowed;
        self
    }

    pub fn with_day(mut self, weekday: Weekday, rule: DayRule) -> Self {
        self.days[weekday.num_days_from_sunday() as usize] = rule;
        self
    }

    pub fn rule_for(&self, date: NaiveDate) -> DayRule {
        self.days[date.weekday().num_days_from_sunday() as usize]
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.rule_for(date).is_working
    }

    pub fn expected_hours(&self, date: NaiveDate) -> f64 {
        self.rule_for(date).expected_hours
    }

    /// Sum of expected hours over every day of the month, recorded or not.
    /// Returns 0 for a month outside 1..=12.
    pub fn expected_hours_for_month(&self, year: i32, month: u32) -> f64 {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return 0.0;
        };
        first
            .iter_days()
            .take_while(|date| date.month() == month)
            .map(|date| self.expected_hours(date))
            .sum()
    }
}

/// Actual over expected hours as a percentage; 0 when nothing was expected.
pub fn productivity(actual_hours: f64, expected_hours: f64) -> f64 {
    if expected_hours == 0.0 {
        return 0.0;
    }
    actual_hours / expected_hours * 100.0
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn round_to_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
