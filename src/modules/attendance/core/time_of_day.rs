// Free-form clock readings from attendance sheets.
//
// Purpose
// - Turn the many ways a sheet writes a time ("10:00", "6:30 pm", "10:00:00", "1030AM", "1000")
//   into minutes since midnight.
// - Derive worked hours from an in/out pair.
//
// Responsibilities
// - Treat anything unreadable as an absent time, never as an error.
// - Wrap shifts that end before they start past midnight.
// - Cap worked hours at the hours the day expects; overtime is discarded.

use crate::modules::attendance::core::calendar::WorkPolicy;
use chrono::NaiveDate;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Minutes since midnight, or `None` when the text is empty or not a clock reading.
pub fn parse_time_of_day(text: &str) -> Option<u32> {
    let upper = text.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return None;
    }
    let (clock, meridiem) = split_meridiem(&upper);
    let (hours, minutes) = split_clock(clock)?;

    let hours = match meridiem {
        Some(_) if !(1..=12).contains(&hours) => return None,
        Some(Meridiem::Pm) if hours != 12 => hours + 12,
        Some(Meridiem::Am) if hours == 12 => 0,
        _ => hours,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

fn split_meridiem(text: &str) -> (&str, Option<Meridiem>) {
    if let Some(clock) = text.strip_suffix("PM") {
        (clock.trim_end(), Some(Meridiem::Pm))
    } else if let Some(clock) = text.strip_suffix("AM") {
        (clock.trim_end(), Some(Meridiem::Am))
    } else {
        (text, None)
    }
}

fn split_clock(clock: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = clock.split(':').collect();
    match parts.as_slice() {
        [hours, minutes] => Some((number(hours, 1..=2)?, number(minutes, 2..=2)?)),
        [hours, minutes, seconds] => {
            number(seconds, 2..=2)?;
            Some((number(hours, 1..=2)?, number(minutes, 2..=2)?))
        }
        // HHMM without a separator
        [compact] if compact.len() == 4 && compact.bytes().all(|b| b.is_ascii_digit()) => {
            let (hours, minutes) = compact.split_at(2);
            Some((number(hours, 2..=2)?, number(minutes, 2..=2)?))
        }
        _ => None,
    }
}

fn number(digits: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Decimal hours between the two readings, capped at the day's expected hours.
/// Returns 0 when either reading cannot be parsed.
pub fn compute_worked_hours(
    policy: &WorkPolicy,
    in_time: &str,
    out_time: &str,
    date: NaiveDate,
) -> f64 {
    let (Some(start), Some(end)) = (parse_time_of_day(in_time), parse_time_of_day(out_time)) else {
        return 0.0;
    };
    let minutes = if end >= start {
        end - start
    } else {
        end + MINUTES_PER_DAY - start
    };
    let hours = f64::from(minutes) / 60.0;
    hours.min(policy.expected_hours(date))
}
