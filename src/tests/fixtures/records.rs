// Shared test fixture for canonical attendance records built under the default policy.

use crate::modules::attendance::core::calendar::WorkPolicy;
use crate::modules::attendance::core::record::AttendanceRecord;
use chrono::NaiveDate;

pub fn make_attendance_record(
    employee_name: &str,
    date: &str,
    in_time: Option<&str>,
    out_time: Option<&str>,
) -> AttendanceRecord {
    let date: NaiveDate = date.parse().expect("fixture date must be ISO formatted");
    AttendanceRecord::new(
        &WorkPolicy::default(),
        employee_name,
        date,
        in_time.map(String::from),
        out_time.map(String::from),
    )
}

pub fn make_full_day(employee_name: &str, date: &str) -> AttendanceRecord {
    make_attendance_record(employee_name, date, Some("10:00"), Some("18:30"))
}

pub fn make_leave_day(employee_name: &str, date: &str) -> AttendanceRecord {
    make_attendance_record(employee_name, date, None, None)
}
