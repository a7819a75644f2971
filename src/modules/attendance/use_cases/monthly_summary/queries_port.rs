use crate::modules::attendance::core::record::AttendanceRecord;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecordCount {
    pub year: i32,
    pub month: u32,
    pub record_count: usize,
}

#[async_trait]
pub trait AttendanceQueries: Send + Sync {
    /// Records of one employee for one month, ordered by date.
    async fn list_by_employee_month(
        &self,
        employee_name: &str,
        year: i32,
        month: u32,
    ) -> anyhow::Result<Vec<AttendanceRecord>>;

    async fn list_employees(&self) -> anyhow::Result<Vec<String>>;

    /// Months holding at least one record for the employee, oldest first.
    async fn list_months(&self, employee_name: &str) -> anyhow::Result<Vec<MonthRecordCount>>;
}
