use crate::modules::attendance::core::calendar::WorkPolicy;
use crate::modules::attendance::use_cases::monthly_summary::queries_port::{
    AttendanceQueries, MonthRecordCount,
};
use crate::modules::attendance::use_cases::monthly_summary::summarize::{
    MonthlySummary, summarize,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("repository unavailable: {0}")]
    Repository(String),
}

pub struct MonthlySummaryHandler<TQueries>
where
    TQueries: AttendanceQueries + 'static,
{
    policy: WorkPolicy,
    queries: Arc<TQueries>,
}

impl<TQueries> MonthlySummaryHandler<TQueries>
where
    TQueries: AttendanceQueries + 'static,
{
    pub fn new(policy: WorkPolicy, queries: Arc<TQueries>) -> Self {
        Self { policy, queries }
    }

    pub async fn handle(
        &self,
        employee_name: &str,
        year: i32,
        month: u32,
    ) -> Result<MonthlySummary, SummaryError> {
        if employee_name.trim().is_empty() {
            return Err(SummaryError::InvalidQuery("employee name is empty".into()));
        }
        if !(1..=12).contains(&month) {
            let reason = format!("month {month} is out of range");
            return Err(SummaryError::InvalidQuery(reason));
        }

        let records = self
            .queries
            .list_by_employee_month(employee_name, year, month)
            .await
            .map_err(|e| SummaryError::Repository(e.to_string()))?;
        debug!(
            employee_name,
            year,
            month,
            records = records.len(),
            "summarizing month"
        );

        let summary = summarize(&self.policy, employee_name, &records, year, month);
        Ok(summary.presented())
    }

    pub async fn list_employees(&self) -> Result<Vec<String>, SummaryError> {
        self.queries
            .list_employees()
            .await
            .map_err(|e| SummaryError::Repository(e.to_string()))
    }

    pub async fn list_months(
        &self,
        employee_name: &str,
    ) -> Result<Vec<MonthRecordCount>, SummaryError> {
        self.queries
            .list_months(employee_name)
            .await
            .map_err(|e| SummaryError::Repository(e.to_string()))
    }
}
