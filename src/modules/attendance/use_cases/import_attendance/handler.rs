use crate::modules::attendance::adapters::outbound::repository::AttendanceRepository;
use crate::modules::attendance::core::calendar::WorkPolicy;
use crate::modules::attendance::use_cases::import_attendance::extract::extract;
use crate::modules::attendance::use_cases::import_attendance::raw_row::RawRow;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub const EXPECTED_COLUMNS_HINT: &str =
    "Please check your file format. Expected columns: Employee Name, Date, In-Time, Out-Time";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("no valid records found")]
    NoValidRecords { errors: Vec<String> },

    #[error("repository unavailable: {0}")]
    Repository(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub success: bool,
    pub message: String,
    pub records_processed: usize,
    pub employees: usize,
    pub months: Vec<YearMonth>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

pub struct ImportAttendanceHandler<TRepository>
where
    TRepository: AttendanceRepository + 'static,
{
    policy: WorkPolicy,
    repository: Arc<TRepository>,
}

impl<TRepository> ImportAttendanceHandler<TRepository>
where
    TRepository: AttendanceRepository + 'static,
{
    pub fn new(policy: WorkPolicy, repository: Arc<TRepository>) -> Self {
        Self { policy, repository }
    }

    /// Extracts the rows and stores every valid record in one batch.
    /// Rows that fail validation are skipped and listed in the report.
    pub async fn handle(&self, rows: Vec<RawRow>) -> Result<ImportReport, ImportError> {
        let extraction = extract(&self.policy, &rows);
        if extraction.records.is_empty() {
            warn!(rows = rows.len(), "no valid attendance records in upload");
            let errors = if extraction.errors.is_empty() {
                vec![EXPECTED_COLUMNS_HINT.to_string()]
            } else {
                extraction.errors
            };
            return Err(ImportError::NoValidRecords { errors });
        }

        let count = extraction.records.len();
        let employees: BTreeSet<&str> = extraction
            .records
            .iter()
            .map(|r| r.employee_name.as_str())
            .collect();
        let employees = employees.len();
        let months: BTreeSet<YearMonth> = extraction
            .records
            .iter()
            .map(|r| YearMonth {
                year: r.year,
                month: r.month,
            })
            .collect();
        info!(
            records = count,
            errors = extraction.errors.len(),
            "parsed attendance upload"
        );

        self.repository
            .upsert_many(extraction.records)
            .await
            .map_err(|e| ImportError::Repository(e.to_string()))?;

        Ok(ImportReport {
            success: true,
            message: format!("Successfully processed {count} attendance records"),
            records_processed: count,
            employees,
            months: months.into_iter().collect(),
            errors: extraction.errors,
        })
    }
}
