use crate::modules::attendance::core::record::AttendanceRecord;
use async_trait::async_trait;

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Stores the whole batch at once. A record whose (employee_name, date) already exists
    /// replaces the stored one; the last write wins.
    async fn upsert_many(&self, records: Vec<AttendanceRecord>) -> anyhow::Result<()>;
}
