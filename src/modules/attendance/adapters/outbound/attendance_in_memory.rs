// In memory attendance store.
//
// Purpose
// - Serve imports and dashboard queries without a database.
//
// Responsibilities
// - Key records by (employee_name, date) so re-imports overwrite instead of duplicating.
// - Apply a batch under one write lock so concurrent imports never interleave.

use crate::modules::attendance::adapters::outbound::repository::AttendanceRepository;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::use_cases::monthly_summary::queries_port::{
    AttendanceQueries, MonthRecordCount,
};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAttendanceStore {
    rows: RwLock<BTreeMap<(String, NaiveDate), AttendanceRecord>>,
    is_offline: bool,
}

impl InMemoryAttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn record_count(&self) -> usize {
        self.rows.read().await.len()
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Attendance store offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AttendanceRepository for InMemoryAttendanceStore {
    async fn upsert_many(&self, records: Vec<AttendanceRecord>) -> anyhow::Result<()> {
        self.ensure_online()?;

        let mut guard = self.rows.write().await;
        for record in records {
            guard.insert(record.key(), record);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AttendanceQueries for InMemoryAttendanceStore {
    async fn list_by_employee_month(
        &self,
        employee_name: &str,
        year: i32,
        month: u32,
    ) -> anyhow::Result<Vec<AttendanceRecord>> {
        self.ensure_online()?;

        // Keys sort by (name, date), so matches come out ordered by date.
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|r| r.employee_name == employee_name && r.year == year && r.month == month)
            .cloned()
            .collect())
    }

    async fn list_employees(&self) -> anyhow::Result<Vec<String>> {
        self.ensure_online()?;

        let guard = self.rows.read().await;
        let names: BTreeSet<&String> = guard.keys().map(|(name, _)| name).collect();
        Ok(names.into_iter().cloned().collect())
    }

    async fn list_months(&self, employee_name: &str) -> anyhow::Result<Vec<MonthRecordCount>> {
        self.ensure_online()?;

        let guard = self.rows.read().await;
        let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
        for record in guard.values() {
            if record.employee_name == employee_name {
                *counts.entry((record.year, record.month)).or_default() += 1;
            }
        }
        Ok(counts
            .into_iter()
            .map(|((year, month), record_count)| MonthRecordCount {
                year,
                month,
                record_count,
            })
            .collect())
    }
}
