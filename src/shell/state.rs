use crate::modules::attendance::adapters::outbound::attendance_in_memory::InMemoryAttendanceStore;
use crate::modules::attendance::core::calendar::WorkPolicy;
use crate::modules::attendance::use_cases::import_attendance::handler::ImportAttendanceHandler;
use crate::modules::attendance::use_cases::monthly_summary::handler::MonthlySummaryHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub import_handler: Arc<ImportAttendanceHandler<InMemoryAttendanceStore>>,
    pub summary_handler: Arc<MonthlySummaryHandler<InMemoryAttendanceStore>>,
}

impl AppState {
    /// Wires both use cases to one shared in-memory store.
    pub fn in_memory(policy: WorkPolicy) -> Self {
        Self::with_store(policy, Arc::new(InMemoryAttendanceStore::new()))
    }

    pub fn with_store(policy: WorkPolicy, store: Arc<InMemoryAttendanceStore>) -> Self {
        Self {
            import_handler: Arc::new(ImportAttendanceHandler::new(policy.clone(), store.clone())),
            summary_handler: Arc::new(MonthlySummaryHandler::new(policy, store)),
        }
    }
}
