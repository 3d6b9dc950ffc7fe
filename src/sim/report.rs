use serde::Serialize;

use crate::catalog::DailyEvent;
use crate::model::SimDate;

/// Outcome of one `run_daily_operations` call. Transient: only the business's
/// cumulative counters persist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub business_id: u64,
    pub date: SimDate,
    /// Day revenue including any event bonus.
    pub revenue: i64,
    /// Day expenses including any event cost.
    pub expenses: i64,
    pub profit: i64,
    pub event: Option<DailyEvent>,
}

/// Read-only snapshot of a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusinessMetrics {
    pub business_id: u64,
    pub daily_revenue: i64,
    pub daily_expenses: i64,
    pub total_revenue: i64,
    pub total_expenses: i64,
    pub profit: i64,
    pub reputation: i32,
    pub customer_base: i64,
    pub level: u32,
    pub employee_count: usize,
    pub upgrade_count: usize,
}
