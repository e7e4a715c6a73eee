//! Dashboard summary numbers.

use serde::Serialize;

use debug_core::BountyStatus;

use crate::models::BountyRecord;

/// Headline numbers for a company's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OwnerStats {
    pub total_count: usize,
    pub total_amount_eth: f64,
    pub active_count: usize,
}

/// Pure aggregation over an already-materialized listing; no I/O.
pub fn compute_owner_stats(records: &[BountyRecord]) -> OwnerStats {
    OwnerStats {
        total_count: records.len(),
        total_amount_eth: records.iter().map(|r| r.reward_eth).sum(),
        active_count: records
            .iter()
            .filter(|r| r.status == BountyStatus::Active)
            .count(),
    }
}
