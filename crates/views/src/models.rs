//! UI-facing view models.
//!
//! Field names and types are a stable contract with the page-rendering
//! code, which pattern-matches on them directly (status strings drive CSS
//! class selection). Text fields arrive pre-decoded from the fixed-width
//! wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use debug_core::{Address, BountyStatus, ReportStatus};

/// One bounty as shown in browse and dashboard listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BountyRecord {
    /// Address of the bounty escrow contract; unique per bounty.
    pub address: Address,
    pub title: String,
    pub description: String,
    /// Reward escrowed at creation, in ether.
    pub reward_eth: f64,
    /// Company account that owns this bounty.
    pub owner: Address,
    pub tags: Vec<String>,
    pub website: Option<String>,
    /// Hash of the creation transaction.
    pub tx_hash: String,
    /// Number of reports filed against this bounty at query time.
    pub submission_count: usize,
    pub status: BountyStatus,
    /// Client-side wall-clock at materialization, not block time.
    pub created_at: DateTime<Utc>,
}

/// One bug report as shown in submission lists and the denied feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Address of the report contract; unique per report.
    pub address: Address,
    /// The bounty this report was filed against.
    pub bounty: Address,
    /// Decoded title of the parent bounty, joined in for display.
    pub bounty_title: String,
    pub description: String,
    pub reporter: Address,
    pub status: ReportStatus,
    /// Block time when known (event-derived feeds), otherwise client-side
    /// wall-clock at materialization.
    pub created_at: DateTime<Utc>,
}
