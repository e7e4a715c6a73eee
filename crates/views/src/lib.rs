//! View-model aggregation for the DeBug bounty marketplace.
//!
//! Turns raw contract events and per-contract query results into the
//! listings each page renders: the public browse list, a company's own
//! bounties with submission counts, a researcher's submissions, and the
//! platform-wide denied-report feed. Everything here is recomputed on
//! demand from the chain; nothing is a source of truth.

pub mod aggregator;
pub mod error;
pub mod filter;
pub mod models;
pub mod session;
pub mod stats;

pub use aggregator::BountyViewAggregator;
pub use error::{SessionError, ViewError};
pub use filter::{apply_list_filters, AmountBucket, DateBucket, ViewFilterState, ViewMode};
pub use models::{BountyRecord, ReportRecord};
pub use stats::{compute_owner_stats, OwnerStats};
