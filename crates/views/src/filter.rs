//! List filter predicates for browse pages.
//!
//! [`ViewFilterState`] is the ephemeral per-render filter selection; all
//! predicates compose with logical AND. Bucket codes (`"0-1"`, `"week"`,
//! ...) are the exact strings the filter dropdowns emit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::BountyRecord;

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// Reward-amount bucket, in ether.
///
/// Buckets are half-open at the top except the first, which is closed
/// at 0: `x ≤ 1`, `1 < x ≤ 5`, `x > 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AmountBucket {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "0-1")]
    UpToOne,
    #[serde(rename = "1-5")]
    OneToFive,
    #[serde(rename = "5+")]
    OverFive,
}

impl AmountBucket {
    /// Parse a dropdown code (`"all"`, `"0-1"`, `"1-5"`, `"5+"`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(Self::All),
            "0-1" => Some(Self::UpToOne),
            "1-5" => Some(Self::OneToFive),
            "5+" => Some(Self::OverFive),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::UpToOne => "0-1",
            Self::OneToFive => "1-5",
            Self::OverFive => "5+",
        }
    }

    fn matches(self, amount_eth: f64) -> bool {
        match self {
            Self::All => true,
            Self::UpToOne => amount_eth <= 1.0,
            Self::OneToFive => amount_eth > 1.0 && amount_eth <= 5.0,
            Self::OverFive => amount_eth > 5.0,
        }
    }
}

/// Creation-age bucket, measured against wall-clock time at filter time.
///
/// Not reproducible across re-renders at bucket boundaries; accepted
/// imprecision since `created_at` is itself client-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateBucket {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateBucket {
    /// Parse a dropdown code (`"all"`, `"today"`, `"week"`, `"month"`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(Self::All),
            "today" => Some(Self::Today),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    fn max_age_days(self) -> Option<f64> {
        match self {
            Self::All => None,
            Self::Today => Some(1.0),
            Self::Week => Some(7.0),
            Self::Month => Some(30.0),
        }
    }

    fn matches(self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.max_age_days() {
            None => true,
            Some(limit) => {
                let age_days = (now - created_at).num_seconds() as f64 / 86_400.0;
                age_days <= limit
            }
        }
    }
}

/// Grid or list rendering. Carried with the filter state but never used
/// as a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

// ---------------------------------------------------------------------------
// ViewFilterState
// ---------------------------------------------------------------------------

/// The active filter selection for one render of a listing page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewFilterState {
    pub amount: AmountBucket,
    pub date: DateBucket,
    /// Exact-match tag filter; `None` disables.
    pub tag: Option<String>,
    /// Keep only bounties that link a website.
    pub require_website: bool,
    pub view: ViewMode,
}

/// Apply all active filters, AND-composed.
///
/// Idempotent: filtering an already-filtered list with the same state is
/// a no-op.
pub fn apply_list_filters(
    records: Vec<BountyRecord>,
    filters: &ViewFilterState,
) -> Vec<BountyRecord> {
    let now = Utc::now();
    records
        .into_iter()
        .filter(|record| passes(record, filters, now))
        .collect()
}

fn passes(record: &BountyRecord, filters: &ViewFilterState, now: DateTime<Utc>) -> bool {
    if !filters.amount.matches(record.reward_eth) {
        return false;
    }
    if !filters.date.matches(record.created_at, now) {
        return false;
    }
    if let Some(tag) = &filters.tag {
        if !record.tags.iter().any(|t| t == tag) {
            return false;
        }
    }
    if filters.require_website && record.website.is_none() {
        return false;
    }
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
