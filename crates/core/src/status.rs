//! Report and bounty status enums with the canonical on-chain mapping.
//!
//! The report contracts expose status as a numeric enum (0/1/2); the UI
//! renders the strings `"Pending"`, `"Confirmed"`, `"Canceled"` directly in
//! display logic and CSS class selection. Both mappings live here and
//! nowhere else.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StatusError;

// ---------------------------------------------------------------------------
// ReportStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a bug report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Submitted, awaiting the bounty owner's decision.
    Pending,
    /// Accepted by the bounty owner; payment released. Terminal.
    Confirmed,
    /// Rejected by the bounty owner. Terminal.
    Canceled,
}

impl ReportStatus {
    /// Map the contract's numeric status code.
    pub fn from_code(code: u8) -> Result<Self, StatusError> {
        match code {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Confirmed),
            2 => Ok(Self::Canceled),
            other => Err(StatusError::UnknownCode(other)),
        }
    }

    /// The contract's numeric status code.
    pub fn code(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Confirmed => 1,
            Self::Canceled => 2,
        }
    }

    /// The exact string the UI pattern-matches on.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Canceled => "Canceled",
        }
    }

    /// Whether this status admits no further transitions.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// The set of statuses this status may transition to.
    ///
    /// Transition rules:
    /// - `Pending`   -> `Confirmed`, `Canceled`
    /// - `Confirmed` -> (terminal)
    /// - `Canceled`  -> (terminal)
    pub fn valid_transitions(self) -> &'static [ReportStatus] {
        match self {
            Self::Pending => &[Self::Confirmed, Self::Canceled],
            Self::Confirmed | Self::Canceled => &[],
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate that a report may move from `current` to `next`.
pub fn validate_transition(current: ReportStatus, next: ReportStatus) -> Result<(), StatusError> {
    if current.valid_transitions().contains(&next) {
        Ok(())
    } else {
        Err(StatusError::InvalidTransition {
            from: current,
            to: next,
        })
    }
}

// ---------------------------------------------------------------------------
// BountyStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a bounty escrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BountyStatus {
    /// Funded and accepting reports.
    Active,
    /// Escrow drained; no longer paying out.
    Closed,
}

impl BountyStatus {
    /// The exact string the UI pattern-matches on.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for BountyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
