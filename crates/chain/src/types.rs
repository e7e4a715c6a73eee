//! Typed results for every contract query.
//!
//! Each method on [`BountyGateway`](crate::gateway::BountyGateway) returns
//! one of these structs instead of a positional tuple, so field meaning is
//! checked at the boundary rather than assumed at every call site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use debug_core::{Address, Bytes32, ReportStatus};

/// One `BountyCreated` event from the bounty factory log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BountyCreatedEvent {
    /// Address of the newly deployed bounty escrow contract.
    pub bounty: Address,
    /// Company account that created and funded the bounty.
    pub creator: Address,
    /// Reward escrowed at creation, in wei.
    pub reward_wei: u128,
    /// Hash of the creation transaction.
    pub tx_hash: String,
}

/// Metadata read from one bounty contract.
///
/// Title and description travel in the fixed-width `bytes32` encoding;
/// tags and website are native variable-length strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BountyMetadata {
    pub title: Bytes32,
    pub description: Bytes32,
    pub tags: Vec<String>,
    pub website: Option<String>,
}

/// Details read from one bug report contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDetails {
    pub description: Bytes32,
    pub status: ReportStatus,
    pub reporter: Address,
    /// The bounty this report was filed against.
    pub bounty: Address,
}

/// One `ReportCreated` event from the report factory log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCreatedEvent {
    /// Address of the newly deployed report contract.
    pub report: Address,
    /// Timestamp of the block that mined the creation transaction.
    pub block_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounty_event_serializes_with_named_fields() {
        let event = BountyCreatedEvent {
            bounty: "0x1000000000000000000000000000000000000001".parse().unwrap(),
            creator: "0x2000000000000000000000000000000000000002".parse().unwrap(),
            reward_wei: 1_500_000_000_000_000_000,
            tx_hash: "0xabc".into(),
        };

        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["bounty"], "0x1000000000000000000000000000000000000001");
        assert_eq!(json["creator"], "0x2000000000000000000000000000000000000002");
        assert_eq!(json["reward_wei"], 1_500_000_000_000_000_000u64);
        assert_eq!(json["tx_hash"], "0xabc");
    }

    #[test]
    fn report_details_serializes_status_as_ui_string() {
        let details = ReportDetails {
            description: Bytes32::encode_text("Stack overflow in parser").unwrap(),
            status: ReportStatus::Pending,
            reporter: "0x3000000000000000000000000000000000000003".parse().unwrap(),
            bounty: "0x1000000000000000000000000000000000000001".parse().unwrap(),
        };

        let json: serde_json::Value = serde_json::to_value(&details).unwrap();
        assert_eq!(json["status"], "Pending");
    }
}
