//! Domain primitives for the DeBug bounty marketplace.
//!
//! Provides the on-chain value types shared by every other crate in the
//! workspace: account addresses, the fixed-width `bytes32` text codec,
//! wei/ether amount conversions, and the report/bounty status enums with
//! their transition rules.

pub mod address;
pub mod amount;
pub mod bytes32;
pub mod error;
pub mod status;

pub use address::Address;
pub use bytes32::Bytes32;
pub use status::{BountyStatus, ReportStatus};
