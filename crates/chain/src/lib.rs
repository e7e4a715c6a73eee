//! Boundary contracts between the DeBug application and the chain.
//!
//! The bounty factory, the per-bounty escrow contracts, the report factory,
//! and the wallet extension all live outside this workspace. This crate
//! pins down their surface as typed traits and result structs so the view
//! layer never handles untyped tuples or raw provider responses.

pub mod config;
pub mod error;
pub mod gateway;
pub mod types;
pub mod wallet;

pub use config::ChainConfig;
pub use error::{ConfigError, QueryError, WalletError};
pub use gateway::BountyGateway;
pub use types::{BountyCreatedEvent, BountyMetadata, ReportCreatedEvent, ReportDetails};
pub use wallet::WalletProvider;
