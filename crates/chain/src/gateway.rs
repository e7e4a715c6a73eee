//! Read-side boundary to the bounty and report contracts.
//!
//! [`BountyGateway`] is the complete query surface the view layer depends
//! on. Production code implements it over a JSON-RPC node client; tests
//! implement it over in-memory maps. Event-listing calls scan contract
//! logs and may return large unpaginated result sets.

use async_trait::async_trait;

use debug_core::Address;

use crate::error::QueryError;
use crate::types::{BountyCreatedEvent, BountyMetadata, ReportCreatedEvent, ReportDetails};

/// Typed queries against the bounty factory, bounty escrows, the report
/// factory, and report contracts.
#[async_trait]
pub trait BountyGateway: Send + Sync {
    /// All `BountyCreated` events, optionally restricted to one creator.
    ///
    /// The creator filter is applied at the query layer (an indexed event
    /// topic), not client-side.
    async fn list_bounty_creation_events(
        &self,
        creator: Option<&Address>,
    ) -> Result<Vec<BountyCreatedEvent>, QueryError>;

    /// Title, description, tags, and website of one bounty.
    async fn bounty_metadata(&self, bounty: &Address) -> Result<BountyMetadata, QueryError>;

    /// Current escrow balance of one bounty, in wei.
    async fn bounty_balance(&self, bounty: &Address) -> Result<u128, QueryError>;

    /// Owning company account of one bounty.
    async fn bounty_owner(&self, bounty: &Address) -> Result<Address, QueryError>;

    /// Addresses of every report filed against one bounty.
    async fn reports_for_bounty(&self, bounty: &Address) -> Result<Vec<Address>, QueryError>;

    /// Addresses of every report filed by one researcher.
    async fn reports_for_reporter(&self, reporter: &Address) -> Result<Vec<Address>, QueryError>;

    /// Description, status, reporter, and parent bounty of one report.
    async fn report_details(&self, report: &Address) -> Result<ReportDetails, QueryError>;

    /// All `ReportCreated` events, platform-wide.
    ///
    /// A full log scan; callers accept O(total reports) cost per call.
    async fn list_report_creation_events(&self) -> Result<Vec<ReportCreatedEvent>, QueryError>;
}
