//! Event correlation and per-record resolution.
//!
//! [`BountyViewAggregator`] owns the fetch-and-join logic behind every
//! listing page. The shape is the same everywhere: one top-level listing
//! query (fatal on failure), then concurrent per-record detail resolution
//! (a failed record is dropped with a warning), then assembly into view
//! models. Detail lookups are independent round trips, so they fan out via
//! `join_all` and gather before anything is assembled — never resolved
//! sequentially, never streamed.
//!
//! The caller passes the current user's address in explicitly; the
//! aggregator holds no session state and no cache, so concurrent
//! invocations share nothing.

use chrono::{DateTime, Utc};
use futures::future;

use debug_chain::error::QueryError;
use debug_chain::gateway::BountyGateway;
use debug_chain::types::BountyCreatedEvent;
use debug_core::amount::wei_to_eth;
use debug_core::{Address, BountyStatus, ReportStatus};

use crate::error::ViewError;
use crate::models::{BountyRecord, ReportRecord};

/// Builds the per-page listings from raw contract queries.
pub struct BountyViewAggregator<G> {
    gateway: G,
}

impl<G: BountyGateway> BountyViewAggregator<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// The underlying contract-query gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // -----------------------------------------------------------------------
    // Projections
    // -----------------------------------------------------------------------

    /// The public browse list: every bounty except the caller's own.
    ///
    /// A company must never see its own bounty in the browse page, so
    /// `exclude_owner` is dropped before any detail resolution is issued.
    pub async fn open_bounties(
        &self,
        exclude_owner: &Address,
    ) -> Result<Vec<BountyRecord>, ViewError> {
        let events = self.gateway.list_bounty_creation_events(None).await?;

        let lookups = events
            .into_iter()
            .filter(|event| event.creator != *exclude_owner)
            .map(|event| self.resolve_bounty(event, false));
        let resolved = future::join_all(lookups).await;

        Ok(resolved.into_iter().flatten().collect())
    }

    /// A company's own bounties, with submission counts joined in.
    pub async fn owner_bounties(&self, owner: &Address) -> Result<Vec<BountyRecord>, ViewError> {
        let events = self
            .gateway
            .list_bounty_creation_events(Some(owner))
            .await?;

        let lookups = events
            .into_iter()
            .map(|event| self.resolve_bounty(event, true));
        let resolved = future::join_all(lookups).await;

        Ok(resolved.into_iter().flatten().collect())
    }

    /// A researcher's own submissions, with parent bounty titles joined in.
    pub async fn reporter_submissions(
        &self,
        reporter: &Address,
    ) -> Result<Vec<ReportRecord>, ViewError> {
        let reports = self.gateway.reports_for_reporter(reporter).await?;

        let lookups = reports
            .into_iter()
            .map(|report| self.resolve_report(report, None));
        let resolved = future::join_all(lookups).await;

        Ok(resolved.into_iter().flatten().collect())
    }

    /// Every rejected report on the platform.
    ///
    /// Full scan of the report-creation log with per-report resolution;
    /// O(total reports) per call, accepted because no incremental index is
    /// maintained anywhere.
    pub async fn denied_reports(&self) -> Result<Vec<ReportRecord>, ViewError> {
        let events = self.gateway.list_report_creation_events().await?;

        let lookups = events
            .into_iter()
            .map(|event| self.resolve_report(event.report, Some(event.block_time)));
        let resolved = future::join_all(lookups).await;

        Ok(resolved
            .into_iter()
            .flatten()
            .filter(|record| record.status == ReportStatus::Canceled)
            .collect())
    }

    // -----------------------------------------------------------------------
    // Per-record resolution
    // -----------------------------------------------------------------------

    /// Resolve one bounty's details, or drop it with a warning.
    async fn resolve_bounty(
        &self,
        event: BountyCreatedEvent,
        with_submissions: bool,
    ) -> Option<BountyRecord> {
        match self.try_resolve_bounty(&event, with_submissions).await {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(
                    bounty = %event.bounty,
                    error = %err,
                    "dropping bounty with unresolvable details"
                );
                None
            }
        }
    }

    async fn try_resolve_bounty(
        &self,
        event: &BountyCreatedEvent,
        with_submissions: bool,
    ) -> Result<BountyRecord, QueryError> {
        let (metadata, balance_wei) = futures::try_join!(
            self.gateway.bounty_metadata(&event.bounty),
            self.gateway.bounty_balance(&event.bounty),
        )?;

        let submission_count = if with_submissions {
            self.gateway.reports_for_bounty(&event.bounty).await?.len()
        } else {
            0
        };

        let status = if balance_wei > 0 {
            BountyStatus::Active
        } else {
            BountyStatus::Closed
        };

        Ok(BountyRecord {
            address: event.bounty,
            title: metadata.title.decode_text_lossy(),
            description: metadata.description.decode_text_lossy(),
            reward_eth: wei_to_eth(event.reward_wei),
            owner: event.creator,
            tags: metadata.tags,
            website: metadata.website.filter(|url| !url.is_empty()),
            tx_hash: event.tx_hash.clone(),
            submission_count,
            status,
            created_at: Utc::now(),
        })
    }

    /// Resolve one report's details plus its parent bounty's title, or
    /// drop it with a warning.
    async fn resolve_report(
        &self,
        report: Address,
        block_time: Option<DateTime<Utc>>,
    ) -> Option<ReportRecord> {
        match self.try_resolve_report(&report, block_time).await {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(
                    report = %report,
                    error = %err,
                    "dropping report with unresolvable details"
                );
                None
            }
        }
    }

    async fn try_resolve_report(
        &self,
        report: &Address,
        block_time: Option<DateTime<Utc>>,
    ) -> Result<ReportRecord, QueryError> {
        let details = self.gateway.report_details(report).await?;
        let parent = self.gateway.bounty_metadata(&details.bounty).await?;

        Ok(ReportRecord {
            address: *report,
            bounty: details.bounty,
            bounty_title: parent.title.decode_text_lossy(),
            description: details.description.decode_text_lossy(),
            reporter: details.reporter,
            status: details.status,
            created_at: block_time.unwrap_or_else(Utc::now),
        })
    }
}
