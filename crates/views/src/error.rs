//! Errors surfaced by the view layer.

use debug_chain::error::{QueryError, WalletError};

/// A view projection failed as a whole.
///
/// Only top-level listing queries produce this; per-record detail failures
/// drop the record and log instead (partial results beat an all-or-nothing
/// failure on list pages).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("listing query failed: {0}")]
    Listing(#[from] QueryError),
}

/// Wallet session bootstrap failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("wallet returned no accounts")]
    NoAccounts,
}
