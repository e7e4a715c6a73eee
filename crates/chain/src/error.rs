//! Errors raised at the chain boundary.

use debug_core::error::AddressError;

/// The external contract-query service failed.
///
/// Fatal when it comes from a top-level listing call; per-record detail
/// failures are caught by the view layer and drop only that record.
/// Retry/backoff is owned by the node client underneath, never here —
/// every call is at-most-once from this side.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("chain node unreachable: {0}")]
    Network(String),

    #[error("contract call reverted: {0}")]
    Reverted(String),

    #[error("malformed contract response: {0}")]
    InvalidResponse(String),
}

/// The wallet extension refused or failed a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("wallet request rejected by the user")]
    Rejected,

    #[error("wallet provider error: {0}")]
    Provider(String),
}

/// Chain endpoint configuration could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {var} holds an invalid address: {source}")]
    InvalidAddress {
        var: &'static str,
        source: AddressError,
    },
}
