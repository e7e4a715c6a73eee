//! Error types for the domain primitives.
//!
//! One enum per concern, following the taxonomy used across the workspace:
//! encode failures block the triggering action, decode failures degrade to
//! an empty string on the read path, address failures abort the single
//! operation that supplied the bad identifier.

use crate::status::ReportStatus;

/// Text could not be represented in the fixed-width `bytes32` format.
///
/// Callers must treat this as fatal to the action being attempted (e.g.
/// submitting a report); silently truncating would corrupt on-chain data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot encode an empty string into a bytes32 field")]
    Empty,

    #[error("text occupies {len} UTF-8 bytes; a bytes32 field holds at most 31")]
    TooLong { len: usize },
}

/// Stored `bytes32` data is not valid encoded text.
///
/// Non-fatal on read paths: substitute the empty string and keep rendering
/// the rest of the list (see [`Bytes32::decode_text_lossy`]).
///
/// [`Bytes32::decode_text_lossy`]: crate::bytes32::Bytes32::decode_text_lossy
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("bytes32 payload is not valid UTF-8")]
    NotUtf8(#[from] std::str::Utf8Error),
}

/// A supplied identifier is not a well-formed 20-byte account address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address must start with 0x")]
    MissingPrefix,

    #[error("address must be 40 hex digits, got {0}")]
    BadLength(usize),

    #[error("address contains a non-hex digit")]
    BadHex,
}

/// A supplied value is not a well-formed `bytes32` hex string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Bytes32Error {
    #[error("bytes32 value must start with 0x")]
    MissingPrefix,

    #[error("bytes32 value must be 64 hex digits, got {0}")]
    BadLength(usize),

    #[error("bytes32 value contains a non-hex digit")]
    BadHex,
}

/// An invalid report status code or a disallowed status transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("unknown report status code {0}")]
    UnknownCode(u8),

    #[error("cannot transition report from {from} to {to}")]
    InvalidTransition {
        from: ReportStatus,
        to: ReportStatus,
    },
}
