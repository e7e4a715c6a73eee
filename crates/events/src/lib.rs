//! In-process notification bus for session and contract state changes.
//!
//! The UI formerly re-read stored login state on an interval timer;
//! [`SessionBus`] replaces that with explicit publish-on-change
//! notifications over a `tokio::sync::broadcast` channel.

pub mod bus;

pub use bus::{SessionBus, SessionEvent};
