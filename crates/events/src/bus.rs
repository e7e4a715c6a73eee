//! Broadcast bus for [`SessionEvent`]s.
//!
//! [`SessionBus`] is the publish/subscribe hub that pages observe instead
//! of polling stored session state. It is designed to be shared via
//! `Arc<SessionBus>` across the application.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use debug_core::{Address, ReportStatus};

// ---------------------------------------------------------------------------
// SessionEvent
// ---------------------------------------------------------------------------

/// A state change pages may want to react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A wallet account was connected and is now the current user context.
    WalletConnected { address: Address },

    /// The current wallet session ended.
    WalletDisconnected,

    /// A bounty the current session created was accepted by the node.
    BountyCreated { bounty: Address, tx_hash: String },

    /// A report's owner accepted or rejected it.
    ReportStatusChanged {
        report: Address,
        status: ReportStatus,
    },
}

// ---------------------------------------------------------------------------
// SessionBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out bus for [`SessionEvent`]s.
///
/// Wraps a [`broadcast::Sender`] so any number of subscribers can
/// independently receive every published event.
pub struct SessionBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl SessionBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed events are dropped
    /// and slow receivers observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// With zero subscribers the event is silently dropped; session events
    /// carry no state of record, so nothing is lost.
    pub fn publish(&self, event: SessionEvent) {
        // The SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }
}

impl Default for SessionBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
