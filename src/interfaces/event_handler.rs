// ============================================================================
// Event Handler Interface
// Defines the contract for observing summation calls
// ============================================================================

use crate::domain::{RequestId, SelectedStrategy};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by the summation engine.
///
/// Every event carries the per-call correlation identifier so log lines
/// can be linked back to a specific external call.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SumEvent {
    /// A summation call started
    RequestReceived {
        request_id: RequestId,
        inputs: usize,
        timestamp: DateTime<Utc>,
    },

    /// The engine decided which strategy to run
    StrategySelected {
        request_id: RequestId,
        strategy: SelectedStrategy,
        timestamp: DateTime<Utc>,
    },

    /// Auto selection declined the vectorized path
    FellBackToPrecise {
        request_id: RequestId,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// The call produced a result
    Completed {
        request_id: RequestId,
        strategy: SelectedStrategy,
        count: usize,
        timestamp: DateTime<Utc>,
    },

    /// The call failed; the whole computation was discarded
    Failed {
        request_id: RequestId,
        error: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing summation events
/// Implementations can handle logging, metrics, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a summation event
    fn on_event(&self, event: SumEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<SumEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SumEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: SumEvent) {
        match &event {
            SumEvent::Failed {
                request_id, error, ..
            } => {
                tracing::error!(request_id = %request_id, error = %error, "summation failed");
            },
            SumEvent::FellBackToPrecise {
                request_id, reason, ..
            } => {
                tracing::info!(request_id = %request_id, reason = %reason, "fell back to precise strategy");
            },
            other => {
                tracing::debug!("summation event: {:?}", other);
            },
        }
    }
}
