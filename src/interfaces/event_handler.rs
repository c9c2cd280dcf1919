// ============================================================================
// Event Handler Interface
// Defines the contract for observing a pi computation
// ============================================================================

use crate::domain::RunId;
use crate::numeric::Limb;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which scale-by-4 step of Machin's formula produced a carry-out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScaleStep {
    /// 4 * atan(1/5)
    Inner,
    /// 4 * (4 * atan(1/5) - atan(1/239))
    Outer,
}

/// Events emitted by the pi engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ComputationEvent {
    /// Arctangent series evaluation started
    SeriesStarted {
        run_id: RunId,
        x: Limb,
        precision: usize,
        timestamp: DateTime<Utc>,
    },

    /// Series term underflowed the precision
    SeriesConverged {
        run_id: RunId,
        x: Limb,
        final_denominator: Limb,
        terms: u64,
        timestamp: DateTime<Utc>,
    },

    /// A scale step carried a nonzero integer part out of the fraction
    IntegerPartDiscarded {
        run_id: RunId,
        step: ScaleStep,
        integer_part: Limb,
        timestamp: DateTime<Utc>,
    },

    /// Machin combination finished
    ComputationFinished {
        run_id: RunId,
        integer_part: Limb,
        precision: usize,
        timestamp: DateTime<Utc>,
    },
}

impl ComputationEvent {
    pub fn run_id(&self) -> RunId {
        match self {
            ComputationEvent::SeriesStarted { run_id, .. }
            | ComputationEvent::SeriesConverged { run_id, .. }
            | ComputationEvent::IntegerPartDiscarded { run_id, .. }
            | ComputationEvent::ComputationFinished { run_id, .. } => *run_id,
        }
    }
}

/// Event handler trait for processing engine events
/// Implementations can handle logging, diagnostics, progress reporting, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a computation event
    fn on_event(&self, event: ComputationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ComputationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ComputationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ComputationEvent) {
        tracing::debug!("Pi engine event: {:?}", event);
    }
}

/// Keeps every event in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<ComputationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events received so far
    pub fn events(&self) -> Vec<ComputationEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Remove and return the recorded events
    pub fn drain(&self) -> Vec<ComputationEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: ComputationEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(run_id: RunId) -> ComputationEvent {
        ComputationEvent::SeriesStarted {
            run_id,
            x: 5,
            precision: 8,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(started(RunId::new()));
        // Should not panic
    }

    #[test]
    fn test_recording_handler_keeps_order() {
        let handler = RecordingEventHandler::new();
        let run_id = RunId::new();
        handler.on_events(vec![
            started(run_id),
            ComputationEvent::ComputationFinished {
                run_id,
                integer_part: 3,
                precision: 8,
                timestamp: Utc::now(),
            },
        ]);

        let events = handler.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ComputationEvent::SeriesStarted { .. }));
        assert!(events.iter().all(|e| e.run_id() == run_id));

        assert_eq!(handler.drain().len(), 2);
        assert!(handler.is_empty());
    }
}
