// ============================================================================
// Trace Handler Interface
// Defines the contract for consuming arithmetic trace events
// ============================================================================

use super::digit_code::DigitStep;
use crate::engine::SubtractStage;
use crate::numeric::EncodedNumber;
use parking_lot::Mutex;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which operand an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operand {
    /// Augend or minuend
    Lhs,
    /// Addend or subtrahend
    Rhs,
}

/// Events emitted while computing a sum or difference.
///
/// Events carry no semantic weight: a computation produces identical numbers
/// whether or not they are collected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraceEvent {
    /// Decimal operand converted to digit groups
    Encoded {
        operand: Operand,
        value: i64,
        encoded: EncodedNumber,
    },

    /// Operands padded with the reserved carry digit and aligned
    Aligned {
        lhs: EncodedNumber,
        rhs: EncodedNumber,
    },

    /// Subtractor moved to a new stage
    StageEntered { stage: SubtractStage },

    /// Nines complement computed
    Complemented {
        input: EncodedNumber,
        output: EncodedNumber,
    },

    /// One digit position of an adder pass (1 = least significant)
    Digit { position: usize, step: DigitStep },

    /// Adder pass finished
    PassCompleted {
        sum: EncodedNumber,
        carry_out: bool,
    },

    /// Final carry of the complement addition read as a sign
    CarryInterpreted { carry_out: bool, negative: bool },

    /// Negative result converted back to its magnitude
    Recomplemented { magnitude: EncodedNumber },

    /// Result decoded and checked against native arithmetic
    Decoded { value: i64, matches_reference: bool },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Encoded {
                operand,
                value,
                encoded,
            } => write!(f, "{:?}: {:>8} -> {}", operand, value, encoded),
            TraceEvent::Aligned { lhs, rhs } => {
                write!(f, "aligned (with carry digit): {} | {}", lhs, rhs)
            },
            TraceEvent::StageEntered { stage } => write!(f, "stage: {:?}", stage),
            TraceEvent::Complemented { input, output } => {
                write!(f, "nines complement of {} -> {}", input, output)
            },
            TraceEvent::Digit { position, step } => write!(
                f,
                "digit {}: {} + {} + {} = {:04b} ({}) [binary carry: {}] correction {} -> {} [carry: {}]",
                position,
                step.lhs,
                step.rhs,
                u8::from(step.carry_in),
                step.binary_sum,
                step.binary_sum,
                u8::from(step.binary_carry),
                step.correction,
                step.digit,
                u8::from(step.carry_out)
            ),
            TraceEvent::PassCompleted { sum, carry_out } => {
                write!(f, "sum: {} [final carry: {}]", sum, u8::from(*carry_out))
            },
            TraceEvent::CarryInterpreted {
                carry_out,
                negative,
            } => write!(
                f,
                "final carry {} -> result is {}",
                u8::from(*carry_out),
                if *negative { "negative" } else { "positive" }
            ),
            TraceEvent::Recomplemented { magnitude } => write!(f, "magnitude: {}", magnitude),
            TraceEvent::Decoded {
                value,
                matches_reference,
            } => write!(
                f,
                "decimal: {} ({})",
                value,
                if *matches_reference {
                    "matches reference"
                } else {
                    "DOES NOT match reference"
                }
            ),
        }
    }
}

/// Trace handler trait for presenting arithmetic trace events
/// Implementations can print, log, collect, etc.
pub trait TraceHandler: Send + Sync {
    /// Handle a trace event
    fn on_event(&self, event: TraceEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<TraceEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op trace handler
pub struct NoOpTraceHandler;

impl TraceHandler for NoOpTraceHandler {
    fn on_event(&self, _event: TraceEvent) {}
}

/// Logging trace handler
pub struct LoggingTraceHandler;

impl TraceHandler for LoggingTraceHandler {
    fn on_event(&self, event: TraceEvent) {
        tracing::debug!("{}", event);
    }
}

/// Collects every event it receives, for presenters that render afterwards
#[derive(Default)]
pub struct CollectingTraceHandler {
    events: Mutex<Vec<TraceEvent>>,
}

impl CollectingTraceHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything collected so far
    pub fn take(&self) -> Vec<TraceEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl TraceHandler for CollectingTraceHandler {
    fn on_event(&self, event: TraceEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<TraceEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpTraceHandler;
        handler.on_event(TraceEvent::StageEntered {
            stage: SubtractStage::Align,
        });
        // Should not panic
    }

    #[test]
    fn test_collecting_handler() {
        let handler = CollectingTraceHandler::new();
        handler.on_events(vec![
            TraceEvent::StageEntered {
                stage: SubtractStage::Align,
            },
            TraceEvent::CarryInterpreted {
                carry_out: true,
                negative: false,
            },
        ]);
        assert_eq!(handler.len(), 2);

        let events = handler.take();
        assert_eq!(events.len(), 2);
        assert!(handler.is_empty());
    }

    #[test]
    fn test_event_display() {
        let event = TraceEvent::CarryInterpreted {
            carry_out: false,
            negative: true,
        };
        assert_eq!(event.to_string(), "final carry 0 -> result is negative");

        let decoded = TraceEvent::Decoded {
            value: -2,
            matches_reference: true,
        };
        assert_eq!(decoded.to_string(), "decimal: -2 (matches reference)");
    }
}
