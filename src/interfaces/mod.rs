// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod digit_code;
mod trace_handler;

pub use digit_code::{Correction, DigitCode, DigitStep};
pub use trace_handler::{
    CollectingTraceHandler, LoggingTraceHandler, NoOpTraceHandler, Operand, TraceEvent,
    TraceHandler,
};
