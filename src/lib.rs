// ============================================================================
// Decimal Adder Library
// Digit-wise BCD and Excess-3 arithmetic with hardware-style correction
// ============================================================================

//! # Decimal Adder
//!
//! Decimal addition and subtraction carried out on 4-bit digit groups, the
//! way a BCD or Excess-3 hardware adder does it.
//!
//! ## Features
//!
//! - **Two digit codes**: BCD (8421) with +6 correction, Excess-3 with ±3 correction
//! - **Explicit carry threading** between digit positions
//! - **Ten's-complement subtraction** with sign recovery from the final carry
//! - **Structured traces** of every digit step for external presenters
//! - **Reference check** of each result against native integer arithmetic
//!
//! ## Example
//!
//! ```rust
//! use decimal_adder::prelude::*;
//! use std::sync::Arc;
//!
//! let calculator = CalculatorBuilder::new()
//!     .bcd()
//!     .trace(true)
//!     .build(Arc::new(NoOpTraceHandler))
//!     .unwrap();
//!
//! let sum = calculator.add(7, 5).unwrap();
//! assert_eq!(sum.value, 12);
//! assert!(sum.matches_reference);
//!
//! let difference = calculator.subtract(5, 7).unwrap();
//! assert_eq!(difference.value, -2);
//! assert!(!difference.carry_out);
//!
//! for event in &difference.trace {
//!     println!("{}", event);
//! }
//! ```

pub mod codes;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codes::{Bcd, Excess3};
    pub use crate::domain::{ArithmeticConfig, Encoding, ValidationPolicy};
    pub use crate::engine::{
        add_encoded, add_numbers, align, create_from_config, decode_number, encode_number,
        nines_complement, pad, subtract_encoded, subtract_numbers, Calculator, CalculatorBuilder,
        DigitAdder, Difference, Operation, Outcome, SubtractStage, Subtractor,
    };
    pub use crate::interfaces::{
        CollectingTraceHandler, Correction, DigitCode, DigitStep, LoggingTraceHandler,
        NoOpTraceHandler, Operand, TraceEvent, TraceHandler,
    };
    pub use crate::numeric::{ArithResult, ArithmeticError, DigitGroup, EncodedNumber};
}
