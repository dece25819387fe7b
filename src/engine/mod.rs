// ============================================================================
// Engine Module
// Codec, aligner, adder, complement and subtractor pipeline
// ============================================================================

mod adder;
mod aligner;
mod calculator;
mod codec;
mod complement;
mod subtractor;

pub mod factory;

pub use adder::{add_encoded, AdderPass, DigitAdder};
pub use aligner::{align, pad, reserve_carry_digit};
pub use calculator::{Calculator, Operation, Outcome};
pub use codec::{decode_decimal, decode_number, decode_with_policy, encode_decimal, encode_number};
pub use complement::nines_complement;
pub use factory::{add_numbers, create_from_config, subtract_numbers, CalculatorBuilder};
pub use subtractor::{subtract_encoded, Difference, SubtractStage, Subtractor};
