// ============================================================================
// Numeric Module
// 4-bit digit groups and the sequences built from them
// ============================================================================
//
// This module provides:
// - DigitGroup: one 4-bit code word
// - EncodedNumber: most-significant-first sequence of digit groups
// - ArithmeticError: error types for encoding and arithmetic
//
// Design principles:
// - Groups carry no encoding; digit codes interpret them
// - All fallible operations return Result (no panics)
// - Inline storage for any i64-sized number

mod digit_group;
mod encoded_number;
mod errors;

pub use digit_group::DigitGroup;
pub use encoded_number::{EncodedNumber, Groups, INLINE_GROUPS};
pub use errors::{ArithResult, ArithmeticError};
