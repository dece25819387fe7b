// ============================================================================
// Arithmetic Errors
// Error types for digit-code encoding and arithmetic
// ============================================================================

use crate::domain::Encoding;
use crate::engine::SubtractStage;
use rust_decimal::Decimal;
use std::fmt;

/// Errors that can occur while encoding, decoding or combining digit groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// A group decodes to a value outside 0-9 under the given encoding
    InvalidDigitGroup { group: u8, encoding: Encoding },
    /// Negative integer, digit above 9 or group above 15
    InputOutOfRange { value: i64 },
    /// Decimal operand that is negative or has a fractional part, reported as given
    UnrepresentableDecimal { value: Decimal },
    /// Bit literal contains something other than `0`, `1`, `_` or whitespace
    MalformedBinaryLiteral { position: usize },
    /// A number must hold at least one digit group
    EmptyNumber,
    /// Adder operands must be aligned to the same length
    LengthMismatch { lhs: usize, rhs: usize },
    /// Decoded value does not fit the target integer type
    Overflow,
    /// Subtractor was driven out of order
    InvalidStageTransition {
        from: SubtractStage,
        to: SubtractStage,
    },
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::InvalidDigitGroup { group, encoding } => write!(
                f,
                "invalid digit group {:04b} ({}) for {}",
                group,
                group,
                encoding.name()
            ),
            ArithmeticError::InputOutOfRange { value } => {
                write!(f, "input out of range: {}", value)
            },
            ArithmeticError::UnrepresentableDecimal { value } => {
                write!(f, "decimal not a non-negative integer: {}", value)
            },
            ArithmeticError::MalformedBinaryLiteral { position } => write!(
                f,
                "malformed binary literal: unexpected character at position {}",
                position
            ),
            ArithmeticError::EmptyNumber => write!(f, "encoded number has no digit groups"),
            ArithmeticError::LengthMismatch { lhs, rhs } => write!(
                f,
                "operand length mismatch: {} groups vs {} groups",
                lhs, rhs
            ),
            ArithmeticError::Overflow => {
                write!(f, "arithmetic overflow: decoded value exceeds maximum")
            },
            ArithmeticError::InvalidStageTransition { from, to } => {
                write!(f, "invalid subtractor transition from {:?} to {:?}", from, to)
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for digit-code operations
pub type ArithResult<T> = Result<T, ArithmeticError>;
