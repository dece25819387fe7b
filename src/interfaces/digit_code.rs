// ============================================================================
// Digit Code Interface
// Defines the contract for a 4-bit decimal digit code
// ============================================================================

use crate::domain::Encoding;
use crate::numeric::{ArithResult, DigitGroup};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Correction applied to a 4-bit binary digit sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Correction {
    /// Sum is already a valid digit
    None,
    /// BCD: sum exceeded 9 or carried out of the nibble
    AddSix,
    /// Excess-3: binary carry occurred
    AddThree,
    /// Excess-3: no binary carry
    SubtractThree,
}

impl Correction {
    /// Signed adjustment added to the binary sum
    pub const fn delta(self) -> i8 {
        match self {
            Correction::None => 0,
            Correction::AddSix => 6,
            Correction::AddThree => 3,
            Correction::SubtractThree => -3,
        }
    }

    /// Whether the binary sum was modified
    pub const fn is_applied(self) -> bool {
        !matches!(self, Correction::None)
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correction::None => f.write_str("none"),
            Correction::AddSix => f.write_str("+6 (0110)"),
            Correction::AddThree => f.write_str("+3 (0011)"),
            Correction::SubtractThree => f.write_str("-3 (0011)"),
        }
    }
}

/// Everything one digit position of the adder computed.
///
/// The carry is explicit: `carry_in` came from the less significant position
/// and `carry_out` feeds the next more significant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitStep {
    pub lhs: DigitGroup,
    pub rhs: DigitGroup,
    pub carry_in: bool,
    /// lhs + rhs + carry_in before any reduction (0-31)
    pub raw_sum: u8,
    /// raw_sum reduced to 4 bits
    pub binary_sum: u8,
    /// raw_sum exceeded 15
    pub binary_carry: bool,
    pub correction: Correction,
    /// Corrected group stored at this position
    pub digit: DigitGroup,
    pub carry_out: bool,
}

/// Strategy pattern interface for 4-bit decimal codes
/// Implementations: Bcd (8421), Excess3
pub trait DigitCode: Send + Sync {
    /// The encoding this code implements
    fn encoding(&self) -> Encoding;

    /// Encode a decimal digit (0-9)
    ///
    /// # Errors
    /// Returns `InputOutOfRange` for digits above 9
    fn encode_digit(&self, digit: u8) -> ArithResult<DigitGroup>;

    /// Decode a group back to its decimal digit
    ///
    /// # Errors
    /// Returns `InvalidDigitGroup` when the group is not a code word
    fn decode_digit(&self, group: DigitGroup) -> ArithResult<u8>;

    /// Add two groups plus a carry and apply the code's correction
    fn add_digits(&self, lhs: DigitGroup, rhs: DigitGroup, carry_in: bool) -> DigitStep;

    /// Nines complement of one group
    fn complement_digit(&self, group: DigitGroup) -> ArithResult<DigitGroup>;

    /// Get the code name for logging
    fn name(&self) -> &'static str {
        self.encoding().name()
    }

    /// The group representing decimal zero
    fn zero(&self) -> DigitGroup {
        self.encoding().zero_group()
    }

    /// Optional: Check whether a group is a valid code word
    fn is_valid(&self, group: DigitGroup) -> bool {
        self.decode_digit(group).is_ok()
    }
}
