// ============================================================================
// Digit Group
// One 4-bit code word holding a single encoded decimal digit
// ============================================================================

use super::errors::{ArithResult, ArithmeticError};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 4-bit unsigned code word (0-15).
///
/// The group itself carries no encoding; whether `1100` is a malformed BCD
/// digit or the Excess-3 code for 9 is decided by the digit code that decodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct DigitGroup(u8);

impl DigitGroup {
    /// Bit mask for the low nibble
    pub const MASK: u8 = 0x0F;

    /// Largest value a group can hold
    pub const MAX_VALUE: u8 = 15;

    /// All-zero group (`0000`)
    pub const ZERO: Self = Self(0);

    /// Create a group from an arbitrary byte, keeping only the low nibble.
    ///
    /// This is the wraparound a 4-bit register applies and is what the adder
    /// uses when storing a corrected digit.
    #[inline]
    pub const fn from_nibble(value: u8) -> Self {
        Self(value & Self::MASK)
    }

    /// Create a group, rejecting values that do not fit in 4 bits.
    ///
    /// # Errors
    /// Returns `InputOutOfRange` if `value > 15`.
    #[inline]
    pub fn new(value: u8) -> ArithResult<Self> {
        if value > Self::MAX_VALUE {
            return Err(ArithmeticError::InputOutOfRange {
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Binary value of the group (0-15)
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Invert all four bits.
    #[inline]
    pub const fn inverted(self) -> Self {
        Self(!self.0 & Self::MASK)
    }

    /// Render as exactly four binary digits, most significant bit first.
    pub fn to_bit_string(self) -> String {
        format!("{:04b}", self.0)
    }
}

impl fmt::Display for DigitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

impl TryFrom<u8> for DigitGroup {
    type Error = ArithmeticError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DigitGroup> for u8 {
    fn from(group: DigitGroup) -> Self {
        group.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wide_values() {
        assert_eq!(DigitGroup::new(15).unwrap().value(), 15);
        assert_eq!(
            DigitGroup::new(16),
            Err(ArithmeticError::InputOutOfRange { value: 16 })
        );
    }

    #[test]
    fn test_from_nibble_masks() {
        assert_eq!(DigitGroup::from_nibble(0x1A).value(), 0x0A);
        // 2 - 3 in a 4-bit register
        assert_eq!(DigitGroup::from_nibble(2u8.wrapping_sub(3)).value(), 15);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(DigitGroup::from_nibble(0b0011).inverted().value(), 0b1100);
        assert_eq!(DigitGroup::ZERO.inverted().value(), 0b1111);
        for v in 0..=15u8 {
            let g = DigitGroup::from_nibble(v);
            assert_eq!(g.inverted().inverted(), g);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DigitGroup::from_nibble(5).to_string(), "0101");
        assert_eq!(DigitGroup::from_nibble(12).to_bit_string(), "1100");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_wide_values() {
        let group: DigitGroup = serde_json::from_str("12").unwrap();
        assert_eq!(group.value(), 12);
        assert_eq!(serde_json::to_string(&group).unwrap(), "12");

        assert!(serde_json::from_str::<DigitGroup>("16").is_err());
        assert!(serde_json::from_str::<DigitGroup>("200").is_err());
    }
}
