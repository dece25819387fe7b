// ============================================================================
// BCD (8421) Digit Code
// Natural binary value per decimal digit, +6 correction on addition
// ============================================================================

use crate::domain::Encoding;
use crate::interfaces::{Correction, DigitCode, DigitStep};
use crate::numeric::{ArithResult, ArithmeticError, DigitGroup};

/// Binary-Coded Decimal digit code
///
/// Digit d is stored as binary(d). A 4-bit binary sum overflows at 16, not 10,
/// so a sum above 9 (or one that carried out of the nibble) is corrected by
/// adding 6, which skips the six unused code words 1010-1111.
///
/// # Example
/// ```text
///   0111 (7)
/// + 0101 (5)
///   ----
///   1100 (12) > 9  -> +0110 -> 0010, carry 1   => 12
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Bcd;

impl Bcd {
    pub fn new() -> Self {
        Self
    }
}

impl DigitCode for Bcd {
    fn encoding(&self) -> Encoding {
        Encoding::Bcd
    }

    fn encode_digit(&self, digit: u8) -> ArithResult<DigitGroup> {
        if digit > 9 {
            return Err(ArithmeticError::InputOutOfRange {
                value: i64::from(digit),
            });
        }
        Ok(DigitGroup::from_nibble(digit))
    }

    fn decode_digit(&self, group: DigitGroup) -> ArithResult<u8> {
        match group.value() {
            digit @ 0..=9 => Ok(digit),
            other => Err(ArithmeticError::InvalidDigitGroup {
                group: other,
                encoding: Encoding::Bcd,
            }),
        }
    }

    fn add_digits(&self, lhs: DigitGroup, rhs: DigitGroup, carry_in: bool) -> DigitStep {
        let raw_sum = lhs.value() + rhs.value() + u8::from(carry_in);

        let binary_carry = raw_sum > 15;
        let binary_sum = if binary_carry { raw_sum - 16 } else { raw_sum };

        let (correction, corrected, carry_out) = if binary_sum > 9 || binary_carry {
            let mut fixed = binary_sum + 6;
            let mut carry_out = fixed > 15;
            if carry_out {
                fixed -= 16;
            }
            // A carry out of the binary sum is a decimal carry even when the
            // +6 itself does not overflow.
            if binary_carry {
                carry_out = true;
            }
            (Correction::AddSix, fixed, carry_out)
        } else {
            (Correction::None, binary_sum, false)
        };

        DigitStep {
            lhs,
            rhs,
            carry_in,
            raw_sum,
            binary_sum,
            binary_carry,
            correction,
            digit: DigitGroup::from_nibble(corrected),
            carry_out,
        }
    }

    fn complement_digit(&self, group: DigitGroup) -> ArithResult<DigitGroup> {
        let digit = self.decode_digit(group)?;
        self.encode_digit(9 - digit)
    }
}
