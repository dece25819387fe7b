// ============================================================================
// Excess-3 Digit Code
// Self-complementing code: digit d stored as binary(d + 3)
// ============================================================================

use crate::domain::Encoding;
use crate::interfaces::{Correction, DigitCode, DigitStep};
use crate::numeric::{ArithResult, ArithmeticError, DigitGroup};

const BIAS: u8 = 3;

/// Excess-3 digit code
///
/// Adding two excess-3 digits yields a sum biased by 6. When the binary sum
/// carries out of the nibble the bias has already been consumed by the
/// wraparound and 3 is added back; otherwise 3 is subtracted.
///
/// The nines complement of a digit is the bitwise inversion of its group.
#[derive(Debug, Clone, Copy, Default)]
pub struct Excess3;

impl Excess3 {
    pub fn new() -> Self {
        Self
    }
}

impl DigitCode for Excess3 {
    fn encoding(&self) -> Encoding {
        Encoding::Excess3
    }

    fn encode_digit(&self, digit: u8) -> ArithResult<DigitGroup> {
        if digit > 9 {
            return Err(ArithmeticError::InputOutOfRange {
                value: i64::from(digit),
            });
        }
        Ok(DigitGroup::from_nibble(digit + BIAS))
    }

    fn decode_digit(&self, group: DigitGroup) -> ArithResult<u8> {
        match group.value() {
            v @ 3..=12 => Ok(v - BIAS),
            other => Err(ArithmeticError::InvalidDigitGroup {
                group: other,
                encoding: Encoding::Excess3,
            }),
        }
    }

    fn add_digits(&self, lhs: DigitGroup, rhs: DigitGroup, carry_in: bool) -> DigitStep {
        let raw_sum = lhs.value() + rhs.value() + u8::from(carry_in);

        let binary_carry = raw_sum > 15;
        let binary_sum = if binary_carry { raw_sum - 16 } else { raw_sum };

        let (correction, corrected) = if binary_carry {
            (Correction::AddThree, binary_sum + BIAS)
        } else {
            (Correction::SubtractThree, binary_sum.wrapping_sub(BIAS))
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
            carry_out: binary_carry,
        }
    }

    fn complement_digit(&self, group: DigitGroup) -> ArithResult<DigitGroup> {
        Ok(group.inverted())
    }
}
