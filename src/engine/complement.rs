// ============================================================================
// Nines-Complement Generator
// ============================================================================

use crate::domain::Encoding;
use crate::interfaces::DigitCode;
use crate::numeric::{ArithResult, EncodedNumber};

/// Nines complement of every group, order preserved.
///
/// BCD maps each digit d to 9 - d and fails on malformed groups. Excess-3
/// inverts the bits of each group and never fails.
pub fn nines_complement(number: &EncodedNumber, encoding: Encoding) -> ArithResult<EncodedNumber> {
    complement_with(number, encoding.code())
}

pub(crate) fn complement_with(
    number: &EncodedNumber,
    code: &dyn DigitCode,
) -> ArithResult<EncodedNumber> {
    number.map_groups(|group| code.complement_digit(group))
}
