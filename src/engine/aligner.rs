// ============================================================================
// Aligner
// Pads operands to a common length with the encoding's zero digit
// ============================================================================

use crate::domain::Encoding;
use crate::numeric::EncodedNumber;

/// Prepend the zero group to the shorter operand until both lengths match.
pub fn pad(
    lhs: &EncodedNumber,
    rhs: &EncodedNumber,
    encoding: Encoding,
) -> (EncodedNumber, EncodedNumber) {
    let width = lhs.len().max(rhs.len());
    let zero = encoding.zero_group();

    let mut lhs = lhs.clone();
    let mut rhs = rhs.clone();
    lhs.pad_to(width, zero);
    rhs.pad_to(width, zero);
    (lhs, rhs)
}

/// Prepend exactly one zero group, reserving room for a final carry.
pub fn reserve_carry_digit(number: &EncodedNumber, encoding: Encoding) -> EncodedNumber {
    let mut reserved = number.clone();
    reserved.prepend(encoding.zero_group());
    reserved
}

/// Reserve a carry digit on both operands, then pad them to equal length.
///
/// Both results are at least one group longer than the longer input.
pub fn align(
    lhs: &EncodedNumber,
    rhs: &EncodedNumber,
    encoding: Encoding,
) -> (EncodedNumber, EncodedNumber) {
    pad(
        &reserve_carry_digit(lhs, encoding),
        &reserve_carry_digit(rhs, encoding),
        encoding,
    )
}
