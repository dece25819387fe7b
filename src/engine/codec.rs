// ============================================================================
// Number Codec
// Non-negative integers <-> digit-group sequences
// ============================================================================

use crate::domain::{Encoding, ValidationPolicy};
use crate::numeric::{ArithResult, ArithmeticError, EncodedNumber};
use rust_decimal::Decimal;

/// Encode each base-10 digit of `value`, most significant first.
///
/// # Errors
/// Returns `InputOutOfRange` for negative values.
///
/// # Example
/// ```ignore
/// let n = encode_number(305, Encoding::Bcd)?;
/// assert_eq!(n.to_string(), "0011 0000 0101");
/// ```
pub fn encode_number(value: i64, encoding: Encoding) -> ArithResult<EncodedNumber> {
    if value < 0 {
        return Err(ArithmeticError::InputOutOfRange { value });
    }
    encode_digits(&value.to_string(), encoding)
}

/// Decode every group and accumulate the digits in base 10.
///
/// # Errors
/// - `InvalidDigitGroup` on the first group that is not a code word
/// - `Overflow` if the value does not fit in an i64
pub fn decode_number(number: &EncodedNumber, encoding: Encoding) -> ArithResult<i64> {
    decode_with_policy(number, encoding, ValidationPolicy::Strict)
}

/// Decode under an explicit validation policy.
///
/// With `Lenient`, a malformed group contributes the digit 0 and a warning is
/// logged instead of failing.
pub fn decode_with_policy(
    number: &EncodedNumber,
    encoding: Encoding,
    policy: ValidationPolicy,
) -> ArithResult<i64> {
    let code = encoding.code();

    number.iter().try_fold(0i64, |acc, group| {
        let digit = match (code.decode_digit(group), policy) {
            (Ok(digit), _) => digit,
            (Err(err), ValidationPolicy::Strict) => return Err(err),
            (Err(err), ValidationPolicy::Lenient) => {
                tracing::warn!("{}; substituting 0", err);
                0
            },
        };

        acc.checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(digit)))
            .ok_or(ArithmeticError::Overflow)
    })
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

/// Encode a non-negative integral decimal.
///
/// Accepts values wider than an i64 (up to 28 digits).
///
/// # Errors
/// Returns `UnrepresentableDecimal` carrying the rejected value for
/// negative or fractional inputs.
pub fn encode_decimal(value: Decimal, encoding: Encoding) -> ArithResult<EncodedNumber> {
    if (value.is_sign_negative() && !value.is_zero()) || !value.fract().is_zero() {
        return Err(ArithmeticError::UnrepresentableDecimal { value });
    }

    let integral = value.trunc().normalize().abs();
    encode_digits(&integral.to_string(), encoding)
}

/// Decode into a `Decimal`, for results wider than an i64.
///
/// # Errors
/// - `InvalidDigitGroup` on the first group that is not a code word
/// - `Overflow` beyond 28 significant digits
pub fn decode_decimal(number: &EncodedNumber, encoding: Encoding) -> ArithResult<Decimal> {
    let code = encoding.code();
    let ten = Decimal::from(10u8);

    number.iter().try_fold(Decimal::ZERO, |acc, group| {
        let digit = code.decode_digit(group)?;
        acc.checked_mul(ten)
            .and_then(|v| v.checked_add(Decimal::from(digit)))
            .ok_or(ArithmeticError::Overflow)
    })
}

fn encode_digits(digits: &str, encoding: Encoding) -> ArithResult<EncodedNumber> {
    let code = encoding.code();
    let groups = digits
        .bytes()
        .map(|b| code.encode_digit(b.wrapping_sub(b'0')))
        .collect::<ArithResult<Vec<_>>>()?;
    EncodedNumber::from_groups(groups)
}
