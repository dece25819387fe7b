// ============================================================================
// Encoding Selector
// Closed choice of 4-bit decimal codes
// ============================================================================

use crate::codes::{Bcd, Excess3};
use crate::interfaces::DigitCode;
use crate::numeric::{ArithResult, DigitGroup};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The decimal code a number is written in.
///
/// Selecting the encoding once per call resolves it to a [`DigitCode`]
/// strategy; the adder and complement generator never branch on the variant
/// per digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Encoding {
    /// Binary-Coded Decimal (8421): digit d stored as binary(d)
    /// - Correction: +6 when a digit sum exceeds 9 or carries out of 4 bits
    /// - Nines complement: 9 - d per digit
    Bcd,

    /// Excess-3: digit d stored as binary(d + 3)
    /// - Correction: +3 on carry, -3 otherwise
    /// - Self-complementing: nines complement is bit inversion
    Excess3,
}

impl Encoding {
    /// Both supported encodings
    pub const ALL: [Encoding; 2] = [Encoding::Bcd, Encoding::Excess3];

    /// Resolve to the digit-code strategy implementing this encoding.
    #[inline]
    pub fn code(self) -> &'static dyn DigitCode {
        match self {
            Encoding::Bcd => &Bcd,
            Encoding::Excess3 => &Excess3,
        }
    }

    /// Offset added to a digit before it is stored
    #[inline]
    pub const fn bias(self) -> u8 {
        match self {
            Encoding::Bcd => 0,
            Encoding::Excess3 => 3,
        }
    }

    /// The group representing decimal zero (`0000` or `0011`)
    #[inline]
    pub const fn zero_group(self) -> DigitGroup {
        DigitGroup::from_nibble(self.bias())
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Bcd => "BCD",
            Encoding::Excess3 => "Excess-3",
        }
    }

    /// Encode one decimal digit under this encoding.
    pub fn encode_digit(self, digit: u8) -> ArithResult<DigitGroup> {
        self.code().encode_digit(digit)
    }

    /// Decode one group under this encoding.
    pub fn decode_digit(self, group: DigitGroup) -> ArithResult<u8> {
        self.code().decode_digit(group)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Encoding {
    type Err = String;

    /// Accepts `bcd`, `excess3`, `excess-3`, `xs3` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcd" | "8421" => Ok(Encoding::Bcd),
            "excess3" | "excess-3" | "xs3" | "xs-3" => Ok(Encoding::Excess3),
            other => Err(format!("Unknown encoding: {}", other)),
        }
    }
}
