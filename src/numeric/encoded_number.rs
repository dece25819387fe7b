// ============================================================================
// Encoded Number
// Most-significant-first sequence of digit groups
// ============================================================================

use super::digit_group::DigitGroup;
use super::errors::{ArithResult, ArithmeticError};
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inline capacity: an `i64` has at most 19 digits, plus the reserved carry digit.
pub const INLINE_GROUPS: usize = 20;

/// Storage used for group sequences
pub type Groups = SmallVec<[DigitGroup; INLINE_GROUPS]>;

/// A decimal number as an ordered sequence of 4-bit groups, most significant first.
///
/// # Invariants
/// - Never empty
/// - Only grows by prepending groups (padding); arithmetic always builds a
///   new value
///
/// # Example
/// ```ignore
/// let n: EncodedNumber = "0000 0111".parse()?;
/// assert_eq!(n.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawEncodedNumber"))]
pub struct EncodedNumber {
    groups: Groups,
}

/// Unchecked wire shape; deserialization goes through `from_groups`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawEncodedNumber {
    groups: Vec<DigitGroup>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEncodedNumber> for EncodedNumber {
    type Error = ArithmeticError;

    fn try_from(raw: RawEncodedNumber) -> Result<Self, Self::Error> {
        Self::from_groups(raw.groups)
    }
}

impl EncodedNumber {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from groups ordered most significant first.
    ///
    /// # Errors
    /// Returns `EmptyNumber` if no groups are supplied.
    pub fn from_groups<I>(groups: I) -> ArithResult<Self>
    where
        I: IntoIterator<Item = DigitGroup>,
    {
        let groups: Groups = groups.into_iter().collect();
        if groups.is_empty() {
            return Err(ArithmeticError::EmptyNumber);
        }
        Ok(Self { groups })
    }

    /// A single-group number.
    pub fn single(group: DigitGroup) -> Self {
        let mut groups = Groups::new();
        groups.push(group);
        Self { groups }
    }

    /// `len` copies of `fill`, with `last` in the least significant position.
    ///
    /// Used to build addends such as the "plus one" of a ten's complement.
    pub fn filled_with_last(len: usize, fill: DigitGroup, last: DigitGroup) -> Self {
        let len = len.max(1);
        let mut groups: Groups = std::iter::repeat(fill).take(len - 1).collect();
        groups.push(last);
        Self { groups }
    }

    /// Build from the trusted output of an arithmetic stage.
    ///
    /// Callers guarantee the groups are non-empty.
    pub(crate) fn from_trusted(groups: Groups) -> Self {
        debug_assert!(!groups.is_empty());
        Self { groups }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of digit groups
    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups, most significant first
    #[inline]
    pub fn groups(&self) -> &[DigitGroup] {
        &self.groups
    }

    /// Iterate groups, most significant first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = DigitGroup> + ExactSizeIterator + '_ {
        self.groups.iter().copied()
    }

    /// Total bit width (4 per group)
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.groups.len() * 4
    }

    // ========================================================================
    // Transformations
    // ========================================================================

    /// Prepend one group in the most significant position.
    pub fn prepend(&mut self, group: DigitGroup) {
        self.groups.insert(0, group);
    }

    /// Prepend `fill` until the number holds at least `len` groups.
    pub fn pad_to(&mut self, len: usize, fill: DigitGroup) {
        let missing = len.saturating_sub(self.groups.len());
        if missing > 0 {
            self.groups
                .insert_many(0, std::iter::repeat(fill).take(missing));
        }
    }

    /// Apply a per-group transform, preserving order.
    pub fn map_groups<F>(&self, mut f: F) -> ArithResult<Self>
    where
        F: FnMut(DigitGroup) -> ArithResult<DigitGroup>,
    {
        let groups = self
            .groups
            .iter()
            .map(|&g| f(g))
            .collect::<ArithResult<Groups>>()?;
        Ok(Self { groups })
    }

    /// Invert every bit of every group.
    pub fn bit_inverted(&self) -> Self {
        Self {
            groups: self.groups.iter().map(|g| g.inverted()).collect(),
        }
    }

    /// Render as contiguous bits, e.g. `00000111`.
    pub fn to_bit_string(&self) -> String {
        self.groups.iter().map(|g| g.to_bit_string()).collect()
    }
}

impl fmt::Display for EncodedNumber {
    /// Groups separated by single spaces, e.g. `0000 0111`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}

// ============================================================================
// Bit Literal Parsing
// ============================================================================

impl std::str::FromStr for EncodedNumber {
    type Err = ArithmeticError;

    /// Parse a binary literal.
    ///
    /// Whitespace and `_` are ignored. A literal whose bit count is not a
    /// multiple of four is left-padded with zero bits.
    ///
    /// # Examples
    /// - "0001 0010" -> [0001, 0010]
    /// - "10010" -> [0001, 0010]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits: Vec<u8> = Vec::with_capacity(s.len());
        for (position, c) in s.chars().enumerate() {
            match c {
                '0' => bits.push(0),
                '1' => bits.push(1),
                '_' => {},
                c if c.is_whitespace() => {},
                _ => return Err(ArithmeticError::MalformedBinaryLiteral { position }),
            }
        }

        if bits.is_empty() {
            return Err(ArithmeticError::EmptyNumber);
        }

        let misalignment = (4 - bits.len() % 4) % 4;
        let mut aligned = vec![0u8; misalignment];
        aligned.extend(bits);

        let groups = aligned
            .chunks_exact(4)
            .map(|nibble| {
                DigitGroup::from_nibble(nibble.iter().fold(0u8, |acc, &bit| (acc << 1) | bit))
            })
            .collect();

        Ok(Self { groups })
    }
}
