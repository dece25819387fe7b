// ============================================================================
// Digit-wise Adder
// Ripple-carry addition over digit groups with per-code correction
// ============================================================================

use crate::domain::Encoding;
use crate::interfaces::{DigitCode, DigitStep, TraceEvent};
use crate::numeric::{ArithResult, ArithmeticError, DigitGroup, EncodedNumber, Groups};

/// Result of one adder pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdderPass {
    /// Corrected groups, same length as the operands
    pub sum: EncodedNumber,

    /// Carry produced by the most significant position
    pub carry_out: bool,

    /// Per-digit record, least significant first (empty unless recording)
    pub steps: Vec<DigitStep>,
}

impl AdderPass {
    /// Digit events followed by the pass summary, in processing order
    pub fn trace_events(&self) -> impl Iterator<Item = TraceEvent> + '_ {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| TraceEvent::Digit {
                position: i + 1,
                step: *step,
            })
            .chain(std::iter::once(TraceEvent::PassCompleted {
                sum: self.sum.clone(),
                carry_out: self.carry_out,
            }))
    }
}

/// Ripple-carry adder over aligned digit-group sequences.
///
/// Positions are processed from least to most significant. The carry is a
/// plain value handed from one [`DigitCode::add_digits`] call to the next, so
/// each position can be tested in isolation.
///
/// # Example
/// ```ignore
/// let adder = DigitAdder::new(Encoding::Bcd).recording(true);
/// let pass = adder.add(&lhs, &rhs, false)?;
/// ```
pub struct DigitAdder<'a> {
    code: &'a dyn DigitCode,
    record: bool,
}

impl DigitAdder<'static> {
    /// Create an adder for one of the built-in encodings
    pub fn new(encoding: Encoding) -> Self {
        Self {
            code: encoding.code(),
            record: false,
        }
    }
}

impl<'a> DigitAdder<'a> {
    /// Create an adder for any digit code
    pub fn with_code(code: &'a dyn DigitCode) -> Self {
        Self {
            code,
            record: false,
        }
    }

    /// Builder method: Keep a per-digit record
    pub fn recording(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    /// The digit code this adder corrects for
    pub fn code(&self) -> &'a dyn DigitCode {
        self.code
    }

    /// Add two aligned numbers with an initial carry.
    ///
    /// Recording never changes the sum or the carry.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the operands are not the same length.
    pub fn add(
        &self,
        lhs: &EncodedNumber,
        rhs: &EncodedNumber,
        carry_in: bool,
    ) -> ArithResult<AdderPass> {
        if lhs.len() != rhs.len() {
            return Err(ArithmeticError::LengthMismatch {
                lhs: lhs.len(),
                rhs: rhs.len(),
            });
        }

        let width = lhs.len();
        let mut groups = Groups::from_elem(DigitGroup::ZERO, width);
        let mut steps = if self.record {
            Vec::with_capacity(width)
        } else {
            Vec::new()
        };

        let mut carry = carry_in;
        for i in (0..width).rev() {
            let step = self
                .code
                .add_digits(lhs.groups()[i], rhs.groups()[i], carry);

            tracing::trace!(
                code = self.code.name(),
                position = width - i,
                raw_sum = step.raw_sum,
                correction = ?step.correction,
                carry_out = step.carry_out,
                "digit added"
            );

            groups[i] = step.digit;
            carry = step.carry_out;

            if self.record {
                steps.push(step);
            }
        }

        Ok(AdderPass {
            sum: EncodedNumber::from_trusted(groups),
            carry_out: carry,
            steps,
        })
    }
}

/// Add two aligned numbers, returning the sum and the final carry.
pub fn add_encoded(
    lhs: &EncodedNumber,
    rhs: &EncodedNumber,
    encoding: Encoding,
    carry_in: bool,
) -> ArithResult<(EncodedNumber, bool)> {
    let pass = DigitAdder::new(encoding).add(lhs, rhs, carry_in)?;
    Ok((pass.sum, pass.carry_out))
}
