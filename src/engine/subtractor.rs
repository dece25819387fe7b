// ============================================================================
// Subtractor
// Ten's-complement subtraction as a sequence of adder passes
// ============================================================================

use super::adder::DigitAdder;
use super::aligner::align;
use super::complement::complement_with;
use crate::domain::Encoding;
use crate::interfaces::{DigitCode, TraceEvent};
use crate::numeric::{ArithResult, ArithmeticError, EncodedNumber};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// State Machine
// ============================================================================

/// Stages of one subtraction
///
/// ```text
/// Align -> Complement -> Add -> Interpret -+-> DonePositive
///                                          +-> Recomplement -> DoneNegative
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SubtractStage {
    Align = 0,
    Complement = 1,
    Add = 2,
    Interpret = 3,
    Recomplement = 4,
    DonePositive = 5,
    DoneNegative = 6,
}

impl SubtractStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubtractStage::DonePositive | SubtractStage::DoneNegative)
    }

    /// Move to `next`, rejecting transitions the pipeline never makes.
    pub fn advance(self, next: SubtractStage) -> ArithResult<SubtractStage> {
        use SubtractStage::*;

        match (self, next) {
            (Align, Complement)
            | (Complement, Add)
            | (Add, Interpret)
            | (Interpret, DonePositive)
            | (Interpret, Recomplement)
            | (Recomplement, DoneNegative) => Ok(next),
            _ => Err(ArithmeticError::InvalidStageTransition {
                from: self,
                to: next,
            }),
        }
    }
}

// ============================================================================
// Subtraction Result
// ============================================================================

/// Everything a subtraction produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// Minuend after carry-digit reservation and padding
    pub minuend: EncodedNumber,

    /// Subtrahend after carry-digit reservation and padding
    pub subtrahend: EncodedNumber,

    /// Nines complement of the aligned subtrahend
    pub complement: EncodedNumber,

    /// Output of minuend + complement + 1
    pub raw_sum: EncodedNumber,

    /// Final carry of that addition: set means the result is non-negative
    pub carry_out: bool,

    /// Absolute value of the difference
    pub magnitude: EncodedNumber,

    /// Terminal stage reached
    pub stage: SubtractStage,

    /// Stage, complement and digit events (empty unless recording)
    pub trace: Vec<TraceEvent>,
}

impl Difference {
    pub fn is_negative(&self) -> bool {
        self.stage == SubtractStage::DoneNegative
    }
}

// ============================================================================
// Subtractor
// ============================================================================

/// Computes `minuend - subtrahend` as `minuend + C9(subtrahend) + 1`.
///
/// A final carry of 1 means the sum is the non-negative result. A final carry
/// of 0 means the sum is the ten's complement of a negative result; its
/// magnitude is recovered by taking the nines complement and adding one.
pub struct Subtractor<'a> {
    code: &'a dyn DigitCode,
    record: bool,
}

impl Subtractor<'static> {
    pub fn new(encoding: Encoding) -> Self {
        Self {
            code: encoding.code(),
            record: false,
        }
    }
}

impl<'a> Subtractor<'a> {
    pub fn with_code(code: &'a dyn DigitCode) -> Self {
        Self {
            code,
            record: false,
        }
    }

    /// Builder method: Record stage and digit events
    pub fn recording(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    /// Subtract two encoded, not yet aligned, numbers.
    pub fn subtract(
        &self,
        minuend: &EncodedNumber,
        subtrahend: &EncodedNumber,
    ) -> ArithResult<Difference> {
        let encoding = self.code.encoding();
        let adder = DigitAdder::with_code(self.code).recording(self.record);
        let mut trace = Vec::new();

        let mut stage = SubtractStage::Align;
        self.record_stage(&mut trace, stage);
        let (minuend, subtrahend) = align(minuend, subtrahend, encoding);
        self.record_event(&mut trace, || TraceEvent::Aligned {
            lhs: minuend.clone(),
            rhs: subtrahend.clone(),
        });

        stage = self.enter(&mut trace, stage, SubtractStage::Complement)?;
        let complement = complement_with(&subtrahend, self.code)?;
        self.record_event(&mut trace, || TraceEvent::Complemented {
            input: subtrahend.clone(),
            output: complement.clone(),
        });

        // The +1 of the ten's complement enters as the initial carry
        stage = self.enter(&mut trace, stage, SubtractStage::Add)?;
        let pass = adder.add(&minuend, &complement, true)?;
        if self.record {
            trace.extend(pass.trace_events());
        }

        stage = self.enter(&mut trace, stage, SubtractStage::Interpret)?;
        let carry_out = pass.carry_out;
        self.record_event(&mut trace, || TraceEvent::CarryInterpreted {
            carry_out,
            negative: !carry_out,
        });

        let magnitude = if carry_out {
            stage = self.enter(&mut trace, stage, SubtractStage::DonePositive)?;
            pass.sum.clone()
        } else {
            stage = self.enter(&mut trace, stage, SubtractStage::Recomplement)?;
            let magnitude = self.recomplement(&adder, &pass.sum, &mut trace)?;
            stage = self.enter(&mut trace, stage, SubtractStage::DoneNegative)?;
            magnitude
        };

        tracing::debug!(
            code = self.code.name(),
            carry_out,
            stage = ?stage,
            "subtraction complete"
        );

        Ok(Difference {
            minuend,
            subtrahend,
            complement,
            raw_sum: pass.sum,
            carry_out,
            magnitude,
            stage,
            trace,
        })
    }

    /// Ten's complement of a negative result: nines complement, then + 1.
    fn recomplement(
        &self,
        adder: &DigitAdder<'_>,
        tens_complement: &EncodedNumber,
        trace: &mut Vec<TraceEvent>,
    ) -> ArithResult<EncodedNumber> {
        let nines = complement_with(tens_complement, self.code)?;
        self.record_event(trace, || TraceEvent::Complemented {
            input: tens_complement.clone(),
            output: nines.clone(),
        });

        let one = EncodedNumber::filled_with_last(
            nines.len(),
            self.code.zero(),
            self.code.encode_digit(1)?,
        );
        let pass = adder.add(&nines, &one, false)?;
        if self.record {
            trace.extend(pass.trace_events());
        }

        self.record_event(trace, || TraceEvent::Recomplemented {
            magnitude: pass.sum.clone(),
        });
        Ok(pass.sum)
    }

    fn enter(
        &self,
        trace: &mut Vec<TraceEvent>,
        from: SubtractStage,
        to: SubtractStage,
    ) -> ArithResult<SubtractStage> {
        let stage = from.advance(to)?;
        self.record_stage(trace, stage);
        Ok(stage)
    }

    fn record_stage(&self, trace: &mut Vec<TraceEvent>, stage: SubtractStage) {
        self.record_event(trace, || TraceEvent::StageEntered { stage });
    }

    fn record_event<F>(&self, trace: &mut Vec<TraceEvent>, event: F)
    where
        F: FnOnce() -> TraceEvent,
    {
        if self.record {
            trace.push(event());
        }
    }
}

/// Subtract two encoded numbers under a built-in encoding.
pub fn subtract_encoded(
    minuend: &EncodedNumber,
    subtrahend: &EncodedNumber,
    encoding: Encoding,
) -> ArithResult<Difference> {
    Subtractor::new(encoding).subtract(minuend, subtrahend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Bcd;
    use crate::engine::{decode_number, encode_number};
    use crate::interfaces::DigitStep;
    use crate::numeric::DigitGroup;

    fn run(a: i64, b: i64, encoding: Encoding) -> Difference {
        let a = encode_number(a, encoding).unwrap();
        let b = encode_number(b, encoding).unwrap();
        subtract_encoded(&a, &b, encoding).unwrap()
    }

    #[test]
    fn test_transitions() {
        assert_eq!(
            SubtractStage::Align.advance(SubtractStage::Complement),
            Ok(SubtractStage::Complement)
        );
        assert_eq!(
            SubtractStage::Interpret.advance(SubtractStage::Recomplement),
            Ok(SubtractStage::Recomplement)
        );
        assert_eq!(
            SubtractStage::Align.advance(SubtractStage::Add),
            Err(ArithmeticError::InvalidStageTransition {
                from: SubtractStage::Align,
                to: SubtractStage::Add
            })
        );
        assert!(SubtractStage::DonePositive
            .advance(SubtractStage::Recomplement)
            .is_err());
        assert!(SubtractStage::DoneNegative.is_terminal());
        assert!(!SubtractStage::Interpret.is_terminal());
    }

    #[test]
    fn test_bcd_positive() {
        let diff = run(42, 17, Encoding::Bcd);
        assert!(diff.carry_out);
        assert_eq!(diff.stage, SubtractStage::DonePositive);
        assert_eq!(decode_number(&diff.magnitude, Encoding::Bcd).unwrap(), 25);
    }

    #[test]
    fn test_bcd_five_minus_seven() {
        let diff = run(5, 7, Encoding::Bcd);
        assert!(!diff.carry_out);
        assert!(diff.is_negative());
        // 05 + 92 + 1 = 98, the ten's complement of 2
        assert_eq!(decode_number(&diff.raw_sum, Encoding::Bcd).unwrap(), 98);
        assert_eq!(decode_number(&diff.magnitude, Encoding::Bcd).unwrap(), 2);
    }

    #[test]
    fn test_excess3_five_minus_seven() {
        let diff = run(5, 7, Encoding::Excess3);
        assert!(!diff.carry_out);
        assert_eq!(decode_number(&diff.raw_sum, Encoding::Excess3).unwrap(), 98);
        assert_eq!(decode_number(&diff.magnitude, Encoding::Excess3).unwrap(), 2);
    }

    #[test]
    fn test_equal_operands_give_positive_zero() {
        for encoding in Encoding::ALL {
            for value in [0i64, 9, 500, 9999] {
                let diff = run(value, value, encoding);
                assert!(diff.carry_out);
                assert_eq!(diff.stage, SubtractStage::DonePositive);
                assert_eq!(decode_number(&diff.magnitude, encoding).unwrap(), 0);
            }
        }
    }

    #[test]
    fn test_excess3_nine_minus_nine() {
        let diff = run(9, 9, Encoding::Excess3);
        assert!(diff.carry_out);
        assert_eq!(decode_number(&diff.magnitude, Encoding::Excess3).unwrap(), 0);
    }

    #[test]
    fn test_operands_of_different_width() {
        for encoding in Encoding::ALL {
            let diff = run(3, 1000, encoding);
            assert!(diff.is_negative());
            assert_eq!(decode_number(&diff.magnitude, encoding).unwrap(), 997);
            assert_eq!(diff.minuend.len(), 5);
        }
    }

    #[test]
    fn test_recorded_stages() {
        let a = encode_number(5, Encoding::Bcd).unwrap();
        let b = encode_number(7, Encoding::Bcd).unwrap();
        let diff = Subtractor::new(Encoding::Bcd)
            .recording(true)
            .subtract(&a, &b)
            .unwrap();

        let stages: Vec<SubtractStage> = diff
            .trace
            .iter()
            .filter_map(|e| match e {
                TraceEvent::StageEntered { stage } => Some(*stage),
                _ => None,
            })
            .collect();

        assert_eq!(
            stages,
            vec![
                SubtractStage::Align,
                SubtractStage::Complement,
                SubtractStage::Add,
                SubtractStage::Interpret,
                SubtractStage::Recomplement,
                SubtractStage::DoneNegative,
            ]
        );
        assert!(diff
            .trace
            .iter()
            .any(|e| matches!(e, TraceEvent::Recomplemented { .. })));
    }

    #[test]
    fn test_unrecorded_trace_is_empty() {
        let diff = run(5, 7, Encoding::Excess3);
        assert!(diff.trace.is_empty());
    }

    /// Bcd that counts the digit additions it performs
    struct CountingBcd {
        additions: std::sync::atomic::AtomicUsize,
    }

    impl DigitCode for CountingBcd {
        fn encoding(&self) -> Encoding {
            Encoding::Bcd
        }

        fn encode_digit(&self, digit: u8) -> ArithResult<DigitGroup> {
            Bcd.encode_digit(digit)
        }

        fn decode_digit(&self, group: DigitGroup) -> ArithResult<u8> {
            Bcd.decode_digit(group)
        }

        fn add_digits(&self, lhs: DigitGroup, rhs: DigitGroup, carry_in: bool) -> DigitStep {
            self.additions
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            Bcd.add_digits(lhs, rhs, carry_in)
        }

        fn complement_digit(&self, group: DigitGroup) -> ArithResult<DigitGroup> {
            Bcd.complement_digit(group)
        }
    }

    #[test]
    fn test_custom_digit_code() {
        let code = CountingBcd {
            additions: std::sync::atomic::AtomicUsize::new(0),
        };

        let adder = DigitAdder::with_code(&code);
        assert_eq!(adder.code().name(), "BCD");

        let a = encode_number(5, Encoding::Bcd).unwrap();
        let b = encode_number(7, Encoding::Bcd).unwrap();
        let diff = Subtractor::with_code(&code).subtract(&a, &b).unwrap();

        assert!(diff.is_negative());
        assert_eq!(decode_number(&diff.magnitude, Encoding::Bcd).unwrap(), 2);

        // Main pass plus the recomplement pass, one addition per aligned digit
        let additions = code.additions.load(std::sync::atomic::Ordering::Relaxed);
        assert_eq!(additions, 2 * diff.minuend.len());
    }
}
