// ============================================================================
// Calculator
// Decimal in, digit-code arithmetic, decimal out
// ============================================================================

use super::adder::DigitAdder;
use super::aligner::align;
use super::codec::{decode_with_policy, encode_number};
use super::subtractor::Subtractor;
use crate::domain::{ArithmeticConfig, Encoding};
use crate::interfaces::{NoOpTraceHandler, Operand, TraceEvent, TraceHandler};
use crate::numeric::{ArithResult, ArithmeticError, EncodedNumber};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arithmetic operation performed by a calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    /// Native i64 result used as the reference
    pub fn reference(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operation::Add => lhs.checked_add(rhs),
            Operation::Subtract => lhs.checked_sub(rhs),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }
}

/// Result of one calculator run
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outcome {
    pub operation: Operation,
    pub encoding: Encoding,
    pub lhs: i64,
    pub rhs: i64,

    /// Decoded signed result
    pub value: i64,

    /// Result groups (magnitude for subtraction)
    pub encoded: EncodedNumber,

    /// Final carry of the main adder pass
    pub carry_out: bool,

    /// `value` equals native integer arithmetic on the inputs
    pub matches_reference: bool,

    /// Ordered trace (empty unless the calculator emits traces)
    pub trace: Vec<TraceEvent>,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {} [{}: {}]",
            self.lhs,
            self.operation.symbol(),
            self.rhs,
            self.value,
            self.encoding,
            self.encoded
        )
    }
}

/// Stateless digit-code calculator with a pluggable trace handler
///
/// Holds only configuration, so one instance may be shared across threads.
pub struct Calculator {
    config: ArithmeticConfig,
    trace_handler: Arc<dyn TraceHandler>,
}

impl Calculator {
    /// Create a calculator from a validated configuration
    pub fn new(
        config: ArithmeticConfig,
        trace_handler: Arc<dyn TraceHandler>,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            config,
            trace_handler,
        })
    }

    /// Untraced, strict calculator for one encoding
    pub fn for_encoding(encoding: Encoding) -> Self {
        Self {
            config: ArithmeticConfig::new(encoding),
            trace_handler: Arc::new(NoOpTraceHandler),
        }
    }

    pub fn config(&self) -> &ArithmeticConfig {
        &self.config
    }

    pub fn encoding(&self) -> Encoding {
        self.config.encoding
    }

    /// Add two non-negative integers through the digit-wise adder
    pub fn add(&self, lhs: i64, rhs: i64) -> ArithResult<Outcome> {
        self.compute(Operation::Add, lhs, rhs)
    }

    /// Subtract two non-negative integers through the complement pipeline
    pub fn subtract(&self, lhs: i64, rhs: i64) -> ArithResult<Outcome> {
        self.compute(Operation::Subtract, lhs, rhs)
    }

    /// Run one operation end to end
    pub fn compute(&self, operation: Operation, lhs: i64, rhs: i64) -> ArithResult<Outcome> {
        self.check_operand(lhs)?;
        self.check_operand(rhs)?;

        let encoding = self.config.encoding;
        let record = self.config.emit_trace;
        let mut trace = Vec::new();

        let lhs_encoded = encode_number(lhs, encoding)?;
        let rhs_encoded = encode_number(rhs, encoding)?;
        if record {
            trace.push(TraceEvent::Encoded {
                operand: Operand::Lhs,
                value: lhs,
                encoded: lhs_encoded.clone(),
            });
            trace.push(TraceEvent::Encoded {
                operand: Operand::Rhs,
                value: rhs,
                encoded: rhs_encoded.clone(),
            });
        }

        let (encoded, carry_out, negative) = match operation {
            Operation::Add => {
                let (a, b) = align(&lhs_encoded, &rhs_encoded, encoding);
                if record {
                    trace.push(TraceEvent::Aligned {
                        lhs: a.clone(),
                        rhs: b.clone(),
                    });
                }

                let pass = DigitAdder::new(encoding)
                    .recording(record)
                    .add(&a, &b, false)?;
                if record {
                    trace.extend(pass.trace_events());
                }
                (pass.sum, pass.carry_out, false)
            },
            Operation::Subtract => {
                let diff = Subtractor::new(encoding)
                    .recording(record)
                    .subtract(&lhs_encoded, &rhs_encoded)?;
                let negative = diff.is_negative();
                trace.extend(diff.trace);
                (diff.magnitude, diff.carry_out, negative)
            },
        };

        let magnitude = decode_with_policy(&encoded, encoding, self.config.validation)?;
        let value = if negative { -magnitude } else { magnitude };
        let matches_reference = operation.reference(lhs, rhs) == Some(value);

        if !matches_reference {
            tracing::warn!(
                encoding = %encoding,
                lhs,
                rhs,
                value,
                "digit-code result differs from native arithmetic"
            );
        }
        tracing::debug!(
            encoding = %encoding,
            operation = ?operation,
            lhs,
            rhs,
            value,
            carry_out,
            "calculation complete"
        );

        if record {
            trace.push(TraceEvent::Decoded {
                value,
                matches_reference,
            });
            self.trace_handler.on_events(trace.clone());
        }

        Ok(Outcome {
            operation,
            encoding,
            lhs,
            rhs,
            value,
            encoded,
            carry_out,
            matches_reference,
            trace,
        })
    }

    fn check_operand(&self, value: i64) -> ArithResult<()> {
        let too_large = self.config.max_operand.is_some_and(|max| value > max);
        if value < 0 || too_large {
            return Err(ArithmeticError::InputOutOfRange { value });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationPolicy;
    use crate::interfaces::CollectingTraceHandler;

    fn calculator(encoding: Encoding) -> Calculator {
        Calculator::for_encoding(encoding)
    }

    #[test]
    fn test_bcd_add() {
        let outcome = calculator(Encoding::Bcd).add(7, 5).unwrap();
        assert_eq!(outcome.value, 12);
        assert!(outcome.matches_reference);
        assert!(outcome.trace.is_empty());
        assert_eq!(outcome.to_string(), "7 + 5 = 12 [BCD: 0001 0010]");
    }

    #[test]
    fn test_bcd_subtract_negative() {
        let outcome = calculator(Encoding::Bcd).subtract(5, 7).unwrap();
        assert_eq!(outcome.value, -2);
        assert!(!outcome.carry_out);
        assert!(outcome.matches_reference);
    }

    #[test]
    fn test_excess3_scenarios() {
        let calc = calculator(Encoding::Excess3);

        let sum = calc.add(0, 0).unwrap();
        assert_eq!(sum.value, 0);

        let diff = calc.subtract(9, 9).unwrap();
        assert_eq!(diff.value, 0);
        assert!(diff.carry_out);
        assert!(diff.matches_reference);
    }

    #[test]
    fn test_rejects_negative_operand() {
        let result = calculator(Encoding::Bcd).add(-1, 5);
        assert_eq!(result, Err(ArithmeticError::InputOutOfRange { value: -1 }));
    }

    #[test]
    fn test_max_operand() {
        let calc = Calculator::new(
            ArithmeticConfig::bcd().with_max_operand(9999),
            Arc::new(NoOpTraceHandler),
        )
        .unwrap();

        assert!(calc.add(9999, 9999).is_ok());
        assert_eq!(
            calc.add(10_000, 1),
            Err(ArithmeticError::InputOutOfRange { value: 10_000 })
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Calculator::new(
            ArithmeticConfig::bcd().with_max_operand(-5),
            Arc::new(NoOpTraceHandler),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_trace_forwarded_to_handler() {
        let handler = Arc::new(CollectingTraceHandler::new());
        let calc = Calculator::new(ArithmeticConfig::bcd().with_trace(true), handler.clone())
            .unwrap();

        let outcome = calc.add(7, 5).unwrap();
        assert!(!outcome.trace.is_empty());
        assert_eq!(handler.take(), outcome.trace);

        assert!(matches!(
            outcome.trace.last(),
            Some(TraceEvent::Decoded {
                value: 12,
                matches_reference: true
            })
        ));
    }

    #[test]
    fn test_trace_does_not_change_result() {
        for encoding in Encoding::ALL {
            let quiet = calculator(encoding);
            let loud = Calculator::new(
                ArithmeticConfig::new(encoding).with_trace(true),
                Arc::new(NoOpTraceHandler),
            )
            .unwrap();

            for (a, b) in [(5, 7), (1234, 999), (0, 0)] {
                let q = quiet.subtract(a, b).unwrap();
                let l = loud.subtract(a, b).unwrap();
                assert_eq!(q.value, l.value);
                assert_eq!(q.encoded, l.encoded);
                assert_eq!(q.carry_out, l.carry_out);
            }
        }
    }

    #[test]
    fn test_lenient_config_accepted() {
        let calc = Calculator::new(
            ArithmeticConfig::excess3().with_validation(ValidationPolicy::Lenient),
            Arc::new(NoOpTraceHandler),
        )
        .unwrap();

        // Valid inputs never produce malformed groups
        assert_eq!(calc.subtract(100, 1).unwrap().value, 99);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_outcome_serializes() {
        let calc = Calculator::new(
            ArithmeticConfig::excess3().with_trace(true),
            Arc::new(NoOpTraceHandler),
        )
        .unwrap();

        let outcome = calc.subtract(5, 7).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn test_operation_reference() {
        assert_eq!(Operation::Add.reference(2, 3), Some(5));
        assert_eq!(Operation::Subtract.reference(2, 3), Some(-1));
        assert_eq!(Operation::Add.reference(i64::MAX, 1), None);
    }
}
