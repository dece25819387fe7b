// ============================================================================
// Arithmetic Configuration
// Encoding, trace and validation settings for one calculator
// ============================================================================

use super::encoding::Encoding;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Validation Policy
// ============================================================================

/// How malformed digit groups are treated when a result is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValidationPolicy {
    /// Fail with `InvalidDigitGroup` on the first malformed group
    #[default]
    Strict,

    /// Substitute 0 for malformed groups and log a warning
    /// - Reproduces the lenient decoding of classroom simulators
    /// - Never applies to encoding or complementing
    Lenient,
}

// ============================================================================
// Complete Configuration
// ============================================================================

/// Configuration for a [`Calculator`](crate::engine::Calculator)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArithmeticConfig {
    /// Digit code used for every operation
    pub encoding: Encoding,

    /// Collect per-digit trace events and hand them to the trace handler
    pub emit_trace: bool,

    /// Decoding policy for malformed groups
    pub validation: ValidationPolicy,

    /// Upper bound on operand magnitude
    /// None means any non-negative i64
    pub max_operand: Option<i64>,
}

impl ArithmeticConfig {
    /// Create a new configuration with tracing off and strict validation
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            emit_trace: false,
            validation: ValidationPolicy::Strict,
            max_operand: None,
        }
    }

    /// Builder method: Enable or disable trace collection
    pub fn with_trace(mut self, emit_trace: bool) -> Self {
        self.emit_trace = emit_trace;
        self
    }

    /// Builder method: Set decoding policy
    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }

    /// Builder method: Limit operand magnitude
    pub fn with_max_operand(mut self, max_operand: i64) -> Self {
        self.max_operand = Some(max_operand);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(max) = self.max_operand {
            if max < 0 {
                return Err("Maximum operand cannot be negative".to_string());
            }
        }

        Ok(())
    }
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self::new(Encoding::Bcd)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ArithmeticConfig {
    /// BCD adder/subtractor
    pub fn bcd() -> Self {
        Self::new(Encoding::Bcd)
    }

    /// Excess-3 adder/subtractor
    pub fn excess3() -> Self {
        Self::new(Encoding::Excess3)
    }

    /// Four-digit classroom setup
    /// - Operands limited to 0..=9999
    /// - Full per-digit trace
    pub fn classroom(encoding: Encoding) -> Self {
        Self::new(encoding).with_trace(true).with_max_operand(9999)
    }
}
