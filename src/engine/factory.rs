// ============================================================================
// Calculator Factory
// Creates calculators with proper configuration
// ============================================================================

use crate::domain::{ArithmeticConfig, Encoding, ValidationPolicy};
use crate::engine::{Calculator, Outcome};
use crate::interfaces::TraceHandler;
use crate::numeric::ArithResult;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Encoding, trace and validation settings
/// * `trace_handler` - Receives trace events when tracing is enabled
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
pub fn create_from_config(
    config: ArithmeticConfig,
    trace_handler: Arc<dyn TraceHandler>,
) -> Result<Calculator, String> {
    tracing::debug!(
        encoding = %config.encoding,
        emit_trace = config.emit_trace,
        validation = ?config.validation,
        "creating calculator"
    );
    Calculator::new(config, trace_handler)
}

/// One-shot addition without tracing
pub fn add_numbers(lhs: i64, rhs: i64, encoding: Encoding) -> ArithResult<Outcome> {
    Calculator::for_encoding(encoding).add(lhs, rhs)
}

/// One-shot subtraction without tracing
pub fn subtract_numbers(lhs: i64, rhs: i64, encoding: Encoding) -> ArithResult<Outcome> {
    Calculator::for_encoding(encoding).subtract(lhs, rhs)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Fluent builder for calculators
///
/// # Example
/// ```ignore
/// let calc = CalculatorBuilder::new()
///     .excess3()
///     .trace(true)
///     .build(Arc::new(LoggingTraceHandler))?;
/// ```
pub struct CalculatorBuilder {
    config: ArithmeticConfig,
}

impl CalculatorBuilder {
    /// Create a new builder (BCD, no trace, strict)
    pub fn new() -> Self {
        Self {
            config: ArithmeticConfig::default(),
        }
    }

    // ========================================================================
    // Encoding Selection
    // ========================================================================

    /// Use BCD
    pub fn bcd(mut self) -> Self {
        self.config.encoding = Encoding::Bcd;
        self
    }

    /// Use Excess-3
    pub fn excess3(mut self) -> Self {
        self.config.encoding = Encoding::Excess3;
        self
    }

    /// Use the given encoding
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Collect trace events
    pub fn trace(mut self, emit_trace: bool) -> Self {
        self.config.emit_trace = emit_trace;
        self
    }

    /// Substitute 0 for malformed groups when decoding
    pub fn lenient(mut self) -> Self {
        self.config.validation = ValidationPolicy::Lenient;
        self
    }

    /// Limit operand magnitude
    pub fn max_operand(mut self, max_operand: i64) -> Self {
        self.config.max_operand = Some(max_operand);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply four-digit classroom configuration
    pub fn classroom(encoding: Encoding) -> Self {
        Self {
            config: ArithmeticConfig::classroom(encoding),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, trace_handler: Arc<dyn TraceHandler>) -> Result<Calculator, String> {
        create_from_config(self.config, trace_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ArithmeticConfig {
        &self.config
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
