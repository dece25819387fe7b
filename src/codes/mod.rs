// ============================================================================
// Digit Codes Module
// Implementations of the DigitCode strategy
// ============================================================================

mod bcd;
mod excess3;

pub use bcd::Bcd;
pub use excess3::Excess3;
