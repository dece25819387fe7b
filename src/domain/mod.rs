// ============================================================================
// Domain Models Module
// Encoding selector and calculator configuration
// ============================================================================

pub mod config;
pub mod encoding;

pub use config::{ArithmeticConfig, ValidationPolicy};
pub use encoding::Encoding;
