//! Varia Configuration
//!
//! Defines declaration limits for dynamic sum-type schemas.
//! Configuration specifies constraints only; enforcement is handled by `Schema`.

/// Schema configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantConfig {
    /// Maximum number of cases a schema may declare
    pub max_cases: usize,

    /// Maximum number of payload fields per case
    pub max_arity: usize,
}

impl Default for VariantConfig {
    fn default() -> Self {
        VariantConfig {
            max_cases: 256,
            max_arity: 16,
        }
    }
}

impl VariantConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }
}
