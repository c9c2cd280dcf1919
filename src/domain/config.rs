// ============================================================================
// Computation Configuration
// Precision and arithmetic mode for a pi computation
// ============================================================================

use crate::numeric::ArithmeticMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for creating a pi engine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PiConfig {
    /// Number of 64-bit fraction limbs carried by every value
    pub precision: usize,

    /// How arithmetic walks the limbs (results are identical either way)
    pub mode: ArithmeticMode,
}

impl PiConfig {
    /// Limb count of the standard run (640,000 fractional bits)
    pub const STANDARD_PRECISION: usize = 10_000;

    /// Upper bound accepted by `validate` (~64 MiB per value)
    pub const MAX_PRECISION: usize = 1 << 23;

    /// Create a new configuration with required parameters
    pub fn new(precision: usize, mode: ArithmeticMode) -> Self {
        Self { precision, mode }
    }

    /// Builder method: Set the limb count
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set the arithmetic mode
    pub fn with_mode(mut self, mode: ArithmeticMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.precision == 0 {
            return Err("Precision must be at least one limb".to_string());
        }

        if self.precision > Self::MAX_PRECISION {
            return Err(format!(
                "Precision {} exceeds maximum of {} limbs",
                self.precision,
                Self::MAX_PRECISION
            ));
        }

        Ok(())
    }

    /// Parse a configuration from JSON, then validate it.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for PiConfig {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl PiConfig {
    /// Standard run
    /// - 10,000 limbs
    /// - Zero-skipping arithmetic
    pub fn standard() -> Self {
        Self::new(Self::STANDARD_PRECISION, ArithmeticMode::ZeroSkip)
    }

    /// Reference run
    /// - 10,000 limbs
    /// - Dense arithmetic (every limb touched, full rescans)
    pub fn reference() -> Self {
        Self::new(Self::STANDARD_PRECISION, ArithmeticMode::Dense)
    }

    /// Small-width run for tests and quick checks
    pub fn test_width(precision: usize) -> Self {
        Self::new(precision, ArithmeticMode::ZeroSkip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = PiConfig::new(16, ArithmeticMode::Dense);
        assert_eq!(config.precision, 16);
        assert_eq!(config.mode, ArithmeticMode::Dense);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PiConfig::standard()
            .with_precision(8)
            .with_mode(ArithmeticMode::Dense);

        assert_eq!(config, PiConfig::new(8, ArithmeticMode::Dense));
    }

    #[test]
    fn test_validation() {
        assert!(PiConfig::test_width(0).validate().is_err());
        assert!(PiConfig::test_width(PiConfig::MAX_PRECISION + 1)
            .validate()
            .is_err());
        assert!(PiConfig::test_width(1).validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(PiConfig::default(), PiConfig::standard());
        assert_eq!(PiConfig::reference().precision, 10_000);
        assert!(matches!(PiConfig::reference().mode, ArithmeticMode::Dense));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = PiConfig::from_json(r#"{"precision": 8, "mode": "Dense"}"#).unwrap();
        assert_eq!(config, PiConfig::new(8, ArithmeticMode::Dense));

        assert!(PiConfig::from_json(r#"{"precision": 0, "mode": "Dense"}"#).is_err());
        assert!(PiConfig::from_json("not json").is_err());
    }
}
