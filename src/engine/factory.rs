// ============================================================================
// Pi Engine Factory
// Creates pi engines with proper configuration
// ============================================================================

use crate::domain::PiConfig;
use crate::engine::PiEngine;
use crate::interfaces::EventHandler;
use crate::numeric::ArithmeticMode;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a pi engine from configuration
///
/// # Arguments
/// * `config` - Precision and arithmetic mode
/// * `event_handler` - Event handler for computation events
///
/// # Returns
/// * `Result<PiEngine, String>` - Configured engine or validation error
///
/// # Example
/// ```
/// use machin_pi::prelude::*;
/// use std::sync::Arc;
///
/// let config = PiConfig::test_width(2);
/// let engine = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// let pi = engine.compute().unwrap();
/// assert_eq!(pi.integer_part, 3);
/// ```
pub fn create_from_config(
    config: PiConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<PiEngine, String> {
    config.validate()?;
    Ok(PiEngine::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating pi engines with fluent API
///
/// # Example
/// ```
/// use machin_pi::prelude::*;
/// use std::sync::Arc;
///
/// let engine = PiEngineBuilder::new()
///     .precision(8)
///     .dense_arithmetic()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(engine.config().precision, 8);
/// ```
pub struct PiEngineBuilder {
    config: PiConfig,
}

impl PiEngineBuilder {
    /// Start from the standard configuration
    pub fn new() -> Self {
        Self {
            config: PiConfig::standard(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: PiConfig) -> Self {
        Self { config }
    }

    /// Set the limb count
    pub fn precision(mut self, precision: usize) -> Self {
        self.config.precision = precision;
        self
    }

    pub fn mode(mut self, mode: ArithmeticMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Touch every limb on every operation
    pub fn dense_arithmetic(self) -> Self {
        self.mode(ArithmeticMode::Dense)
    }

    /// Skip limb ranges known to be zero
    pub fn zero_skip_arithmetic(self) -> Self {
        self.mode(ArithmeticMode::ZeroSkip)
    }

    /// Build the engine
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<PiEngine, String> {
        create_from_config(self.config, event_handler)
    }
}

impl Default for PiEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Preset Builders
// ============================================================================

impl PiEngineBuilder {
    /// 10,000 limbs, zero-skipping arithmetic
    pub fn standard() -> Self {
        Self::from_config(PiConfig::standard())
    }

    /// 10,000 limbs, dense arithmetic
    pub fn reference() -> Self {
        Self::from_config(PiConfig::reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;

    #[test]
    fn test_create_from_config() {
        let engine = create_from_config(PiConfig::test_width(3), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(engine.config().precision, 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = create_from_config(PiConfig::test_width(0), Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let engine = PiEngineBuilder::new()
            .precision(5)
            .dense_arithmetic()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        assert_eq!(engine.config(), &PiConfig::new(5, ArithmeticMode::Dense));
    }

    #[test]
    fn test_preset_builders() {
        let standard = PiEngineBuilder::standard()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(standard.config(), &PiConfig::standard());

        let reference = PiEngineBuilder::reference()
            .zero_skip_arithmetic()
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(reference.config().mode, ArithmeticMode::ZeroSkip);
    }
}
