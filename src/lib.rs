// ============================================================================
// Machin Pi Library
// Fixed-point limb arithmetic and Machin's formula for the digits of pi
// ============================================================================

//! # Machin Pi
//!
//! Computes the fractional hex limbs of pi with
//! `pi = 4 * (4 * atan(1/5) - atan(1/239))` over fixed-point fractions
//! made of 64-bit limbs.
//!
//! ## Features
//!
//! - **Runtime precision**: any limb count, from a single limb upward
//! - **Exact leading-zero cache**: O(1) zero tests, zero-range skipping
//! - **128-bit accumulation** for every carry, borrow and remainder
//! - **Dense and zero-skip arithmetic** with bit-identical results
//! - **Event reporting** of series convergence and discarded integer parts
//!
//! ## Example
//!
//! ```rust
//! use machin_pi::prelude::*;
//! use std::sync::Arc;
//!
//! let engine = PiEngineBuilder::new()
//!     .precision(4)
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! let pi = engine.compute().unwrap();
//! assert_eq!(pi.integer_part, 3);
//! assert_eq!(pi.fraction.limbs()[0], 0x243f6a8885a308d3);
//! println!("{}", pi.hex());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{PiConfig, PiDigits, RunId, SeriesStats};
    pub use crate::engine::{
        create_from_config, ArctanSeries, PiEngine, PiEngineBuilder, SeriesOutcome, MACHIN_MAJOR,
        MACHIN_MINOR,
    };
    pub use crate::interfaces::{
        ComputationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler, ScaleStep,
    };
    pub use crate::numeric::{
        ArithmeticMode, FixedPointNumber, HexLimbs, Limb, NumericError, NumericResult,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_pi() {
        let engine = PiEngineBuilder::new()
            .precision(3)
            .build(Arc::new(LoggingEventHandler))
            .unwrap();

        let pi = engine.compute().unwrap();

        assert_eq!(pi.integer_part, 3);
        assert_eq!(pi.fraction.limbs()[..2], [0x243f6a8885a308d3, 0x13198a2e03707344]);
        assert_eq!(pi.fraction.decimal_digits(30), "141592653589793238462643383279");
        assert_eq!(pi.to_string(), "3.14159265358979323846");
    }

    #[test]
    fn test_manual_machin_matches_engine() {
        let series = ArctanSeries::new(4);
        let mut x = series.evaluate(MACHIN_MAJOR).unwrap().value;
        assert_eq!(x.mul4(), 0);
        x -= &series.evaluate(MACHIN_MINOR).unwrap().value;
        assert_eq!(x.mul4(), 3);

        let pi = PiEngine::new(PiConfig::test_width(4), Arc::new(NoOpEventHandler))
            .compute()
            .unwrap();
        assert_eq!(x, pi.fraction);
    }
}
