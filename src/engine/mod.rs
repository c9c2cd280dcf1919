// ============================================================================
// Engine Module
// Arctangent series and the Machin combination
// ============================================================================

mod arctan;
mod machin;

pub mod factory;

pub use arctan::{ArctanSeries, SeriesOutcome};
pub use factory::{create_from_config, PiEngineBuilder};
pub use machin::{PiEngine, MACHIN_MAJOR, MACHIN_MINOR};
