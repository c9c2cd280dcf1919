// ============================================================================
// Domain Models Module
// Configuration, identifiers and results of a computation
// ============================================================================

pub mod config;
pub mod run;

pub use config::PiConfig;
pub use run::{PiDigits, RunId, SeriesStats};
