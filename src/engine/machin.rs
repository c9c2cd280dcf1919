// ============================================================================
// Pi Engine
// pi = 4 * (4 * atan(1/5) - atan(1/239))
// ============================================================================

use crate::domain::{PiConfig, PiDigits, RunId};
use crate::engine::arctan::{ArctanSeries, SeriesOutcome};
use crate::interfaces::{ComputationEvent, EventHandler, ScaleStep};
use crate::numeric::{Limb, NumericResult};
use chrono::Utc;
use std::sync::Arc;

/// Denominator of the dominant Machin term
pub const MACHIN_MAJOR: Limb = 5;

/// Denominator of the correction Machin term
pub const MACHIN_MINOR: Limb = 239;

/// Computes pi to a fixed limb precision
pub struct PiEngine {
    config: PiConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl PiEngine {
    /// Create a new pi engine
    pub fn new(config: PiConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    pub fn config(&self) -> &PiConfig {
        &self.config
    }

    /// Run Machin's formula.
    ///
    /// Both scale steps wrap at 1.0; the integer part carried out of the
    /// second one is returned as `PiDigits::integer_part`.
    pub fn compute(&self) -> NumericResult<PiDigits> {
        let run_id = RunId::new();
        let series = ArctanSeries::new(self.config.precision).with_mode(self.config.mode);

        let major = self.evaluate(&series, run_id, MACHIN_MAJOR)?;
        let mut pi = major.value;
        let inner = pi.mul4();
        self.report_carry(run_id, ScaleStep::Inner, inner);

        let minor = self.evaluate(&series, run_id, MACHIN_MINOR)?;
        pi -= &minor.value;
        let integer_part = pi.mul4();
        self.report_carry(run_id, ScaleStep::Outer, integer_part);

        tracing::info!(
            "Computed pi to {} limbs ({} series terms)",
            self.config.precision,
            major.stats.terms + minor.stats.terms
        );
        self.event_handler
            .on_event(ComputationEvent::ComputationFinished {
                run_id,
                integer_part,
                precision: self.config.precision,
                timestamp: Utc::now(),
            });

        Ok(PiDigits {
            run_id,
            integer_part,
            fraction: pi,
            series: [major.stats, minor.stats],
        })
    }

    fn evaluate(
        &self,
        series: &ArctanSeries,
        run_id: RunId,
        x: Limb,
    ) -> NumericResult<SeriesOutcome> {
        self.event_handler.on_event(ComputationEvent::SeriesStarted {
            run_id,
            x,
            precision: series.precision(),
            timestamp: Utc::now(),
        });

        let outcome = series.evaluate(x)?;

        self.event_handler
            .on_event(ComputationEvent::SeriesConverged {
                run_id,
                x,
                final_denominator: outcome.stats.final_denominator,
                terms: outcome.stats.terms,
                timestamp: Utc::now(),
            });
        Ok(outcome)
    }

    fn report_carry(&self, run_id: RunId, step: ScaleStep, integer_part: Limb) {
        if integer_part == 0 {
            return;
        }
        tracing::debug!("{:?} scale step carried out integer part {}", step, integer_part);
        self.event_handler
            .on_event(ComputationEvent::IntegerPartDiscarded {
                run_id,
                step,
                integer_part,
                timestamp: Utc::now(),
            });
    }
}
