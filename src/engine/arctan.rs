// ============================================================================
// Arctangent Series
// atan(1/x) = 1/x - 1/(3x^3) + 1/(5x^5) - ... in fixed point
// ============================================================================

use crate::domain::SeriesStats;
use crate::numeric::{ArithmeticMode, FixedPointNumber, Limb, NumericError, NumericResult};

/// Result of one series evaluation
#[derive(Debug, Clone)]
pub struct SeriesOutcome {
    /// Sum of the series, truncated to the configured limb count
    pub value: FixedPointNumber,
    pub stats: SeriesStats,
}

/// Evaluates atan(1/x) for integer `x >= 2`.
///
/// The loop runs until the running term underflows the precision; there
/// is no separate tolerance. Each pass divides the term by `x^2`, so the
/// number of steps grows linearly with the limb count.
#[derive(Debug, Clone, Copy)]
pub struct ArctanSeries {
    precision: usize,
    mode: ArithmeticMode,
}

impl ArctanSeries {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            mode: ArithmeticMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ArithmeticMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn mode(&self) -> ArithmeticMode {
        self.mode
    }

    /// Sum atan(1/x).
    ///
    /// # Errors
    /// - `InvalidDivisor` if `x < 2`
    /// - `DivisorOverflow` if `x * x` does not fit in a limb
    pub fn evaluate(&self, x: Limb) -> NumericResult<SeriesOutcome> {
        if x < 2 {
            return Err(NumericError::InvalidDivisor);
        }
        let x2 = x.checked_mul(x).ok_or(NumericError::DivisorOverflow)?;

        tracing::debug!("atan(1/{}) series started at {} limbs", x, self.precision);

        let mut result = FixedPointNumber::with_mode(self.precision, self.mode);
        result.set_inv(x);
        let mut term = result.clone();
        let mut scratch = FixedPointNumber::with_mode(self.precision, self.mode);
        let mut denom: Limb = 1;
        let mut terms: u64 = 0;

        while !term.is_zero() {
            denom += 2;
            term /= x2;
            scratch.set_to_div(&term, denom);
            result -= &scratch;
            terms += 1;

            denom += 2;
            term /= x2;
            scratch.set_to_div(&term, denom);
            result += &scratch;
            terms += 1;
        }

        tracing::debug!(
            "atan(1/{}) series converged: denominator {}, {} terms",
            x,
            denom,
            terms
        );

        Ok(SeriesOutcome {
            value: result,
            stats: SeriesStats {
                x,
                final_denominator: denom,
                terms,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_and_oversized_x() {
        let series = ArctanSeries::new(2);
        assert_eq!(series.evaluate(0).unwrap_err(), NumericError::InvalidDivisor);
        assert_eq!(series.evaluate(1).unwrap_err(), NumericError::InvalidDivisor);
        assert_eq!(
            series.evaluate(1 << 32).unwrap_err(),
            NumericError::DivisorOverflow
        );
    }

    #[test]
    fn test_atan_inv_5_digits() {
        let outcome = ArctanSeries::new(2).evaluate(5).unwrap();
        assert_eq!(outcome.value.decimal_digits(24), "197395559849880758370049");
    }

    #[test]
    fn test_atan_inv_239_digits() {
        let outcome = ArctanSeries::new(2).evaluate(239).unwrap();
        assert_eq!(outcome.value.decimal_digits(24), "004184076002074723864538");
    }

    #[test]
    fn test_termination_stats() {
        let a = ArctanSeries::new(8).evaluate(5).unwrap();
        assert_eq!(a.stats.final_denominator, 221);
        assert_eq!(a.stats.terms, 110);

        let b = ArctanSeries::new(8).evaluate(239).unwrap();
        assert_eq!(b.stats.final_denominator, 65);
        assert_eq!(b.stats.terms, 32);

        // Two steps per pass, each adding 2 to the denominator
        assert_eq!(a.stats.terms, (a.stats.final_denominator - 1) / 2);
    }

    #[test]
    fn test_zero_precision_terminates_immediately() {
        let outcome = ArctanSeries::new(0).evaluate(5).unwrap();
        assert!(outcome.value.is_zero());
        assert_eq!(outcome.stats.terms, 0);
        assert_eq!(outcome.stats.final_denominator, 1);
    }

    #[test]
    fn test_modes_agree() {
        let dense = ArctanSeries::new(6)
            .with_mode(ArithmeticMode::Dense)
            .evaluate(7)
            .unwrap();
        let skip = ArctanSeries::new(6).evaluate(7).unwrap();
        assert_eq!(dense.value, skip.value);
        assert_eq!(dense.stats, skip.stats);
    }
}
