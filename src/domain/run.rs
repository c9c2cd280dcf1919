// ============================================================================
// Computation Run Model
// Identifiers and results of a pi computation
// ============================================================================

use crate::numeric::{FixedPointNumber, HexLimbs, Limb};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Correlates the events of one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// How one arctangent series converged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeriesStats {
    /// The `x` of atan(1/x)
    pub x: Limb,
    /// Last odd denominator reached before the term underflowed
    pub final_denominator: Limb,
    /// Subtract/add steps applied to the accumulator
    pub terms: u64,
}

// ============================================================================
// Result
// ============================================================================

/// Pi split into its integer part and fixed-point fraction.
#[derive(Debug, Clone)]
pub struct PiDigits {
    pub run_id: RunId,

    /// Integer part carried out of the final scale step (3)
    pub integer_part: Limb,

    /// Fractional limbs of pi
    pub fraction: FixedPointNumber,

    /// atan(1/5) and atan(1/239), in that order
    pub series: [SeriesStats; 2],
}

impl PiDigits {
    /// Number of fraction limbs.
    pub fn precision(&self) -> usize {
        self.fraction.len()
    }

    /// Hex groups of the fraction, four per line.
    pub fn hex(&self) -> HexLimbs<'_> {
        HexLimbs::new(&self.fraction)
    }

    /// Total series steps over both arctangent evaluations.
    pub fn total_terms(&self) -> u64 {
        self.series.iter().map(|s| s.terms).sum()
    }
}

impl fmt::Display for PiDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.integer_part, self.fraction.decimal_digits(20))
    }
}
