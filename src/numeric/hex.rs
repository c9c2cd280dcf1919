// ============================================================================
// Hex Limb Formatting
// Renders a fixed-point fraction as groups of 16 hex digits
// ============================================================================

use super::fixed_point::FixedPointNumber;
use super::limbs::Limb;
use std::fmt;

/// Groups written per line by default.
pub const DEFAULT_GROUPS_PER_LINE: usize = 4;

/// Display adapter printing each limb as `{:016x}` followed by a space,
/// with a line break after every `groups_per_line` limbs.
///
/// ```
/// use machin_pi::numeric::{FixedPointNumber, HexLimbs};
///
/// let x = FixedPointNumber::from_limbs(vec![0x243f6a8885a308d3, 0x13198a2e03707344]);
/// let text = HexLimbs::new(&x).to_string();
/// assert_eq!(text, "243f6a8885a308d3 13198a2e03707344 ");
/// ```
#[derive(Clone, Copy)]
pub struct HexLimbs<'a> {
    limbs: &'a [Limb],
    groups_per_line: usize,
}

impl<'a> HexLimbs<'a> {
    pub fn new(number: &'a FixedPointNumber) -> Self {
        Self::from_slice(number.limbs())
    }

    pub fn from_slice(limbs: &'a [Limb]) -> Self {
        Self {
            limbs,
            groups_per_line: DEFAULT_GROUPS_PER_LINE,
        }
    }

    /// Set the line width in groups; 0 disables line breaks.
    pub fn with_groups_per_line(mut self, groups: usize) -> Self {
        self.groups_per_line = groups;
        self
    }
}

impl fmt::Display for HexLimbs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, limb) in self.limbs.iter().enumerate() {
            write!(f, "{:016x} ", limb)?;
            if self.groups_per_line > 0 && i % self.groups_per_line == self.groups_per_line - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
