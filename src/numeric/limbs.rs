// ============================================================================
// Limb Vector
// Raw fixed-length storage of unsigned limbs, most significant first
// ============================================================================

use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// One unit of the fixed-point representation.
pub type Limb = u64;

/// Accumulator wide enough for `limb * small + limb` without overflow.
pub type DoubleLimb = u128;

/// Width of a limb in bits.
pub const LIMB_BITS: u32 = Limb::BITS;

/// Limb counts up to this size are stored inline without heap allocation.
pub const INLINE_LIMBS: usize = 8;

/// Fixed-length sequence of limbs.
///
/// Index 0 is the most significant limb. The vector carries no numeric
/// semantics of its own; [`FixedPointNumber`](super::FixedPointNumber)
/// gives it meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LimbVector {
    limbs: SmallVec<[Limb; INLINE_LIMBS]>,
}

impl LimbVector {
    /// Create a zero-filled vector of `len` limbs.
    pub fn zeroed(len: usize) -> Self {
        Self {
            limbs: SmallVec::from_elem(0, len),
        }
    }

    /// Wrap existing limbs.
    pub fn from_vec(limbs: Vec<Limb>) -> Self {
        Self {
            limbs: SmallVec::from_vec(limbs),
        }
    }

    /// Number of limbs.
    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Limb] {
        &self.limbs
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        &mut self.limbs
    }

    /// Zero every limb in `range`.
    #[inline]
    pub fn clear_range(&mut self, range: std::ops::Range<usize>) {
        self.limbs[range].fill(0);
    }

    /// Index of the first nonzero limb at or after `from`, or `len()` if none.
    #[inline]
    pub fn first_nonzero_from(&self, from: usize) -> usize {
        let from = from.min(self.len());
        self.limbs[from..]
            .iter()
            .position(|&limb| limb != 0)
            .map_or(self.len(), |offset| from + offset)
    }

    pub fn into_vec(self) -> Vec<Limb> {
        self.limbs.into_vec()
    }
}

impl Index<usize> for LimbVector {
    type Output = Limb;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.limbs[index]
    }
}

impl IndexMut<usize> for LimbVector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.limbs[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed() {
        let v = LimbVector::zeroed(5);
        assert_eq!(v.len(), 5);
        assert!(v.as_slice().iter().all(|&l| l == 0));
        assert_eq!(v.first_nonzero_from(0), 5);
    }

    #[test]
    fn test_first_nonzero_from() {
        let v = LimbVector::from_vec(vec![0, 0, 7, 0, 9]);
        assert_eq!(v.first_nonzero_from(0), 2);
        assert_eq!(v.first_nonzero_from(2), 2);
        assert_eq!(v.first_nonzero_from(3), 4);
        assert_eq!(v.first_nonzero_from(5), 5);
        // Past the end clamps instead of panicking
        assert_eq!(v.first_nonzero_from(9), 5);
    }

    #[test]
    fn test_clear_range() {
        let mut v = LimbVector::from_vec(vec![1, 2, 3, 4]);
        v.clear_range(1..3);
        assert_eq!(v.as_slice(), &[1, 0, 0, 4]);
    }

    #[test]
    fn test_large_vector_spills_to_heap() {
        let mut v = LimbVector::zeroed(INLINE_LIMBS * 4);
        v[INLINE_LIMBS * 4 - 1] = 1;
        assert_eq!(v.first_nonzero_from(0), INLINE_LIMBS * 4 - 1);
        assert_eq!(v.into_vec().len(), INLINE_LIMBS * 4);
    }
}
