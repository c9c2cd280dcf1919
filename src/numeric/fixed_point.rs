// ============================================================================
// Fixed-Point Number
// Fraction in [0, 1) over a limb vector with a cached leading-zero count
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::hex::HexLimbs;
use super::limbs::{DoubleLimb, Limb, LimbVector, LIMB_BITS};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{AddAssign, DivAssign, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal places carried by [`FixedPointNumber::to_decimal`].
const DECIMAL_SCALE: u32 = 28;

/// Selects how the arithmetic primitives walk the limbs.
///
/// Both modes produce identical limbs and an identical leading-zero cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticMode {
    /// Every primitive touches all limbs and rescans from index 0
    Dense,
    /// Primitives skip limb ranges known to be zero
    #[default]
    ZeroSkip,
}

/// Fixed-point fraction `Σ limb[i] * 2^(-64 * (i + 1))`.
///
/// The number keeps `zeros`, the exact count of leading zero limbs:
/// `limbs[0..zeros)` are zero and either `zeros == len` or
/// `limbs[zeros] != 0`. Every mutator refreshes it through `normalize`.
///
/// # Example
/// ```
/// use machin_pi::numeric::FixedPointNumber;
///
/// let mut x = FixedPointNumber::zero(4);
/// x.set_inv(4); // 0.25
/// let integer_part = x.mul4();
/// assert_eq!(integer_part, 1);
/// assert!(x.is_zero());
/// ```
#[derive(Clone)]
pub struct FixedPointNumber {
    limbs: LimbVector,
    zeros: usize,
    mode: ArithmeticMode,
}

impl FixedPointNumber {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero value of `len` limbs using zero-skipping arithmetic.
    pub fn zero(len: usize) -> Self {
        Self::with_mode(len, ArithmeticMode::default())
    }

    /// Zero value of `len` limbs using the given arithmetic mode.
    pub fn with_mode(len: usize, mode: ArithmeticMode) -> Self {
        Self {
            limbs: LimbVector::zeroed(len),
            zeros: len,
            mode,
        }
    }

    /// Build from raw limbs, most significant first.
    pub fn from_limbs(limbs: Vec<Limb>) -> Self {
        Self::from_limbs_with_mode(limbs, ArithmeticMode::default())
    }

    pub fn from_limbs_with_mode(limbs: Vec<Limb>, mode: ArithmeticMode) -> Self {
        let mut number = Self {
            limbs: LimbVector::from_vec(limbs),
            zeros: 0,
            mode,
        };
        number.normalize(0);
        number
    }

    /// Same value, different arithmetic mode.
    pub fn in_mode(mut self, mode: ArithmeticMode) -> Self {
        self.mode = mode;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of limbs (the precision).
    #[inline]
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    #[inline]
    pub fn mode(&self) -> ArithmeticMode {
        self.mode
    }

    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        self.limbs.as_slice()
    }

    /// Cached count of leading zero limbs.
    #[inline]
    pub fn leading_zero_limbs(&self) -> usize {
        self.zeros
    }

    /// O(1) zero test backed by the leading-zero cache.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.zeros == self.len()
    }

    pub fn into_limbs(self) -> Vec<Limb> {
        self.limbs.into_vec()
    }

    #[inline]
    fn skips_zeros(&self) -> bool {
        self.mode == ArithmeticMode::ZeroSkip
    }

    /// Refresh the leading-zero cache.
    ///
    /// Caller guarantees `limbs[0..from)` are zero. Dense mode ignores the
    /// hint and rescans the whole vector.
    #[inline]
    fn normalize(&mut self, from: usize) {
        let from = if self.skips_zeros() { from } else { 0 };
        debug_assert!(self.limbs.as_slice()[..from.min(self.len())]
            .iter()
            .all(|&limb| limb == 0));
        self.zeros = self.limbs.first_nonzero_from(from);
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    pub fn set_zero(&mut self) {
        let len = self.len();
        self.limbs.clear_range(0..len);
        self.zeros = len;
    }

    /// Set to the base-2^64 expansion of `1 / x`.
    ///
    /// `x == 1` leaves zero: the value 1.0 has no fractional limbs.
    ///
    /// # Panics
    /// Panics if `x == 0`.
    pub fn set_inv(&mut self, x: Limb) {
        assert!(x != 0, "FixedPointNumber reciprocal of zero");
        let x = DoubleLimb::from(x);
        let len = self.len();
        let skip = self.skips_zeros();
        let limbs = self.limbs.as_mut_slice();
        let mut rem: DoubleLimb = 1;
        for i in 0..len {
            if skip && rem == 0 {
                // Exact expansion: the tail is zero
                limbs[i..].fill(0);
                break;
            }
            let nom = rem << LIMB_BITS;
            limbs[i] = (nom / x) as Limb;
            rem = nom % x;
        }
        self.normalize(0);
    }

    /// Checked [`set_inv`](Self::set_inv).
    ///
    /// # Errors
    /// - `DivisionByZero` for `x == 0`
    /// - `InvalidDivisor` for `x == 1`
    pub fn try_set_inv(&mut self, x: Limb) -> NumericResult<()> {
        match x {
            0 => Err(NumericError::DivisionByZero),
            1 => Err(NumericError::InvalidDivisor),
            _ => {
                self.set_inv(x);
                Ok(())
            },
        }
    }

    /// Multiply in place by 4, returning the integer part carried out of
    /// the most significant limb (0..=3).
    ///
    /// The limbs keep only the fraction, so the value becomes `4v mod 1`.
    #[inline]
    pub fn mul4(&mut self) -> Limb {
        self.scale_by(4)
    }

    /// Multiply by a small factor and return the carry out of limb 0.
    fn scale_by(&mut self, factor: Limb) -> Limb {
        let start = if self.skips_zeros() { self.zeros } else { 0 };
        let factor = DoubleLimb::from(factor);
        let limbs = self.limbs.as_mut_slice();
        let mut carry: DoubleLimb = 0;
        for limb in limbs[start..].iter_mut().rev() {
            carry += factor * DoubleLimb::from(*limb);
            *limb = carry as Limb;
            carry >>= LIMB_BITS;
        }
        // carry < factor, so it fits the zero limb just above the skipped range
        let overflow = if start > 0 {
            limbs[start - 1] = carry as Limb;
            0
        } else {
            carry as Limb
        };
        self.normalize(start.saturating_sub(1));
        overflow
    }

    /// Set `self = x / d`.
    ///
    /// # Panics
    /// Panics if `d == 0` or the operands differ in length.
    pub fn set_to_div(&mut self, x: &Self, d: Limb) {
        assert_eq!(self.len(), x.len(), "FixedPointNumber precision mismatch");
        assert!(d != 0, "FixedPointNumber division by zero");

        let start = if self.skips_zeros() { x.zeros } else { 0 };
        if self.zeros < start {
            self.limbs.clear_range(self.zeros..start);
        }

        let d = DoubleLimb::from(d);
        let src = x.limbs.as_slice();
        let dst = self.limbs.as_mut_slice();
        let mut rem: DoubleLimb = 0;
        for i in start..src.len() {
            let num = (rem << LIMB_BITS) | DoubleLimb::from(src[i]);
            dst[i] = (num / d) as Limb;
            rem = num % d;
        }
        self.normalize(start);
    }

    /// Checked [`set_to_div`](Self::set_to_div).
    pub fn try_set_to_div(&mut self, x: &Self, d: Limb) -> NumericResult<()> {
        if self.len() != x.len() {
            return Err(NumericError::PrecisionMismatch);
        }
        if d == 0 {
            return Err(NumericError::DivisionByZero);
        }
        self.set_to_div(x, d);
        Ok(())
    }

    fn add_limbs(&mut self, rhs: &Self) {
        assert_eq!(self.len(), rhs.len(), "FixedPointNumber precision mismatch");

        let (stop, hint) = if self.skips_zeros() {
            // Below min(zeros) both operands are zero; a carry reaches at
            // most one limb further up.
            let common = self.zeros.min(rhs.zeros);
            (rhs.zeros, common.saturating_sub(1))
        } else {
            (0, 0)
        };

        let a = self.limbs.as_mut_slice();
        let b = rhs.limbs.as_slice();
        let mut carry: DoubleLimb = 0;
        for i in (stop..a.len()).rev() {
            let res = carry + DoubleLimb::from(a[i]) + DoubleLimb::from(b[i]);
            a[i] = res as Limb;
            carry = res >> LIMB_BITS;
        }
        // rhs is zero above `stop`; only the carry remains to ripple
        let mut i = stop;
        while carry != 0 && i > 0 {
            i -= 1;
            let res = carry + DoubleLimb::from(a[i]);
            a[i] = res as Limb;
            carry = res >> LIMB_BITS;
        }
        self.normalize(hint);
    }

    fn sub_limbs(&mut self, rhs: &Self) {
        assert_eq!(self.len(), rhs.len(), "FixedPointNumber precision mismatch");

        let skip = self.skips_zeros();
        let old_zeros = self.zeros;
        let a = self.limbs.as_mut_slice();
        let b = rhs.limbs.as_slice();

        // Two's complement: a + !b + 1, the +1 enters as the initial carry
        let mut carry: DoubleLimb = 1;
        let mut scan_from = 0;
        for i in (0..a.len()).rev() {
            if skip && carry == 1 && i < rhs.zeros {
                // Remaining rhs limbs are zero and nothing is borrowed:
                // limbs[0..=i] stay as they are.
                scan_from = old_zeros.min(i + 1);
                break;
            }
            let res = carry + DoubleLimb::from(a[i]) + DoubleLimb::from(!b[i]);
            a[i] = res as Limb;
            carry = res >> LIMB_BITS;
        }
        self.normalize(scan_from);
    }

    /// Checked addition. Carry out of the top limb still wraps.
    pub fn try_add_assign(&mut self, rhs: &Self) -> NumericResult<()> {
        if self.len() != rhs.len() {
            return Err(NumericError::PrecisionMismatch);
        }
        self.add_limbs(rhs);
        Ok(())
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// - `PrecisionMismatch` if the widths differ
    /// - `Underflow` if `rhs > self`; `self` is left untouched
    pub fn try_sub_assign(&mut self, rhs: &Self) -> NumericResult<()> {
        if self.len() != rhs.len() {
            return Err(NumericError::PrecisionMismatch);
        }
        if *self < *rhs {
            return Err(NumericError::Underflow);
        }
        self.sub_limbs(rhs);
        Ok(())
    }

    fn div_limbs(&mut self, d: Limb) {
        let start = if self.skips_zeros() { self.zeros } else { 0 };
        let d = DoubleLimb::from(d);
        let mut rem: DoubleLimb = 0;
        for limb in &mut self.limbs.as_mut_slice()[start..] {
            let num = (rem << LIMB_BITS) | DoubleLimb::from(*limb);
            *limb = (num / d) as Limb;
            rem = num % d;
        }
        self.normalize(start);
    }

    /// Checked in-place division by a limb-sized integer.
    pub fn try_div_assign(&mut self, d: Limb) -> NumericResult<()> {
        if d == 0 {
            return Err(NumericError::DivisionByZero);
        }
        self.div_limbs(d);
        Ok(())
    }

    // ========================================================================
    // Decimal View
    // ========================================================================

    /// First `count` decimal digits of the fraction (truncated).
    pub fn decimal_digits(&self, count: usize) -> String {
        let mut work = self.clone();
        let mut digits = String::with_capacity(count);
        for _ in 0..count {
            // scale_by(10) carries out exactly one decimal digit
            let digit = work.scale_by(10) as u8;
            digits.push(char::from(b'0' + digit));
        }
        digits
    }

    /// The fraction truncated to 28 decimal places.
    pub fn to_decimal(&self) -> Decimal {
        let mut work = self.clone();
        let mut mantissa: i128 = 0;
        for _ in 0..DECIMAL_SCALE {
            mantissa = mantissa * 10 + work.scale_by(10) as i128;
        }
        Decimal::from_i128_with_scale(mantissa, DECIMAL_SCALE)
    }
}

// ============================================================================
// Operators
// ============================================================================

// Unchecked forms: wrapping on violated preconditions, panics on a width
// mismatch or a zero divisor.
impl AddAssign<&FixedPointNumber> for FixedPointNumber {
    #[inline]
    fn add_assign(&mut self, rhs: &FixedPointNumber) {
        self.add_limbs(rhs);
    }
}

impl SubAssign<&FixedPointNumber> for FixedPointNumber {
    #[inline]
    fn sub_assign(&mut self, rhs: &FixedPointNumber) {
        self.sub_limbs(rhs);
    }
}

impl DivAssign<Limb> for FixedPointNumber {
    #[inline]
    fn div_assign(&mut self, d: Limb) {
        assert!(d != 0, "FixedPointNumber division by zero");
        self.div_limbs(d);
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for FixedPointNumber {
    fn eq(&self, other: &Self) -> bool {
        self.zeros == other.zeros && self.limbs == other.limbs
    }
}

impl Eq for FixedPointNumber {}

impl PartialOrd for FixedPointNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by value for equal widths; more leading zero limbs means smaller.
impl Ord for FixedPointNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.len() == other.len() && self.zeros != other.zeros {
            return other.zeros.cmp(&self.zeros);
        }
        self.limbs.as_slice().cmp(other.limbs.as_slice())
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for FixedPointNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedPointNumber")
            .field("len", &self.len())
            .field("zeros", &self.zeros)
            .field("mode", &self.mode)
            .field("head", &&self.limbs()[..self.len().min(4)])
            .finish()
    }
}

impl fmt::Display for FixedPointNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&HexLimbs::new(self), f)
    }
}

// ============================================================================
// Tests
// ============================================================================
