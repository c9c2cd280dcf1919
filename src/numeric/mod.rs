// ============================================================================
// Numeric Module
// Fixed-point fractions over 64-bit limbs
// ============================================================================
//
// This module provides:
// - LimbVector: raw limb storage, most significant limb first
// - FixedPointNumber: fraction in [0, 1) with an exact leading-zero cache
// - HexLimbs: hex group formatting of a fraction
// - NumericError: Error types for the checked operations
//
// Design principles:
// - 128-bit accumulators for every carry, borrow and remainder
// - Integer parts are never stored; they are carried out and reported
// - Dense and zero-skipping arithmetic share one implementation

mod errors;
mod fixed_point;
mod hex;
mod limbs;

pub use errors::{NumericError, NumericResult};
pub use fixed_point::{ArithmeticMode, FixedPointNumber};
pub use hex::{HexLimbs, DEFAULT_GROUPS_PER_LINE};
pub use limbs::{DoubleLimb, Limb, LimbVector, INLINE_LIMBS, LIMB_BITS};
