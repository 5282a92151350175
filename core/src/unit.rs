//! Raw draw to unit-interval `f32` mapping.
//!
//! `unit_from_bits` is the exponent-shift form used by the sampler: the raw
//! value is converted numerically to `f32`, then 32 is subtracted from the
//! biased exponent directly in the bit pattern. `unit_by_division` divides by
//! 2^32 instead. Scaling a normal `f32` by a power of two is exact, so both
//! functions return identical bits for every input; pick the division form
//! where bit reinterpretation is unwanted.

use crate::constants::{TWO_POW_32, UNIT_EXPONENT_OFFSET};

/// Maps a raw draw into `[0, 1]` by lowering the exponent of `raw as f32`.
///
/// Zero is special-cased: its bit pattern has no exponent to lower.
/// Values close to `u32::MAX` round up to `2^32` and map to exactly `1.0`.
#[inline]
pub fn unit_from_bits(raw: u32) -> f32 {
    if raw == 0 {
        return 0.0;
    }
    f32::from_bits((raw as f32).to_bits() - UNIT_EXPONENT_OFFSET)
}

/// Maps a raw draw into `[0, 1]` as `raw as f32 / 2^32`.
#[inline]
pub fn unit_by_division(raw: u32) -> f32 {
    raw as f32 / TWO_POW_32
}
