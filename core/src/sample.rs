//! Uniform samplers on top of [`Random::next_raw`].
//!
//! Every sampler consumes exactly one raw draw. Integer ranges are mapped
//! with a plain remainder, so ranges that do not divide 2^32 carry a small
//! modulo bias (at most `range / 2^32` relative skew).

use crate::constants::BOOL_BIT;
use crate::engine::Random;
use crate::error::RangeError;
use crate::unit::unit_from_bits;

impl Random {
    /// Returns true iff bit 2 of the raw draw is set.
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.next_raw() & BOOL_BIT == BOOL_BIT
    }

    /// Returns a value in `[0, range)`.
    ///
    /// `range` must be non-zero. Debug builds assert this; release builds
    /// treat zero as the full 2^32 span and return the raw draw.
    #[inline]
    pub fn next_int(&mut self, range: u32) -> u32 {
        debug_assert!(range > 0, "next_int called with an empty range");
        let raw = self.next_raw();
        match range {
            0 => raw,
            _ => raw % range,
        }
    }

    /// Returns a value in `[a, b]` inclusive.
    ///
    /// Requires `a <= b` (debug assertion; release builds wrap). The full
    /// `i32` span is valid and returns the raw draw reinterpreted.
    #[inline]
    pub fn next_int_in(&mut self, a: i32, b: i32) -> i32 {
        debug_assert!(a <= b, "next_int_in called with a > b");
        let span = b.wrapping_sub(a).wrapping_add(1) as u32;
        if span == 0 {
            return self.next_raw() as i32;
        }
        (self.next_int(span) as i32).wrapping_add(a)
    }

    /// Checked [`next_int`](Self::next_int). Consumes no draw on error.
    pub fn try_next_int(&mut self, range: u32) -> Result<u32, RangeError> {
        if range == 0 {
            return Err(RangeError::EmptyRange);
        }
        Ok(self.next_int(range))
    }

    /// Checked [`next_int_in`](Self::next_int_in). Consumes no draw on error.
    pub fn try_next_int_in(&mut self, a: i32, b: i32) -> Result<i32, RangeError> {
        if a > b {
            return Err(RangeError::Inverted { low: a, high: b });
        }
        Ok(self.next_int_in(a, b))
    }

    /// Returns a float in `[0, 1]`; see [`crate::unit`] for the mapping.
    #[inline]
    pub fn next_float(&mut self) -> f32 {
        unit_from_bits(self.next_raw())
    }

    /// Returns a float in `[a, b]`.
    #[inline]
    pub fn next_float_in(&mut self, a: f32, b: f32) -> f32 {
        self.next_float() * (b - a) + a
    }
}
