use crate::constants::{BASE_SHIFT, ENGINE_INCREMENT, ENGINE_MULTIPLIER, SHIFT_SELECT_BITS};

/// Seedable 64-bit affine generator with a state-dependent output shift.
///
/// Each draw advances the state as `state * M + A (mod 2^64)` and returns
/// 32 bits taken from a window whose position depends on the top three
/// state bits. Not cryptographically secure.
///
/// There is no shared default instance: construct one per use site
/// (one per thread when running in parallel).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Random {
    state: u64,
}

impl Random {
    /// Creates an engine from a signed seed. Negative seeds are
    /// sign-extended, so `-1` starts from `u64::MAX`.
    pub fn new(seed: i32) -> Self {
        Self { state: seed as i64 as u64 }
    }

    /// Creates an engine positioned at an exact internal state.
    pub fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Current internal state.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the state and returns one raw 32-bit draw.
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(ENGINE_MULTIPLIER)
            .wrapping_add(ENGINE_INCREMENT);
        let shift = BASE_SHIFT - (self.state >> SHIFT_SELECT_BITS);
        (self.state >> shift) as u32
    }
}

#[cfg(feature = "rand-core")]
impl rand_core::RngCore for Random {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
