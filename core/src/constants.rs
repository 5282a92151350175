// Engine recurrence: state = state * ENGINE_MULTIPLIER + ENGINE_INCREMENT (mod 2^64).
pub const ENGINE_MULTIPLIER: u64 = 0x9b60_9334_58e1_7d7d;
pub const ENGINE_INCREMENT: u64 = 0xd737_232e_eccd_f7ed;

// Output extraction: shift = BASE_SHIFT - (state >> SHIFT_SELECT_BITS), so 22..=29.
pub const BASE_SHIFT: u64 = 29;
pub const SHIFT_SELECT_BITS: u32 = 61;

// Bit tested by next_bool (value 4).
pub const BOOL_BIT: u32 = 4;

// Subtracting this from an f32 bit pattern lowers the exponent by 32,
// i.e. divides by 2^32 exactly.
pub const UNIT_EXPONENT_OFFSET: u32 = 0x1000_0000;
pub const TWO_POW_32: f32 = 4_294_967_296.0;

// Run driver
pub const DEFAULT_DRAWS: u32 = 1_000_000;
pub const DEFAULT_BUCKETS: u32 = 16;
pub const DEFAULT_BUDGET_MS: u64 = 1_000;
pub const STREAM_HASH_DRAWS: usize = 1024;
// Stopwatch is polled once per this many draws.
pub const TIMEOUT_CHECK_INTERVAL: u32 = 1024;
