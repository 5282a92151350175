use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BUCKETS, DEFAULT_BUDGET_MS, DEFAULT_DRAWS};

pub type Seed = i32;

// ── Config ──────────────────────────────────────────────────

/// A sampling session: one engine seeded with `seed`, driven for up to
/// `draws` rounds or until `budget_ms` elapses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub seed: Seed,
    #[serde(default = "default_draws")]
    pub draws: u32,
    /// Integer draws are bucketed into `[0, buckets)`.
    #[serde(default = "default_buckets")]
    pub buckets: u32,
    #[serde(default = "default_budget_ms")]
    pub budget_ms: u64,
    /// Inclusive bounds for float draws; `[0, 1]` when absent.
    #[serde(default)]
    pub float_range: Option<[f32; 2]>,
    /// Sequence shuffled once the draws are done.
    #[serde(default)]
    pub shuffle: Vec<i64>,
}

fn default_draws() -> u32 {
    DEFAULT_DRAWS
}

fn default_buckets() -> u32 {
    DEFAULT_BUCKETS
}

fn default_budget_ms() -> u64 {
    DEFAULT_BUDGET_MS
}

// ── Report ──────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub seed: Seed,
    /// Rounds completed before the draw limit or the time budget.
    pub draws_done: u32,
    pub timed_out: bool,
    pub bucket_counts: Vec<u64>,
    /// Pearson chi-square of `bucket_counts` against a uniform expectation.
    pub chi_square: f64,
    /// Share of `next_bool` draws that came up true.
    pub true_ratio: f64,
    pub float_min: Option<f32>,
    pub float_max: Option<f32>,
    pub shuffled: Vec<i64>,
    /// SHA-256 of the seed.
    pub seed_hash: [u8; 32],
    /// SHA-256 of the first raw draws of a fresh engine with this seed.
    pub stream_hash: [u8; 32],
}
