use crate::constants::{
    DEFAULT_BUCKETS, DEFAULT_BUDGET_MS, DEFAULT_DRAWS, STREAM_HASH_DRAWS, TIMEOUT_CHECK_INTERVAL,
};
use crate::engine::Random;
use crate::error::RangeError;
use crate::hash::{hash_seed, hash_stream};
use crate::shuffle::random_shuffle;
use crate::stopwatch::Stopwatch;
use crate::types::{RunConfig, RunReport, Seed};

/// Default session: a million rounds over 16 buckets within one second.
pub fn default_config(seed: Seed) -> RunConfig {
    RunConfig {
        seed,
        draws: DEFAULT_DRAWS,
        buckets: DEFAULT_BUCKETS,
        budget_ms: DEFAULT_BUDGET_MS,
        float_range: None,
        shuffle: Vec::new(),
    }
}

/// Pearson chi-square statistic of `counts` against a uniform expectation.
/// Returns 0.0 for empty input.
pub fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return 0.0;
    }
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Runs one sampling session.
///
/// Each round draws a bucket index, a bool and a float, in that order, from
/// a single engine. The stopwatch is polled every
/// [`TIMEOUT_CHECK_INTERVAL`] rounds; the shuffle then continues from the
/// same engine. With a budget that never elapses the report is a pure
/// function of the config.
pub fn run(config: &RunConfig) -> Result<RunReport, RangeError> {
    if config.buckets == 0 {
        return Err(RangeError::EmptyRange);
    }
    let [low, high] = config.float_range.unwrap_or([0.0, 1.0]);
    if !(low.is_finite() && high.is_finite() && low <= high) {
        return Err(RangeError::InvalidFloatRange { low, high });
    }

    log::debug!(
        "run start: seed={} draws={} buckets={} budget_ms={}",
        config.seed,
        config.draws,
        config.buckets,
        config.budget_ms
    );

    let mut rng = Random::new(config.seed);
    let watch = Stopwatch::new(config.budget_ms);
    let mut bucket_counts = vec![0u64; config.buckets as usize];
    let mut trues = 0u64;
    let mut float_min: Option<f32> = None;
    let mut float_max: Option<f32> = None;
    let mut draws_done = 0u32;
    let mut timed_out = false;

    while draws_done < config.draws {
        if draws_done % TIMEOUT_CHECK_INTERVAL == 0 && watch.timeout() {
            timed_out = true;
            break;
        }
        bucket_counts[rng.next_int(config.buckets) as usize] += 1;
        if rng.next_bool() {
            trues += 1;
        }
        let f = rng.next_float_in(low, high);
        float_min = Some(float_min.map_or(f, |m| m.min(f)));
        float_max = Some(float_max.map_or(f, |m| m.max(f)));
        draws_done += 1;
    }

    let mut shuffled = config.shuffle.clone();
    random_shuffle(&mut shuffled, &mut rng);

    let chi = chi_square(&bucket_counts);
    let true_ratio = if draws_done == 0 {
        0.0
    } else {
        trues as f64 / draws_done as f64
    };
    crate::debug_vars!(draws_done, timed_out, chi, true_ratio, watch.elapsed_ms());

    Ok(RunReport {
        seed: config.seed,
        draws_done,
        timed_out,
        bucket_counts,
        chi_square: chi,
        true_ratio,
        float_min,
        float_max,
        shuffled,
        seed_hash: hash_seed(config.seed),
        stream_hash: hash_stream(&mut Random::new(config.seed), STREAM_HASH_DRAWS),
    })
}
