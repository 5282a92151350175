use std::time::{Duration, Instant};

/// Millisecond time budget for randomized search loops.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    started: Instant,
    budget: Duration,
}

impl Stopwatch {
    pub fn new(budget_ms: u64) -> Self {
        let mut watch = Self {
            started: Instant::now(),
            budget: Duration::ZERO,
        };
        watch.start(budget_ms);
        watch
    }

    /// Restarts the clock with a fresh budget.
    pub fn start(&mut self, budget_ms: u64) {
        self.started = Instant::now();
        self.budget = Duration::from_millis(budget_ms);
        log::trace!("stopwatch started with {} ms budget", budget_ms);
    }

    pub fn timeout(&self) -> bool {
        self.started.elapsed() >= self.budget
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Elapsed time over budget. Exceeds 1.0 once the budget is spent;
    /// a zero budget always reports 1.0.
    pub fn elapsed_fraction(&self) -> f64 {
        if self.budget.is_zero() {
            return 1.0;
        }
        self.started.elapsed().as_secs_f64() / self.budget.as_secs_f64()
    }
}
