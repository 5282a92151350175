pub mod constants;
pub mod engine;
pub mod error;
pub mod fmt;
pub mod hash;
pub mod run;
pub mod sample;
pub mod shuffle;
pub mod stopwatch;
pub mod types;
pub mod unit;

#[doc(hidden)]
pub use log;

pub use constants::*;
pub use engine::Random;
pub use error::RangeError;
pub use fmt::str_join;
pub use hash::*;
pub use run::{chi_square, default_config, run};
pub use shuffle::random_shuffle;
pub use stopwatch::Stopwatch;
pub use types::*;
pub use unit::{unit_by_division, unit_from_bits};
