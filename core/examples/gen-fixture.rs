//! Generates run config JSON files for the host driver.
//!
//! Usage:
//!   cargo run -p xrandom-core --example gen-fixture -- [quick|full|shuffle] > config.json

use xrandom_core::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "quick".to_string());

    let config = match mode.as_str() {
        "quick" => RunConfig {
            // Short run for fixture checks
            draws: 1_000,
            ..default_config(1)
        },
        "full" => default_config(1),
        "shuffle" => RunConfig {
            draws: 0,
            shuffle: (1..=5).collect(),
            ..default_config(42)
        },
        _ => {
            eprintln!("Unknown mode: {}. Use 'quick', 'full', or 'shuffle'", mode);
            std::process::exit(1);
        }
    };

    // Verify by running it once
    let report = match run(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Config rejected: {}", err);
            std::process::exit(1);
        }
    };

    eprintln!("=== Run result ({} mode) ===", mode);
    eprintln!("Draws: {} (timed out: {})", report.draws_done, report.timed_out);
    eprintln!("Chi-square: {:.3}", report.chi_square);
    eprintln!("Shuffled: [{}]", str_join(&report.shuffled, ", "));

    match serde_json::to_string(&config) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Failed to encode config: {}", err);
            std::process::exit(1);
        }
    }
}
