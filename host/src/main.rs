use std::io::Read;
use std::time::Instant;

use anyhow::{Context, Result};
use xrandom_core::{run, str_join, RunConfig, RunReport};

fn load_config(args: &[String]) -> Result<RunConfig> {
    let path = args.iter().skip(1).find(|a| !a.starts_with("--"));

    let json_str = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read config from stdin")?;
            buf
        }
    };

    serde_json::from_str(&json_str).context("failed to parse RunConfig JSON")
}

fn report_json(report: &RunReport) -> serde_json::Value {
    serde_json::json!({
        "seed": report.seed,
        "draws_done": report.draws_done,
        "timed_out": report.timed_out,
        "bucket_counts": report.bucket_counts,
        "chi_square": report.chi_square,
        "true_ratio": report.true_ratio,
        "float_min": report.float_min,
        "float_max": report.float_max,
        "shuffled": report.shuffled,
        "seed_hash": hex::encode(report.seed_hash),
        "stream_hash": hex::encode(report.stream_hash),
    })
}

fn print_summary(report: &RunReport) {
    eprintln!("=== Run Result ===");
    eprintln!(
        "Draws: {} (timed out: {})",
        report.draws_done, report.timed_out
    );
    eprintln!(
        "Buckets: {} (chi-square {:.3})",
        report.bucket_counts.len(),
        report.chi_square
    );
    eprintln!("True ratio: {:.4}", report.true_ratio);
    if !report.shuffled.is_empty() {
        eprintln!("Shuffled: [{}]", str_join(&report.shuffled, ", "));
    }
    eprintln!("Stream hash: {}", hex::encode(report.stream_hash));
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let pretty = args.iter().any(|a| a == "--pretty");

    eprintln!("Loading config...");
    let config = load_config(&args)?;
    eprintln!(
        "Config loaded: seed={}, draws={}, buckets={}, budget={} ms",
        config.seed, config.draws, config.buckets, config.budget_ms
    );

    let start = Instant::now();
    let report = run(&config).context("invalid run config")?;
    eprintln!("Run finished in {:.3}s", start.elapsed().as_secs_f64());
    print_summary(&report);

    let json = report_json(&report);
    let out = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    println!("{}", out);
    Ok(())
}
