// Copyright 2020 TwoCookingMice

use diceforge::core::histogram::Histogram;
use diceforge::core::lfsr::BitMixingGenerator;
use diceforge::core::word::RegisterWord;
use diceforge::io::text_utils::{self, TextIoError};
use diceforge::math::constants::DEFAULT_SEED;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use std::env;

const DEFAULT_COUNT: u64 = 1_000_000;
const DEFAULT_WIDTH: u32 = 64;
const DEFAULT_OUTPUT: &str = "output.txt";
const DEFAULT_HISTOGRAM: &str = "gnuplot.txt";

#[derive(Debug, Clone, PartialEq)]
struct HarnessConfig {
    seed: u128,
    count: u64,
    width: u32,
    output_path: String,
    histogram_path: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED as u128,
            count: DEFAULT_COUNT,
            width: DEFAULT_WIDTH,
            output_path: String::from(DEFAULT_OUTPUT),
            histogram_path: String::from(DEFAULT_HISTOGRAM),
        }
    }
}

struct RunSummary {
    written: u64,
    distinct: usize,
    max_count: u64,
}

fn parse_args(args: &[String]) -> HarnessConfig {
    let mut config = HarnessConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                config.seed = args.get(i).and_then(|v| v.parse::<u128>().ok()).unwrap_or(config.seed);
            }
            "--count" => {
                i += 1;
                config.count = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(config.count);
            }
            "--width" => {
                i += 1;
                config.width = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(config.width);
            }
            "--output" => {
                i += 1;
                if let Some(path) = args.get(i) {
                    config.output_path = path.clone();
                }
            }
            "--histogram" => {
                i += 1;
                if let Some(path) = args.get(i) {
                    config.histogram_path = path.clone();
                }
            }
            _ => {}
        }
        i += 1;
    }
    config
}

fn run<W: RegisterWord>(config: &HarnessConfig) -> Result<RunSummary, TextIoError> {
    let mut rng = BitMixingGenerator::new(W::from_u128(config.seed));
    log::info!("Generating {} values of width {} from seed {}.", config.count, W::BITS, rng.seed());

    let progress = ProgressBar::new(config.count);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} values")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut histogram = Histogram::new();
    let values = rng.by_ref().take(config.count as usize).inspect(|value| {
        histogram.record(*value);
        progress.inc(1);
    });
    let written = text_utils::write_sequence_to_file(values, &config.output_path)?;
    progress.finish_and_clear();

    text_utils::write_histogram_to_file(&histogram, &config.histogram_path)?;

    Ok(RunSummary {
        written,
        distinct: histogram.len(),
        max_count: histogram.max_count(),
    })
}

fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    let result = match config.width {
        8 => run::<u8>(&config),
        16 => run::<u16>(&config),
        32 => run::<u32>(&config),
        64 => run::<u64>(&config),
        128 => run::<u128>(&config),
        other => {
            eprintln!("Unsupported width {}, expected one of 8, 16, 32, 64, 128.", other);
            eprintln!("Usage: {} [--seed N] [--count N] [--width N] [--output PATH] [--histogram PATH]", args[0]);
            std::process::exit(1);
        }
    };

    match result {
        Ok(summary) => {
            println!("{} {} values -> {}", style("Wrote").green().bold(), summary.written, config.output_path);
            println!("{} {} buckets -> {}", style("Wrote").green().bold(), summary.distinct, config.histogram_path);
            println!("Largest bucket: {}", style(summary.max_count).cyan());
        }
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_args, run, HarnessConfig};
    use std::fs;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let config = parse_args(&args(&["diceforge"]));
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.seed, 1);
        assert_eq!(config.count, 1_000_000);
        assert_eq!(config.output_path, "output.txt");
        assert_eq!(config.histogram_path, "gnuplot.txt");
    }

    #[test]
    fn test_parse_args_overrides() {
        let config = parse_args(&args(&[
            "diceforge", "--seed", "99", "--count", "10", "--width", "32",
            "--output", "seq.txt", "--histogram", "hist.txt", "--bogus",
        ]));
        assert_eq!(config.seed, 99);
        assert_eq!(config.count, 10);
        assert_eq!(config.width, 32);
        assert_eq!(config.output_path, "seq.txt");
        assert_eq!(config.histogram_path, "hist.txt");
    }

    #[test]
    fn test_parse_args_keeps_default_on_bad_value() {
        let config = parse_args(&args(&["diceforge", "--count", "many"]));
        assert_eq!(config.count, 1_000_000);
    }

    #[test]
    fn test_run_writes_both_outputs() {
        let dir = std::env::temp_dir();
        let id = std::process::id();
        let config = HarnessConfig {
            seed: 1,
            count: 3,
            width: 64,
            output_path: dir.join(format!("diceforge_run_{}_seq.txt", id)).to_string_lossy().into_owned(),
            histogram_path: dir.join(format!("diceforge_run_{}_hist.txt", id)).to_string_lossy().into_owned(),
        };

        let summary = run::<u64>(&config).expect("harness run");
        let sequence = fs::read_to_string(&config.output_path).expect("sequence file");
        let histogram = fs::read_to_string(&config.histogram_path).expect("histogram file");
        fs::remove_file(&config.output_path).ok();
        fs::remove_file(&config.histogram_path).ok();

        assert_eq!(summary.written, 3);
        assert_eq!(summary.distinct, 3);
        assert_eq!(summary.max_count, 1);
        assert_eq!(sequence, "1109397278919\n4404611935622966387\n6534838975062857408\n");
        assert_eq!(histogram, "1109397278919 1\n4404611935622966387 1\n6534838975062857408 1\n");
    }
}
