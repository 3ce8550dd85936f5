use diceforge::core::histogram::Histogram;
use diceforge::io::text_utils::read_sequence_from_file;

use console::style;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <sequence.txt>", args[0]);
        std::process::exit(1);
    }

    let values = read_sequence_from_file(&args[1])
        .unwrap_or_else(|e| {
            eprintln!("{} failed to read {}: {}", style("error:").red().bold(), args[1], e);
            std::process::exit(1);
        });
    if values.is_empty() {
        println!("Empty sequence.");
        return;
    }

    let mut histogram = Histogram::new();
    let mut sum = 0.0f64;
    for value in &values {
        histogram.record(*value);
        sum += *value as f64;
    }

    // Histogram buckets are ordered, so the first and last keys are the extremes.
    let min = histogram.iter().next().map(|(value, _)| value).unwrap_or(0);
    let max = histogram.iter().last().map(|(value, _)| value).unwrap_or(0);

    println!("Count: {}", values.len());
    println!("Distinct: {}", histogram.len());
    println!("Min: {}", min);
    println!("Max: {}", max);
    println!("Mean: {:.6e}", sum / values.len() as f64);
    println!("Largest repeat: {}", style(histogram.max_count()).cyan());
}
