use clap::Parser;
use moji_core::config::Config;
use moji_core::core::types::Category;
use moji_core::corpus::read_corpus;
use moji_core::persistence::save_to_disk;
use moji_core::{Analyzer, Result};
use std::time::Instant;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::parse();
    let start = Instant::now();

    let records = read_corpus(&config.input)?;
    let mut analyzer = Analyzer::from_file_or_new(config.previous_path());
    analyzer.process_corpus(&records);
    let (dictionary, stats) = analyzer.finish();

    println!(
        "Processed {} kaomoji in {:.3} seconds",
        stats.records,
        start.elapsed().as_secs_f64()
    );
    println!(
        "Accepted {}, rejected {}, directives {}",
        stats.accepted,
        stats.rejected_total(),
        stats.directives
    );
    for (reason, count) in &stats.rejected {
        println!("  {}: {}", reason, count);
    }
    let sizes: Vec<String> = Category::ALL
        .iter()
        .map(|&category| format!("{} {}", category, dictionary.len(category)))
        .collect();
    println!("Distinct parts: {}", sizes.join(", "));
    println!();

    println!("Tags used:");
    println!("{}", dictionary.tags_used().join(", "));
    println!();

    println!("Writing file...");
    save_to_disk(&dictionary, &config.output, &config.spacing())?;
    println!("Done.");
    Ok(())
}
