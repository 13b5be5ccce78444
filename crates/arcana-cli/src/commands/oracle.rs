use std::path::Path;

use colored::Colorize;

use arcana_reading::analytics::LogSink;
use arcana_reading::{Oracle, OracleDeck, ReadingConfig, Tracker};

pub fn run(seed: Option<u64>, oracles: Option<&Path>) -> Result<(), String> {
    let deck = match oracles {
        Some(path) => OracleDeck::from_json(&super::read_file(path)?)
            .map_err(|e| format!("{}: {e}", path.display()))?,
        None => OracleDeck::builtin(),
    };

    let mut config = ReadingConfig::default().with_page("/cli");
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let tracker = Tracker::new(config.page.clone()).with_sink(LogSink);
    let mut oracle = Oracle::new(deck, tracker, config.rng());

    println!();
    for line in oracle.open() {
        println!("  {}", line.italic());
    }
    println!();
    oracle.close();
    Ok(())
}
