//! CLI frontend for Arcana tarot readings.

mod commands;
mod surface;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana — tarot readings and a daily oracle in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw and reveal a spread
    Read {
        /// Spread to lay out: single, three, celtic
        #[arg(short, long, default_value = "three")]
        spread: String,

        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Card catalog JSON file (default: built-in 78-card deck)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Position table JSON file (default: built-in labels)
        #[arg(long)]
        positions: Option<PathBuf>,

        /// Play the reveal in real time instead of instantly
        #[arg(short, long)]
        animate: bool,

        /// Print each card's image URL under its name
        #[arg(long)]
        images: bool,

        /// Base URL joined to card image paths
        #[arg(long, default_value = "")]
        image_base: String,
    },

    /// List the available spreads and their positions
    Spreads,

    /// List the cards in the catalog
    Cards {
        /// Only show one suit (major, cups, wands, swords, pentacles)
        #[arg(short, long)]
        suit: Option<String>,

        /// Card catalog JSON file (default: built-in 78-card deck)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show today's oracle
    Oracle {
        /// RNG seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,

        /// Oracle sayings JSON file (default: built-in sayings)
        #[arg(long)]
        oracles: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Read {
            spread,
            seed,
            catalog,
            positions,
            animate,
            images,
            image_base,
        } => commands::read::run(
            &spread,
            seed,
            catalog.as_deref(),
            positions.as_deref(),
            commands::read::Presentation {
                animate,
                images,
                image_base,
            },
        ),
        Commands::Spreads => commands::spreads::run(),
        Commands::Cards { suit, catalog } => {
            commands::cards::run(suit.as_deref(), catalog.as_deref())
        }
        Commands::Oracle { seed, oracles } => commands::oracle::run(seed, oracles.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
