use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ecm", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a simulated bench session: seed random cells, mutate, report
    Simulate {
        /// Number of cells on the initial bench
        #[arg(long, default_value_t = 4)]
        cells: usize,
        /// Append this many randomly generated cells after seeding
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=20))]
        add: Option<u64>,
        /// Remove the named cell (repeatable; removes all matches)
        #[arg(long)]
        remove: Vec<String>,
        /// Seed for the random generator, for reproducible benches
        #[arg(long)]
        seed: Option<u64>,
        /// Export the final roster as delimited text
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Export the final roster as structured records
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Build a pack from manual cell entries and report on it
    Pack {
        /// Cell entry as ID,TYPE,VOLTAGE,CURRENT,CAPACITY,COOLING (repeatable)
        #[arg(long = "cell")]
        cells: Vec<String>,
        /// Remove the cell with this identifier (repeatable)
        #[arg(long)]
        remove: Vec<String>,
        /// Export the final roster as delimited text
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Export the final roster as structured records
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Summarize a roster file (format and record shape auto-detected)
    Inspect {
        /// Path to the roster file (.csv or .json)
        input: PathBuf,
        /// Emit the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert a roster file between the delimited and structured formats
    Convert {
        /// Path to the source roster file
        #[arg(short, long)]
        input: PathBuf,
        /// Path to write; the extension selects the output format
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
