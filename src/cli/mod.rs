use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod chart;
mod info;

/// liftchart - Gym Training Log Chart Data
#[derive(Parser)]
#[command(name = "liftchart")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the chart series array from a log export
    Chart {
        /// Input log file path (semicolon-delimited)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output JSON file path (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Sort machines into contiguous equipment groups
        #[arg(short, long)]
        grouped: bool,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Display the detected layout of a log export
    Info {
        /// Input log file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Chart {
            input,
            output,
            grouped,
            pretty,
        } => chart::run(input, output, grouped, pretty),
        Commands::Info { input } => info::run(input),
    }
}
