//! # liftchart CLI
//!
//! Command-line front end for the training-log chart pipeline: read a
//! semicolon-delimited log export and emit the chart series array as
//! JSON, or inspect the detected column layout.
//!
//! ## Usage
//!
//! ```bash
//! # Emit series JSON (average first, machines in source order)
//! liftchart chart training.csv
//!
//! # Grouped display order, written to a file
//! liftchart chart training.csv --grouped -o series.json
//!
//! # Inspect the detected header layout
//! liftchart info training.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::init_logging(args.verbosity());
    cli::dispatch(args)
}
