use anyhow::{Context, Result};
use std::path::PathBuf;

use liftchart::session::ChartSession;

/// Display the detected layout and series summary of a log export.
pub fn run(input: PathBuf) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("File does not exist: {}", input.display());
    }

    let session = ChartSession::from_path(&input)
        .with_context(|| format!("Failed to load log export: {}", input.display()))?;
    let layout = session.layout();

    println!("liftchart Log Information");
    println!("=========================");
    println!("File: {}", input.display());
    println!();

    println!("Header layout ({:?} convention):", layout.convention);
    println!("  Date column: {}", layout.date_index);
    for machine in &layout.machines {
        match machine.duration_index {
            Some(d) => println!(
                "  {:3}. {} (duration column {})",
                machine.index, machine.name, d
            ),
            None => println!("  {:3}. {}", machine.index, machine.name),
        }
    }
    println!();

    println!("Series:");
    for series in session.series() {
        println!(
            "  {:10} {:22} {} points",
            series.key,
            series.color,
            series.points.len()
        );
    }

    Ok(())
}
