use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use liftchart::session::ChartSession;

/// Build the chart series array and emit it as JSON.
pub fn run(input: PathBuf, output: Option<PathBuf>, grouped: bool, pretty: bool) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("File does not exist: {}", input.display());
    }

    let session = ChartSession::from_path(&input)
        .with_context(|| format!("Failed to load log export: {}", input.display()))?;

    info!(
        "built {} series from {}",
        session.series().len(),
        input.display()
    );

    let json = session
        .to_json(grouped, pretty)
        .context("Failed to serialize series")?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!("wrote series JSON to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
