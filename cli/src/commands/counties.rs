use anyhow::{Context, Result};
use openbroadband::{load_dataset, AnalysisConfig, Session};

use crate::cli::{Cli, CountiesArgs};

pub fn run(cli: &Cli, args: &CountiesArgs) -> Result<()> {
    let config = AnalysisConfig::load(cli.config.as_deref())?;
    let dataset = load_dataset(&args.data, &config)
        .with_context(|| format!("[commands::counties] Failed to load dataset from {}", args.data.display()))?;
    let session = Session::with_dataset(&config, dataset);

    for name in session.county_names() {
        println!("{name}");
    }
    Ok(())
}
