//! Subcommand implementations. Each loads a session from the data directory, then reads from it.

pub mod counties;
pub mod export;
pub mod stats;

use anyhow::{Context, Result};
use chrono::Local;
use openbroadband::{load_dataset, AnalysisConfig, Event, ReportAssembler, Session};

use crate::cli::{Cli, SessionArgs};

/// Load config and dataset, then apply the threshold and focus overrides.
pub(crate) fn open_session(cli: &Cli, args: &SessionArgs) -> Result<(AnalysisConfig, Session)> {
    let config = AnalysisConfig::load(cli.config.as_deref())?;
    let dataset = load_dataset(&args.data, &config)
        .with_context(|| format!("[commands] Failed to load dataset from {}", args.data.display()))?;

    let mut session = Session::with_dataset(&config, dataset);
    if let Some(threshold) = args.threshold {
        session.apply(Event::ThresholdChanged(threshold));
    }
    if let Some(county) = &args.county {
        session.apply(Event::FocusChanged(Some(county.clone())));
    }
    Ok((config, session))
}

/// Report assembler for today's date.
pub(crate) fn assembler(config: &AnalysisConfig) -> ReportAssembler {
    ReportAssembler::new(&config.region_name, &config.region_abbrev, Local::now().date_naive())
}
