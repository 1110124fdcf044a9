use anyhow::{Context, Result};
use openbroadband::Tier;

use crate::{cli::{Cli, StatsArgs}, commands::{assembler, open_session}};

pub fn run(cli: &Cli, args: &StatsArgs) -> Result<()> {
    let (config, session) = open_session(cli, &args.session)?;

    if args.json {
        let report = session.report(&assembler(&config));
        let json = serde_json::to_string_pretty(&report)
            .context("[commands::stats] Failed to serialize report")?;
        println!("{json}");
        return Ok(());
    }

    let view = session.statistics();
    println!("{}", view.title());
    if let Some(focus) = session.focus() {
        println!("Focus: {focus} County");
    }
    if !view.is_population_weighted() {
        println!("Threshold: {} Mbps", session.threshold());
    }
    for entry in view.entries() {
        println!("  {:>12}  {}", entry.value, entry.label);
    }
    for line in view.breakdown() {
        println!("  {line}");
    }

    println!("Legend:");
    for tier in Tier::ALL {
        println!("  {}", tier.legend());
    }
    Ok(())
}
