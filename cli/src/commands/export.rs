use std::path::PathBuf;

use anyhow::{Context, Result};
use openbroadband::{enriched_to_geojson, tiles_to_geojson, write_file, write_metrics_csv, DiscrepancyFilter};
use tracing::info;

use crate::{
    cli::{Cli, ExportArgs, ExportFormat},
    commands::{assembler, open_session},
};

pub fn run(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let (config, session) = open_session(cli, &args.session)?;
    let report = session.report(&assembler(&config));

    let (bytes, default_name) = match args.format {
        ExportFormat::Csv => (write_metrics_csv(&session.dataset().metrics)?, report.files.data.clone()),
        ExportFormat::Geojson => {
            let value = enriched_to_geojson(session.enriched_tracts(), &session.layers().underserved_filter());
            (to_json_bytes(&value)?, report.files.map.replace(".png", ".geojson"))
        }
        ExportFormat::Tiles => {
            let value = tiles_to_geojson(&session.dataset().tiles, &DiscrepancyFilter::default());
            (to_json_bytes(&value)?, report.files.map.replace("-map-", "-tiles-").replace(".png", ".geojson"))
        }
        ExportFormat::Report => (report.to_text().into_bytes(), report.files.report.replace(".pdf", ".txt")),
    };

    let output = args.output.clone().unwrap_or_else(|| PathBuf::from(default_name));
    write_file(&output, &bytes, args.force)?;
    info!(format = ?args.format, path = %output.display(), bytes = bytes.len(), "export written");
    Ok(())
}

fn to_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>> {
    serde_json::to_vec(value).context("[commands::export] Failed to serialize GeoJSON")
}
