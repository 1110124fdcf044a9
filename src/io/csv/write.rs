//! CSV writing operations.

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{Column, CsvWriter, QuoteStyle}};

use super::HEADERS;
use crate::broadband::MetricRecord;

/// Build the export table. Every cell is text so numbers print exactly as in the payload.
fn metrics_to_dataframe(records: &[MetricRecord]) -> Result<DataFrame> {
    let mut columns: [Vec<String>; 9] = Default::default();
    for record in records {
        let row = [
            record.region_id.id().to_string(),
            record.county_fips.clone().unwrap_or_default(),
            record.name.clone().unwrap_or_default(),
            record.max_down_mbps.to_string(),
            record.max_up_mbps.to_string(),
            record.tier.label().to_string(),
            record.provider_count.to_string(),
            record.population_estimate.to_string(),
            record.percent_covered.to_string(),
        ];
        for (column, cell) in columns.iter_mut().zip(row) {
            column.push(cell);
        }
    }

    let columns = HEADERS.iter().zip(columns)
        .map(|(header, values)| Column::new((*header).into(), values))
        .collect::<Vec<_>>();
    DataFrame::new(columns).context("[io::csv::write] Failed to build metric table")
}

/// Write metric records as CSV bytes with every field quoted.
pub fn write_metrics_csv(records: &[MetricRecord]) -> Result<Vec<u8>> {
    let mut df = metrics_to_dataframe(records)?;
    let mut out = Vec::new();
    CsvWriter::new(&mut out)
        .include_header(true)
        .with_quote_style(QuoteStyle::Always)
        .finish(&mut df)
        .context("[io::csv::write] Failed to write CSV to bytes")?;
    Ok(out)
}
