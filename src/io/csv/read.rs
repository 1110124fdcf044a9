//! CSV reading operations.

use std::io::Cursor;

use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader}};

use super::HEADERS;
use crate::{broadband::MetricRecord, error::LoadError, types::{GeoId, Tier}};

const WHAT: &str = "metric table";

/// Read metric records from CSV bytes in the tabular export layout.
/// All columns are read as text so identifiers keep their leading zeros.
pub fn read_metrics_csv(bytes: &[u8]) -> Result<Vec<MetricRecord>, LoadError> {
    let options = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0));
    let df = CsvReader::new(Cursor::new(bytes))
        .with_options(options)
        .finish()
        .map_err(|e| LoadError::malformed(WHAT, e.to_string()))?;
    dataframe_to_metrics(&df)
}

fn dataframe_to_metrics(df: &DataFrame) -> Result<Vec<MetricRecord>, LoadError> {
    let columns = HEADERS.iter()
        .map(|header| {
            let column = df.column(header)
                .map_err(|_| LoadError::malformed(WHAT, format!("missing column {header:?}")))?;
            let values = column.str()
                .map_err(|e| LoadError::malformed(WHAT, e.to_string()))?;
            Ok(values.into_iter()
                .map(|cell| cell.map(str::trim).filter(|s| !s.is_empty()))
                .collect::<Vec<_>>())
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    (0..df.height())
        .map(|row| {
            let cell = |col: usize| columns[col][row];
            let required = |col: usize| cell(col)
                .ok_or_else(|| LoadError::malformed(WHAT, format!("row {row}: empty {:?}", HEADERS[col])));
            let number = |col: usize| -> Result<f64, LoadError> {
                let text = required(col)?;
                text.parse::<f64>().ok().filter(|x| x.is_finite())
                    .ok_or_else(|| LoadError::malformed(WHAT, format!("row {row}: {:?} is not a number: {text}", HEADERS[col])))
            };
            let count = |col: usize| -> Result<u64, LoadError> {
                let value = number(col)?;
                if value < 0.0 || value.fract() != 0.0 {
                    return Err(LoadError::malformed(WHAT, format!("row {row}: {:?} is not a count", HEADERS[col])));
                }
                Ok(value as u64)
            };

            let tier_label = required(5)?;
            let record = MetricRecord {
                region_id: GeoId::new(required(0)?),
                county_fips: cell(1).map(str::to_string),
                name: cell(2).map(str::to_string),
                max_down_mbps: number(3)?,
                max_up_mbps: number(4)?,
                tier: Tier::parse(tier_label)
                    .ok_or_else(|| LoadError::malformed(WHAT, format!("row {row}: unknown tier {tier_label:?}")))?,
                provider_count: u32::try_from(count(6)?)
                    .map_err(|_| LoadError::malformed(WHAT, format!("row {row}: provider count out of range")))?,
                population_estimate: count(7)?,
                percent_covered: number(8)?,
                color_hint: None,
            };
            match record.invalid_reason() {
                Some(reason) => Err(LoadError::malformed(WHAT, format!("row {row}: {reason}"))),
                None => Ok(record),
            }
        })
        .collect()
}
