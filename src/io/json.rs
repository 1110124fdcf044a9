//! Plain JSON payloads: metric records and the pre-aggregated summaries.

use serde::de::DeserializeOwned;

use crate::{broadband::MetricRecord, error::LoadError, speedtest::SpeedTestSummary, stats::PopulationSummary};

fn parse<T: DeserializeOwned>(bytes: &[u8], what: &'static str) -> Result<T, LoadError> {
    serde_json::from_slice(bytes).map_err(|source| LoadError::Json { what, source })
}

/// Metric records: a JSON array of objects keyed by `geoid`. Negative speeds are rejected.
pub(crate) fn read_metric_records(bytes: &[u8]) -> Result<Vec<MetricRecord>, LoadError> {
    const WHAT: &str = "broadband metrics";
    let records: Vec<MetricRecord> = parse(bytes, WHAT)?;
    match records.iter().find_map(MetricRecord::invalid_reason) {
        Some(reason) => Err(LoadError::malformed(WHAT, reason)),
        None => Ok(records),
    }
}

pub(crate) fn read_population_summary(bytes: &[u8]) -> Result<PopulationSummary, LoadError> {
    parse(bytes, "population summary")
}

pub(crate) fn read_speed_summary(bytes: &[u8]) -> Result<SpeedTestSummary, LoadError> {
    parse(bytes, "speed-test summary")
}
