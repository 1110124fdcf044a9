//! Assemble a [`Dataset`] from the payload files in a data directory.

use std::{fs, path::{Path, PathBuf}};

use tracing::{debug, info};

use crate::{
    config::AnalysisConfig,
    dataset::Dataset,
    error::LoadError,
    io::{csv::read_metrics_csv, geojson::{read_features, read_speed_tiles}, json::{read_metric_records, read_population_summary, read_speed_summary}},
    map::{Map, MapLayer},
    types::GeoType,
};

fn read_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    debug!(path = %path.display(), "reading payload");
    fs::read(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}

/// Read an optional payload. `Ok(None)` when it is not configured or the file is absent.
fn read_optional(dir: &Path, name: Option<&PathBuf>) -> Result<Option<Vec<u8>>, LoadError> {
    let Some(name) = name else { return Ok(None) };
    let path = dir.join(name);
    if !path.exists() {
        info!(path = %path.display(), "optional payload not found; skipping");
        return Ok(None);
    }
    read_bytes(&path).map(Some)
}

fn is_csv(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Load every configured payload from `dir`.
/// Fails on the first missing required payload or malformed file; nothing is returned partially.
pub fn load_dataset(dir: &Path, config: &AnalysisConfig) -> Result<Dataset, LoadError> {
    let sources = &config.sources;

    let counties = read_features(&read_bytes(&dir.join(&sources.counties))?, GeoType::County, "county geometry")?;
    let tracts = read_features(&read_bytes(&dir.join(&sources.tracts))?, GeoType::Tract, "tract geometry")?;

    let metrics_path = dir.join(&sources.metrics);
    let metric_bytes = read_bytes(&metrics_path)?;
    let metrics = if is_csv(&metrics_path) { read_metrics_csv(&metric_bytes)? } else { read_metric_records(&metric_bytes)? };

    let tiles = read_optional(dir, sources.speed_tiles.as_ref())?
        .map(|bytes| read_speed_tiles(&bytes))
        .transpose()?
        .unwrap_or_default();
    let speed_summary = read_optional(dir, sources.speed_summary.as_ref())?
        .map(|bytes| read_speed_summary(&bytes))
        .transpose()?;
    let population = read_optional(dir, sources.population_summary.as_ref())?
        .map(|bytes| read_population_summary(&bytes))
        .transpose()?;

    let mut map = Map::default();
    map.set_layer(MapLayer::from_features(GeoType::County, counties));
    map.set_layer(MapLayer::from_features(GeoType::Tract, tracts));

    info!(
        counties = map.counties().len(),
        tracts = map.tracts().len(),
        metrics = metrics.len(),
        tiles = tiles.len(),
        population = population.is_some(),
        "dataset loaded"
    );

    Ok(Dataset::new(map, metrics)
        .with_tiles(tiles, speed_summary)
        .with_population(population))
}
