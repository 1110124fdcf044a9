use std::{fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::DEFAULT_THRESHOLD;

/// Analysis settings, read from a JSON file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Region shown in titles and when no focus region is selected.
    pub region_name: String,
    /// Short code used in export file names.
    pub region_abbrev: String,
    /// Speed threshold (Mbps) at session start.
    pub default_threshold: u32,
    pub sources: SourceFiles,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            region_name: "West Virginia".to_string(),
            region_abbrev: "WV".to_string(),
            default_threshold: DEFAULT_THRESHOLD,
            sources: SourceFiles::default(),
        }
    }
}

impl AnalysisConfig {
    /// Read the config at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else { return Ok(Self::default()) };
        let bytes = fs::read(path)
            .with_context(|| format!("[config] Failed to read config file: {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("[config] Failed to parse config file: {}", path.display()))
    }
}

/// Payload file names, relative to a data directory.
/// Counties, tracts and metrics are required; `None` disables an optional source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    pub counties: PathBuf,
    pub tracts: PathBuf,
    /// JSON array of metric records, or a `.csv` in the tabular export layout.
    pub metrics: PathBuf,
    pub speed_tiles: Option<PathBuf>,
    pub speed_summary: Option<PathBuf>,
    pub population_summary: Option<PathBuf>,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            counties: "wv_counties.geojson".into(),
            tracts: "wv_tracts.geojson".into(),
            metrics: "wv_broadband_sample.json".into(),
            speed_tiles: Some("wv_ookla_final_corrected.geojson".into()),
            speed_summary: Some("wv_ookla_summary.json".into()),
            population_summary: Some("wv_population_stats_final.json".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        let config = AnalysisConfig::load(None).unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.default_threshold, 25);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "region_name": "Ohio", "sources": {{ "population_summary": null }} }}"#).unwrap();
        let config = AnalysisConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.region_name, "Ohio");
        assert_eq!(config.region_abbrev, "WV");
        assert_eq!(config.sources.population_summary, None);
        assert_eq!(config.sources.tracts, PathBuf::from("wv_tracts.geojson"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(AnalysisConfig::load(Some(file.path())).is_err());
    }
}
