use geo::MultiPolygon;
use serde::{Deserialize, Serialize};

use crate::{stats::HIGH_SPEED_MBPS, types::Tier};

/// One speed-test tile: an aggregated cell of crowdsourced measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedTile {
    pub boundary: MultiPolygon<f64>,
    pub download_mbps: f64,
    pub upload_mbps: f64,
    pub ping_ms: Option<f64>,
    pub provider: Option<String>,
    pub county_label: Option<String>,
    pub tests: Option<u64>,
    pub population: Option<u64>,
    pub color_hint: Option<String>,
}

impl SpeedTile {
    /// Tier the measured download speed falls in.
    pub fn tier(&self) -> Tier { Tier::classify(self.download_mbps) }
}

/// Headline numbers published alongside the tile set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedTestSummary {
    pub total_tests: u64,
    pub median_download_mbps: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_upload_mbps: Option<f64>,
}

/// Predicate for the discrepancy overlay: tiles whose measured download speed
/// falls short of the fixed high-speed cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscrepancyFilter {
    pub cutoff_mbps: f64,
}

impl Default for DiscrepancyFilter {
    fn default() -> Self { Self { cutoff_mbps: HIGH_SPEED_MBPS } }
}

impl DiscrepancyFilter {
    #[inline]
    pub fn matches(&self, tile: &SpeedTile) -> bool {
        tile.download_mbps < self.cutoff_mbps
    }

    /// Indices of matching tiles, in input order.
    pub fn select(&self, tiles: &[SpeedTile]) -> Vec<usize> {
        tiles.iter().enumerate()
            .filter_map(|(i, tile)| self.matches(tile).then_some(i))
            .collect()
    }
}
