use std::{fmt, str::FromStr};

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// Logical map layers whose visibility is controlled by [`super::LayerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerName {
    Counties,
    Tracts,
    BroadbandChoropleth,
    SpeedTestOverlay,
    DiscrepancyOverlay,
    UnderservedHighlight,
}

impl LayerName {
    pub const COUNT: usize = 6;
    pub const ALL: [LayerName; Self::COUNT] = [
        LayerName::Counties,
        LayerName::Tracts,
        LayerName::BroadbandChoropleth,
        LayerName::SpeedTestOverlay,
        LayerName::DiscrepancyOverlay,
        LayerName::UnderservedHighlight,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LayerName::Counties => "counties",
            LayerName::Tracts => "tracts",
            LayerName::BroadbandChoropleth => "broadbandChoropleth",
            LayerName::SpeedTestOverlay => "speedTestOverlay",
            LayerName::DiscrepancyOverlay => "discrepancyOverlay",
            LayerName::UnderservedHighlight => "underservedHighlight",
        }
    }

    /// Renderer layer ids whose visibility follows this logical layer.
    pub fn render_ids(&self) -> &'static [&'static str] {
        match self {
            LayerName::Counties => &["counties-fill", "counties-outline"],
            LayerName::Tracts => &["tracts-fill", "tracts-outline"],
            LayerName::BroadbandChoropleth => &["broadband-fill", "broadband-outline"],
            LayerName::SpeedTestOverlay => &["ookla-fill", "ookla-outline"],
            LayerName::DiscrepancyOverlay => &["comparison-layer"],
            LayerName::UnderservedHighlight => &["speed-filter"],
        }
    }
}

impl fmt::Display for LayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LayerName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        LayerName::ALL.into_iter()
            .find(|layer| layer.to_str().to_ascii_lowercase() == key)
            .ok_or_else(|| anyhow!("Unknown layer name: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::LayerName;

    #[test]
    fn parses_names_loosely() {
        assert_eq!("tracts".parse::<LayerName>().unwrap(), LayerName::Tracts);
        assert_eq!("speed-test-overlay".parse::<LayerName>().unwrap(), LayerName::SpeedTestOverlay);
        assert_eq!("broadbandChoropleth".parse::<LayerName>().unwrap(), LayerName::BroadbandChoropleth);
        assert!("roads".parse::<LayerName>().is_err());
    }

    #[test]
    fn every_layer_controls_render_ids() {
        for layer in LayerName::ALL {
            assert!(!layer.render_ids().is_empty(), "{layer} has no render ids");
        }
    }
}
