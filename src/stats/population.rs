use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Population-weighted summary, pre-aggregated outside this crate.
/// Its fields are surfaced verbatim and never reconciled with [`super::compute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationSummary {
    pub underserved_percent: f64,
    pub underserved_population: u64,
    pub pop_weighted_median_speed: f64,
    pub high_speed_percent: f64,
    pub total_population: u64,
    #[serde(default)]
    pub geographic_breakdown: GeographicBreakdown,
}

/// Where the analysed population lives. Only the rural share is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeographicBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rural_percent: Option<f64>,
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unknown_breakdown_fields() {
        let json = r#"{
            "underserved_percent": 10.6, "underserved_population": 189234,
            "pop_weighted_median_speed": 87.4, "high_speed_percent": 41.2,
            "total_population": 1793716,
            "geographic_breakdown": { "rural_percent": 51.3, "urban_percent": 48.7 }
        }"#;
        let summary: PopulationSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.underserved_population, 189234);
        assert_eq!(summary.geographic_breakdown.rural_percent, Some(51.3));
        assert!(summary.geographic_breakdown.other.contains_key("urban_percent"));
    }
}
