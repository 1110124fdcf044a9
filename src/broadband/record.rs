use serde::{Deserialize, Deserializer, Serialize};

use crate::{io::geojson::parse_geoid, types::{GeoId, Tier}};

/// A provider-reported broadband observation for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(rename = "geoid", deserialize_with = "geoid_string_or_number")]
    pub region_id: GeoId,
    #[serde(default, deserialize_with = "string_or_number")]
    pub county_fips: Option<String>,
    #[serde(rename = "tract_name", default, deserialize_with = "string_or_number")]
    pub name: Option<String>,
    pub max_down_mbps: f64,
    pub max_up_mbps: f64,
    pub tier: Tier,
    pub provider_count: u32,
    pub population_estimate: u64,
    pub percent_covered: f64,
    #[serde(rename = "color", default, skip_serializing_if = "Option::is_none")]
    pub color_hint: Option<String>,
}

impl MetricRecord {
    /// True when the best available download speed is below `threshold_mbps`.
    #[inline]
    pub fn is_below(&self, threshold_mbps: f64) -> bool {
        self.max_down_mbps < threshold_mbps
    }

    /// Reason this record cannot be used, if any. Speeds must be finite and non-negative.
    pub(crate) fn invalid_reason(&self) -> Option<String> {
        [("max_down_mbps", self.max_down_mbps), ("max_up_mbps", self.max_up_mbps)].into_iter()
            .find(|(_, speed)| !speed.is_finite() || *speed < 0.0)
            .map(|(field, speed)| format!("{} has invalid {field} {speed}", self.region_id))
    }
}

/// Region ids arrive quoted or as bare numbers; both must join against the geometry GEOIDs.
fn geoid_string_or_number<'de, D>(deserializer: D) -> Result<GeoId, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    parse_geoid(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid geoid {value}, expected a digit string or integer")))
}

/// Payloads are inconsistent about quoting codes such as FIPS and tract names.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_payload_record() {
        let json = r##"{
            "geoid": "54039000100", "county_fips": 39, "tract_name": "1",
            "max_down_mbps": 940.5, "max_up_mbps": 35, "tier": "High Speed",
            "provider_count": 3, "population_estimate": 4120, "percent_covered": 97.5,
            "color": "#1a9850"
        }"##;
        let record: MetricRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.region_id.id(), "54039000100");
        assert_eq!(record.county_fips.as_deref(), Some("39"));
        assert_eq!(record.tier, Tier::HighSpeed);
        assert_eq!(record.max_up_mbps, 35.0);
        assert_eq!(record.color_hint.as_deref(), Some("#1a9850"));
        assert!(!record.is_below(25.0));
    }

    #[test]
    fn numeric_geoid_joins_like_text() {
        let json = r#"{
            "geoid": 54039000100, "max_down_mbps": 10, "max_up_mbps": 1,
            "tier": "Basic", "provider_count": 1, "population_estimate": 100,
            "percent_covered": 50
        }"#;
        let record: MetricRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.region_id, GeoId::new("54039000100"));
        assert_eq!(serde_json::to_value(&record).unwrap()["geoid"], "54039000100");
    }

    #[test]
    fn fractional_geoid_is_rejected() {
        let json = r#"{
            "geoid": 5403.5, "max_down_mbps": 10, "max_up_mbps": 1,
            "tier": "Basic", "provider_count": 1, "population_estimate": 100,
            "percent_covered": 50
        }"#;
        assert!(serde_json::from_str::<MetricRecord>(json).is_err());
    }

    #[test]
    fn negative_speed_is_invalid() {
        let json = r#"{
            "geoid": "54039000100", "max_down_mbps": -5, "max_up_mbps": 1,
            "tier": "Basic", "provider_count": 1, "population_estimate": 100,
            "percent_covered": 50
        }"#;
        let record: MetricRecord = serde_json::from_str(json).unwrap();
        assert!(record.invalid_reason().unwrap().contains("max_down_mbps"));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let json = r#"{
            "geoid": "54039000200", "max_down_mbps": 0, "max_up_mbps": 0,
            "tier": "No Service", "provider_count": 0, "population_estimate": 0,
            "percent_covered": 0
        }"#;
        let record: MetricRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.county_fips, None);
        assert_eq!(record.name, None);
        assert_eq!(record.color_hint, None);
        assert!(record.is_below(1.0));
    }
}
