use geo::{LineString, MultiPolygon};
use serde_json::{json, Map, Value};

use crate::{
    broadband::EnrichedFeature,
    io::color::{fill_color, tier_color, MISSING_DATA},
    speedtest::{DiscrepancyFilter, SpeedTile},
    types::Tier,
    view::UnderservedFilter,
};

/// Export enriched features as a GeoJSON FeatureCollection for the renderer.
/// `broadband_*` properties are omitted, not zeroed, for features without a match.
/// A top-level `legend` lists the fill colour of every tier and of missing data.
pub fn enriched_to_geojson(features: &[EnrichedFeature], filter: &UnderservedFilter) -> Value {
    let features = features.iter()
        .map(|enriched| {
            let feature = &enriched.feature;
            let mut properties = Map::new();
            properties.insert("GEOID".into(), json!(feature.id.id()));
            properties.insert("NAME".into(), json!(&*feature.name));
            if let Some(label) = &feature.parent_label {
                properties.insert("NAMELSADCO".into(), json!(&**label));
            }
            if let Some(metric) = &enriched.metric {
                properties.insert("broadband_tier".into(), json!(metric.tier.label()));
                properties.insert("broadband_down".into(), json!(metric.max_down_mbps));
                properties.insert("broadband_up".into(), json!(metric.max_up_mbps));
                properties.insert("broadband_providers".into(), json!(metric.provider_count));
                properties.insert("broadband_coverage".into(), json!(metric.percent_covered));
                if let Some(color) = &metric.color_hint {
                    properties.insert("broadband_color".into(), json!(color));
                }
            }
            properties.insert("fill_color".into(), json!(fill_color(enriched).to_string()));
            properties.insert("underserved".into(), json!(filter.matches(enriched)));

            json!({
                "type": "Feature",
                "id": feature.id.id(),
                "geometry": multipolygon_to_geojson(&feature.boundary),
                "properties": properties,
            })
        })
        .collect::<Vec<_>>();

    json!({ "type": "FeatureCollection", "legend": legend(), "features": features })
}

fn legend() -> Value {
    let tiers = Tier::ALL.iter()
        .map(|tier| json!({ "tier": tier.label(), "label": tier.legend(), "color": tier_color(*tier).to_string() }));
    let missing = json!({ "tier": null, "label": "No Data", "color": MISSING_DATA.to_string() });
    Value::Array(tiers.chain(std::iter::once(missing)).collect())
}

/// Export speed-test tiles, flagging those the discrepancy overlay would show.
pub fn tiles_to_geojson(tiles: &[SpeedTile], filter: &DiscrepancyFilter) -> Value {
    let features = tiles.iter()
        .map(|tile| {
            let mut properties = Map::new();
            properties.insert("download_mbps".into(), json!(tile.download_mbps));
            properties.insert("upload_mbps".into(), json!(tile.upload_mbps));
            if let Some(ping) = tile.ping_ms { properties.insert("ping_ms".into(), json!(ping)); }
            if let Some(provider) = &tile.provider { properties.insert("provider".into(), json!(provider)); }
            if let Some(label) = &tile.county_label { properties.insert("NAMELSADCO".into(), json!(label)); }
            properties.insert("tier".into(), json!(tile.tier().label()));
            properties.insert("below_high_speed".into(), json!(filter.matches(tile)));

            json!({
                "type": "Feature",
                "geometry": multipolygon_to_geojson(&tile.boundary),
                "properties": properties,
            })
        })
        .collect::<Vec<_>>();

    json!({ "type": "FeatureCollection", "features": features })
}

fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let ring = |ls: &LineString<f64>| ls.coords().map(|c| [c.x, c.y]).collect::<Vec<_>>();
    let polygons = mp.0.iter()
        .map(|polygon| {
            std::iter::once(polygon.exterior()).chain(polygon.interiors())
                .map(ring)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    json!({ "type": "MultiPolygon", "coordinates": polygons })
}
