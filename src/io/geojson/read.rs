use std::sync::LazyLock;

use geo::{Coord, LineString, MultiPolygon, Polygon};
use regex::Regex;
use serde_json::{Map, Value};

use crate::{error::LoadError, map::GeometryFeature, speedtest::SpeedTile, types::{GeoId, GeoType}};

/// Census GEOIDs are digit strings; `GEO_ID` values carry a `...US` summary-level prefix.
static GEOID: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^(?:\d+US)?(\d+)$"));

/// Extract the digit GEOID from a property value (string or number), stripping any `...US` prefix.
pub(crate) fn parse_geoid(value: &Value) -> Option<GeoId> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let caps = GEOID.as_ref().ok()?.captures(&text)?;
    Some(GeoId::new(caps.get(1)?.as_str()))
}

/// Read administrative features of level `ty` from a GeoJSON FeatureCollection.
pub(crate) fn read_features(bytes: &[u8], ty: GeoType, what: &'static str) -> Result<Vec<GeometryFeature>, LoadError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| LoadError::Json { what, source })?;

    feature_array(&value, what)?.iter().enumerate()
        .map(|(i, feature)| {
            let props = properties(feature, i, what)?;
            let id = ["GEOID", "GEO_ID"].iter()
                .find_map(|key| props.get(*key).and_then(parse_geoid))
                .ok_or_else(|| LoadError::malformed(what, format!("feature {i} has no valid GEOID")))?;
            let name = props.get("NAME").and_then(text).unwrap_or_else(|| id.id().to_string());
            let boundary = parse_geometry(&feature["geometry"])
                .map_err(|reason| LoadError::malformed(what, format!("feature {i} ({id}): {reason}")))?;

            Ok(GeometryFeature::new(ty, id, &name, boundary)
                .with_area(props.get("ALAND").and_then(Value::as_f64))
                .with_parent_label(props.get("NAMELSADCO").and_then(Value::as_str)))
        })
        .collect()
}

/// Read speed-test tiles from a GeoJSON FeatureCollection.
pub(crate) fn read_speed_tiles(bytes: &[u8]) -> Result<Vec<SpeedTile>, LoadError> {
    const WHAT: &str = "speed-test tiles";
    let value: Value = serde_json::from_slice(bytes).map_err(|source| LoadError::Json { what: WHAT, source })?;

    feature_array(&value, WHAT)?.iter().enumerate()
        .map(|(i, feature)| {
            let props = properties(feature, i, WHAT)?;
            let number = |key: &str| props.get(key).and_then(Value::as_f64);
            let count = |key: &str| props.get(key).and_then(Value::as_u64);
            let download_mbps = number("download_mbps")
                .ok_or_else(|| LoadError::malformed(WHAT, format!("tile {i} has no download_mbps")))?;
            let upload_mbps = number("upload_mbps")
                .ok_or_else(|| LoadError::malformed(WHAT, format!("tile {i} has no upload_mbps")))?;
            let boundary = parse_geometry(&feature["geometry"])
                .map_err(|reason| LoadError::malformed(WHAT, format!("tile {i}: {reason}")))?;

            Ok(SpeedTile {
                boundary,
                download_mbps,
                upload_mbps,
                ping_ms: number("ping_ms"),
                provider: props.get("provider").and_then(text),
                county_label: props.get("NAMELSADCO").and_then(text),
                tests: count("tests").or_else(|| count("total_tests")),
                population: count("population"),
                color_hint: props.get("color").and_then(text),
            })
        })
        .collect()
}

fn feature_array<'a>(value: &'a Value, what: &'static str) -> Result<&'a Vec<Value>, LoadError> {
    if value["type"].as_str() != Some("FeatureCollection") {
        return Err(LoadError::malformed(what, "expected a GeoJSON FeatureCollection"));
    }
    value["features"].as_array()
        .ok_or_else(|| LoadError::malformed(what, "FeatureCollection has no features array"))
}

fn properties<'a>(feature: &'a Value, i: usize, what: &'static str) -> Result<&'a Map<String, Value>, LoadError> {
    feature["properties"].as_object()
        .ok_or_else(|| LoadError::malformed(what, format!("feature {i} has no properties")))
}

/// String-or-number property as text.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a GeoJSON `Polygon` or `MultiPolygon` geometry object.
pub(crate) fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>, String> {
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| "geometry has no coordinates".to_string())?;
    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon(coords)?])),
        Some("MultiPolygon") => coords.iter()
            .map(|polygon| parse_polygon(polygon.as_array().ok_or("polygon is not an array")?))
            .collect::<Result<Vec<_>, String>>()
            .map(MultiPolygon),
        Some(other) => Err(format!("unsupported geometry type {other}")),
        None => Err("geometry has no type".to_string()),
    }
}

/// Parse polygon rings: `[exterior, hole, hole, ...]`.
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>, String> {
    let mut rings = rings.iter()
        .map(|ring| parse_ring(ring.as_array().ok_or("ring is not an array")?));
    let exterior = rings.next().ok_or("polygon has no exterior ring")??;
    let interiors = rings.collect::<Result<Vec<_>, String>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring `[[x, y], ...]`, closing it if needed.
fn parse_ring(coords: &[Value]) -> Result<LineString<f64>, String> {
    let mut points = coords.iter()
        .map(|pair| {
            let x = pair[0].as_f64().ok_or("coordinate x must be a number")?;
            let y = pair[1].as_f64().ok_or("coordinate y must be a number")?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>, String>>()?;

    // Ensure ring is closed (first point == last point)
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last {
            points.push(first);
        }
    }
    Ok(LineString(points))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn collection(features: Vec<Value>) -> Vec<u8> {
        serde_json::to_vec(&json!({ "type": "FeatureCollection", "features": features })).unwrap()
    }

    #[test]
    fn geoid_pattern_compiles() {
        assert!(GEOID.is_ok());
    }

    #[test]
    fn parses_geoid_forms() {
        assert_eq!(parse_geoid(&json!(" 54039000100 ")), Some(GeoId::new("54039000100")));
        assert_eq!(parse_geoid(&json!(54039000100u64)), Some(GeoId::new("54039000100")));
        assert_eq!(parse_geoid(&json!("1400000US54039000100")), Some(GeoId::new("54039000100")));
        assert_eq!(parse_geoid(&json!("54-039")), None);
        assert_eq!(parse_geoid(&json!(5403.5)), None);
        assert_eq!(parse_geoid(&Value::Null), None);
    }

    #[test]
    fn reads_polygon_and_multipolygon_tracts() {
        let bytes = collection(vec![
            json!({
                "type": "Feature",
                "properties": { "GEOID": "54039000100", "NAME": "1", "ALAND": 2500000, "NAMELSADCO": "Kanawha County" },
                "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1]]] }
            }),
            json!({
                "type": "Feature",
                "properties": { "GEO_ID": "1400000US54039000200", "NAME": 2 },
                "geometry": { "type": "MultiPolygon", "coordinates": [
                    [[[0, 0], [1, 0], [1, 1], [0, 0]]],
                    [[[5, 5], [6, 5], [6, 6], [5, 5]], [[5.2, 5.2], [5.4, 5.2], [5.4, 5.4], [5.2, 5.2]]]
                ] }
            }),
        ]);
        let features = read_features(&bytes, GeoType::Tract, "tract geometry").unwrap();
        assert_eq!(features.len(), 2);

        let first = &features[0];
        assert_eq!(first.parent_region_id, Some(GeoId::new("54039")));
        assert_eq!(first.area_sq_km(), Some(2.5));
        assert_eq!(first.parent_label.as_deref(), Some("Kanawha County"));
        assert_eq!(first.boundary.0[0].exterior().0.len(), 5); // closed

        let second = &features[1];
        assert_eq!(second.id.id(), "54039000200");
        assert_eq!(&*second.name, "2");
        assert_eq!(second.boundary.0.len(), 2);
        assert_eq!(second.boundary.0[1].interiors().len(), 1);
    }

    #[test]
    fn rejects_feature_without_geoid() {
        let bytes = collection(vec![json!({
            "type": "Feature",
            "properties": { "NAME": "Nowhere" },
            "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1]]] }
        })]);
        let err = read_features(&bytes, GeoType::County, "county geometry").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { what: "county geometry", .. }));
    }

    #[test]
    fn rejects_unsupported_geometry() {
        let bytes = collection(vec![json!({
            "type": "Feature",
            "properties": { "GEOID": "54039" },
            "geometry": { "type": "Point", "coordinates": [0, 0] }
        })]);
        assert!(read_features(&bytes, GeoType::County, "county geometry").is_err());
    }

    #[test]
    fn rejects_non_collection() {
        let bytes = serde_json::to_vec(&json!([1, 2, 3])).unwrap();
        assert!(read_features(&bytes, GeoType::County, "county geometry").is_err());
        assert!(matches!(
            read_features(b"{oops", GeoType::County, "county geometry"),
            Err(LoadError::Json { .. })
        ));
    }

    #[test]
    fn reads_speed_tiles() {
        let bytes = collection(vec![json!({
            "type": "Feature",
            "properties": {
                "download_mbps": 48.2, "upload_mbps": 9.1, "ping_ms": 31,
                "provider": "Frontier", "NAMELSADCO": "Wayne County", "tests": 14, "color": "#fee08b"
            },
            "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]] }
        })]);
        let tiles = read_speed_tiles(&bytes).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].download_mbps, 48.2);
        assert_eq!(tiles[0].ping_ms, Some(31.0));
        assert_eq!(tiles[0].tests, Some(14));
        assert_eq!(tiles[0].provider.as_deref(), Some("Frontier"));
    }

    #[test]
    fn tile_without_speed_is_malformed() {
        let bytes = collection(vec![json!({
            "type": "Feature",
            "properties": { "upload_mbps": 9.1 },
            "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]] }
        })]);
        assert!(read_speed_tiles(&bytes).is_err());
    }
}
