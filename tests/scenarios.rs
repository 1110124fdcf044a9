use geo::{polygon, MultiPolygon};
use openbroadband::{compute, enrich, GeoId, GeoType, GeometryFeature, IdentifierIndex, LayerName, LayerState, MetricRecord, Tier};

fn record(id: &str, down: f64, population: u64) -> MetricRecord {
    MetricRecord {
        region_id: GeoId::new(id),
        county_fips: Some(id[2..5].to_string()),
        name: None,
        max_down_mbps: down,
        max_up_mbps: down / 10.0,
        tier: Tier::classify(down),
        provider_count: 1,
        population_estimate: population,
        percent_covered: 100.0,
        color_hint: None,
    }
}

fn tract(id: &str, x: f64) -> std::sync::Arc<GeometryFeature> {
    let boundary = MultiPolygon(vec![polygon![
        (x: x, y: 0.0), (x: x + 1.0, y: 0.0), (x: x + 1.0, y: 1.0), (x: x, y: 0.0),
    ]]);
    std::sync::Arc::new(GeometryFeature::new(GeoType::Tract, GeoId::new(id), id, boundary))
}

const A: &str = "54039000100";
const B: &str = "54039000200";
const C: &str = "54039000300";

fn three_tracts() -> (Vec<std::sync::Arc<GeometryFeature>>, Vec<MetricRecord>) {
    (vec![tract(A, 0.0), tract(B, 1.0), tract(C, 2.0)], vec![record(A, 10.0, 100), record(B, 30.0, 200)])
}

#[test]
fn three_tracts_at_25_mbps() {
    let (features, records) = three_tracts();
    let enriched = enrich(&features, &IdentifierIndex::build(&records));
    assert!(enriched[0].has_data());
    assert!(enriched[1].has_data());
    assert!(!enriched[2].has_data());
    assert_eq!(enriched[2].max_down_mbps(), None);

    let stats = compute(&records, 25.0);
    assert_eq!(stats.below_threshold, 1);
    assert_eq!(stats.no_service, 0);
    assert_eq!(stats.total_population, 300);
    assert_eq!(stats.underserved_population, 100);
    assert_eq!(stats.underserved_percent, 33);
}

#[test]
fn three_tracts_at_50_mbps() {
    let (_, records) = three_tracts();
    let stats = compute(&records, 50.0);
    assert_eq!(stats.below_threshold, 2);
    assert_eq!(stats.underserved_percent, 100);
}

#[test]
fn empty_metric_set_is_all_zero() {
    let stats = compute(&[], 25.0);
    assert_eq!(stats.total_regions, 0);
    assert_eq!(stats.below_threshold, 0);
    assert_eq!(stats.avg_speed_mbps, 0);
    assert_eq!(stats.underserved_percent, 0);
    assert_eq!(stats.high_speed_percent(), 0);
}

#[test]
fn zero_population_percent_is_zero() {
    let records = vec![record(A, 5.0, 0), record(B, 0.0, 0)];
    assert_eq!(compute(&records, 25.0).underserved_percent, 0);
}

#[test]
fn below_threshold_is_monotonic() {
    let records: Vec<MetricRecord> = [0.0, 3.5, 10.0, 24.9, 25.0, 50.0, 99.0, 100.0, 940.0]
        .iter()
        .enumerate()
        .map(|(i, &down)| record(&format!("540390{:05}", i), down, 10 * (i as u64 + 1)))
        .collect();

    let mut previous = 0;
    for threshold in 1..=100 {
        let stats = compute(&records, threshold as f64);
        assert!(stats.below_threshold >= previous, "threshold {threshold}");
        assert!(stats.underserved_percent <= 100);
        previous = stats.below_threshold;
    }
}

#[test]
fn enrichment_is_idempotent() {
    let (features, records) = three_tracts();
    let index = IdentifierIndex::build(&records);
    let once = enrich(&features, &index);
    let twice = enrich(&once, &index);
    assert_eq!(once, twice);

    let other = IdentifierIndex::build(&[record(C, 60.0, 50)]);
    let reenriched = enrich(&once, &other);
    assert!(!reenriched[0].has_data());
    assert_eq!(reenriched[2].max_down_mbps(), Some(60.0));
}

#[test]
fn duplicate_ids_last_record_wins() {
    let records = vec![record(A, 10.0, 100), record(B, 30.0, 200), record(A, 75.0, 120)];
    let index = IdentifierIndex::build(&records);
    assert_eq!(index.len(), 2);
    assert_eq!(index.get(&GeoId::new(A)).map(|r| r.max_down_mbps), Some(75.0));
}

#[test]
fn hiding_highlight_does_not_restore_layers() {
    let mut state = LayerState::default();
    state.toggle(LayerName::BroadbandChoropleth);
    state.toggle(LayerName::Tracts);

    state.show_underserved_highlight();
    assert!(state.is_visible(LayerName::UnderservedHighlight));
    assert!(!state.is_visible(LayerName::BroadbandChoropleth));
    assert!(!state.is_visible(LayerName::Tracts));

    state.hide_underserved_highlight();
    assert!(!state.is_visible(LayerName::UnderservedHighlight));
    assert!(!state.is_visible(LayerName::BroadbandChoropleth));
    assert!(!state.is_visible(LayerName::Tracts));
    assert!(state.is_visible(LayerName::Counties));
}
