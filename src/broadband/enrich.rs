use std::sync::Arc;

use tracing::debug;

use crate::{broadband::{IdentifierIndex, MetricRecord}, map::GeometryFeature};

/// Anything that carries a geometry feature and can be (re-)enriched.
pub trait HasGeometry {
    fn geometry(&self) -> &Arc<GeometryFeature>;
}

impl HasGeometry for Arc<GeometryFeature> {
    fn geometry(&self) -> &Arc<GeometryFeature> { self }
}

/// A geometry feature joined with its metric record, if one matched.
/// `metric == None` means "no data", which is distinct from a measured zero speed.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedFeature {
    pub feature: Arc<GeometryFeature>,
    pub metric: Option<MetricRecord>,
}

impl HasGeometry for EnrichedFeature {
    fn geometry(&self) -> &Arc<GeometryFeature> { &self.feature }
}

impl EnrichedFeature {
    #[inline] pub fn has_data(&self) -> bool { self.metric.is_some() }

    #[inline] pub fn max_down_mbps(&self) -> Option<f64> { self.metric.as_ref().map(|m| m.max_down_mbps) }

    #[inline] pub fn max_up_mbps(&self) -> Option<f64> { self.metric.as_ref().map(|m| m.max_up_mbps) }
}

/// Join metric records onto features by region id, preserving feature order.
/// Only the geometry of each input is read, so prior enrichment never leaks into the output.
pub fn enrich<F: HasGeometry>(features: &[F], index: &IdentifierIndex) -> Vec<EnrichedFeature> {
    let enriched: Vec<EnrichedFeature> = features.iter()
        .map(|f| {
            let feature = f.geometry().clone();
            let metric = index.get(&feature.id).cloned();
            EnrichedFeature { feature, metric }
        })
        .collect();

    debug!(
        features = enriched.len(),
        matched = enriched.iter().filter(|f| f.has_data()).count(),
        "[broadband::enrich] joined metrics onto features"
    );
    enriched
}
