use crate::broadband::{EnrichedFeature, MetricRecord};

/// Predicate selecting regions whose best download speed is below the active threshold.
/// Features without metric data never match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnderservedFilter {
    pub threshold_mbps: f64,
}

impl UnderservedFilter {
    pub fn new(threshold_mbps: f64) -> Self { Self { threshold_mbps } }

    #[inline]
    pub fn matches_record(&self, record: &MetricRecord) -> bool {
        record.is_below(self.threshold_mbps)
    }

    #[inline]
    pub fn matches(&self, feature: &EnrichedFeature) -> bool {
        feature.metric.as_ref().is_some_and(|m| self.matches_record(m))
    }

    /// Matching features, in input order.
    pub fn select<'a>(&self, features: &'a [EnrichedFeature]) -> Vec<&'a EnrichedFeature> {
        features.iter().filter(|f| self.matches(f)).collect()
    }
}
