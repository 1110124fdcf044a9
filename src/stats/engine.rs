use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::{broadband::MetricRecord, common::{trim_float, with_thousands}};
use super::{compute, AggregateStatistics, PopulationSummary};

/// Holds the current metric set and threshold, and the statistics derived from them.
/// Statistics are recomputed from scratch whenever either input changes.
#[derive(Debug, Clone)]
pub struct StatisticsEngine {
    records: Arc<[MetricRecord]>,
    threshold_mbps: f64,
    legacy: AggregateStatistics,
    population: Option<PopulationSummary>,
}

impl StatisticsEngine {
    pub fn new(threshold_mbps: f64) -> Self {
        Self {
            records: Arc::from(Vec::new()),
            threshold_mbps,
            legacy: compute(&[], threshold_mbps),
            population: None,
        }
    }

    /// Replace the metric set and the optional pre-aggregated summary, then recompute.
    pub fn load(&mut self, records: Arc<[MetricRecord]>, population: Option<PopulationSummary>) {
        self.records = records;
        self.population = population;
        self.recompute();
    }

    /// Replace the threshold, then recompute.
    pub fn set_threshold(&mut self, threshold_mbps: f64) {
        self.threshold_mbps = threshold_mbps;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.legacy = compute(&self.records, self.threshold_mbps);
        debug!(
            threshold = self.threshold_mbps,
            regions = self.legacy.total_regions,
            underserved_percent = self.legacy.underserved_percent,
            "[stats] recomputed statistics"
        );
    }

    #[inline] pub fn records(&self) -> &[MetricRecord] { &self.records }

    #[inline] pub fn threshold_mbps(&self) -> f64 { self.threshold_mbps }

    /// Statistics computed locally from the metric set.
    #[inline] pub fn legacy(&self) -> &AggregateStatistics { &self.legacy }

    #[inline] pub fn population(&self) -> Option<&PopulationSummary> { self.population.as_ref() }

    /// What to display: the pre-aggregated summary when present, otherwise the local statistics.
    pub fn view(&self) -> StatisticsView<'_> {
        match &self.population {
            Some(summary) => StatisticsView::PopulationWeighted(summary),
            None => StatisticsView::Legacy { stats: &self.legacy, threshold_mbps: self.threshold_mbps },
        }
    }
}

/// The two mutually exclusive presentations of the underserved-population question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatisticsView<'a> {
    PopulationWeighted(&'a PopulationSummary),
    Legacy { stats: &'a AggregateStatistics, threshold_mbps: f64 },
}

/// One cell of the statistics panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub value: String,
    pub label: String,
}

impl StatEntry {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

impl StatisticsView<'_> {
    pub fn title(&self) -> &'static str {
        match self {
            StatisticsView::PopulationWeighted(_) => "Population-Weighted Statistics",
            StatisticsView::Legacy { .. } => "Coverage Statistics",
        }
    }

    #[inline] pub fn is_population_weighted(&self) -> bool {
        matches!(self, StatisticsView::PopulationWeighted(_))
    }

    /// Headline cells of the panel.
    pub fn entries(&self) -> Vec<StatEntry> {
        match self {
            StatisticsView::PopulationWeighted(s) => vec![
                StatEntry::new(format!("{}%", trim_float(s.underserved_percent)), "Underserved Population"),
                StatEntry::new(with_thousands(s.underserved_population), "People Underserved"),
                StatEntry::new(trim_float(s.pop_weighted_median_speed), "Pop-Weighted Speed (Mbps)"),
                StatEntry::new(format!("{}%", trim_float(s.high_speed_percent)), "High-Speed Population"),
            ],
            StatisticsView::Legacy { stats, threshold_mbps } => vec![
                StatEntry::new(format!("{}%", stats.underserved_percent), format!("Pop. below {} Mbps", trim_float(*threshold_mbps))),
                StatEntry::new(stats.avg_speed_mbps.to_string(), "Avg Speed (Mbps)"),
                StatEntry::new(stats.no_service.to_string(), "Tracts w/ No Service"),
                StatEntry::new(format!("{}%", stats.high_speed_percent()), "Tracts w/ 100+ Mbps"),
            ],
        }
    }

    /// Extra lines shown under the population-weighted panel.
    pub fn breakdown(&self) -> Vec<String> {
        match self {
            StatisticsView::PopulationWeighted(s) => {
                let mut lines = Vec::new();
                if let Some(rural) = s.geographic_breakdown.rural_percent {
                    lines.push(format!("Rural: {}% of analyzed population", trim_float(rural)));
                }
                lines.push(format!("Total Analyzed: {} people", with_thousands(s.total_population)));
                lines
            }
            StatisticsView::Legacy { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{stats::GeographicBreakdown, types::{GeoId, Tier}};

    fn records() -> Arc<[MetricRecord]> {
        [("54001000100", 10.0, 100), ("54001000200", 30.0, 200)]
            .into_iter()
            .map(|(id, down, pop)| MetricRecord {
                region_id: GeoId::new(id),
                county_fips: None,
                name: None,
                max_down_mbps: down,
                max_up_mbps: 1.0,
                tier: Tier::classify(down),
                provider_count: 1,
                population_estimate: pop,
                percent_covered: 100.0,
                color_hint: None,
            })
            .collect()
    }

    fn summary() -> PopulationSummary {
        PopulationSummary {
            underserved_percent: 10.6,
            underserved_population: 189234,
            pop_weighted_median_speed: 87.4,
            high_speed_percent: 41.0,
            total_population: 1793716,
            geographic_breakdown: GeographicBreakdown { rural_percent: Some(51.3), ..Default::default() },
        }
    }

    #[test]
    fn threshold_change_replaces_statistics() {
        let mut engine = StatisticsEngine::new(25.0);
        engine.load(records(), None);
        assert_eq!(engine.legacy().below_threshold, 1);
        engine.set_threshold(50.0);
        assert_eq!(engine.legacy().below_threshold, 2);
        engine.set_threshold(25.0);
        assert_eq!(engine.legacy(), &compute(engine.records(), 25.0));
    }

    #[test]
    fn population_summary_takes_precedence() {
        let mut engine = StatisticsEngine::new(25.0);
        engine.load(records(), Some(summary()));
        let view = engine.view();
        assert!(view.is_population_weighted());
        assert_eq!(view.entries()[1], StatEntry::new("189,234", "People Underserved"));
        assert_eq!(view.breakdown()[0], "Rural: 51.3% of analyzed population");
        // Local statistics are still maintained underneath.
        assert_eq!(engine.legacy().underserved_percent, 33);
    }

    #[test]
    fn legacy_view_labels_threshold() {
        let mut engine = StatisticsEngine::new(40.0);
        engine.load(records(), None);
        let entries = engine.view().entries();
        assert_eq!(entries[0], StatEntry::new("100%", "Pop. below 40 Mbps"));
        assert_eq!(engine.view().title(), "Coverage Statistics");
    }
}
