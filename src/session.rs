use geo::Rect;
use tracing::{debug, info};

use crate::{
    broadband::{enrich, EnrichedFeature, IdentifierIndex},
    config::AnalysisConfig,
    dataset::Dataset,
    report::{DatasetInfo, ReportAssembler, ReportSummary},
    speedtest::{DiscrepancyFilter, SpeedTile},
    stats::{StatisticsEngine, StatisticsView},
    view::{LayerName, LayerState, VisibilitySnapshot},
};

/// Input events. Derived state is recomputed only in response to these.
#[derive(Debug)]
pub enum Event {
    /// A complete, validated dataset replaces the current one.
    DatasetLoaded(Box<Dataset>),
    /// Slider moved; the value is clamped to [1, 100].
    ThresholdChanged(i64),
    LayerToggled(LayerName),
    UnderservedHighlightShown,
    UnderservedHighlightHidden,
    /// County selected by name, or cleared.
    FocusChanged(Option<String>),
}

/// One analysis session: the loaded dataset, the layer state and everything derived from them.
/// Every event runs to completion before the next one is applied.
#[derive(Debug)]
pub struct Session {
    dataset: Dataset,
    tracts: Vec<EnrichedFeature>,
    stats: StatisticsEngine,
    layers: LayerState,
    focus: Option<String>,
}

impl Default for Session {
    fn default() -> Self { Self::new(&AnalysisConfig::default()) }
}

impl Session {
    /// Empty session with default layers and the configured starting threshold.
    pub fn new(config: &AnalysisConfig) -> Self {
        let layers = LayerState::with_threshold(config.default_threshold as i64);
        Self {
            dataset: Dataset::default(),
            tracts: Vec::new(),
            stats: StatisticsEngine::new(layers.threshold() as f64),
            layers,
            focus: None,
        }
    }

    /// Session with `dataset` already loaded.
    pub fn with_dataset(config: &AnalysisConfig, dataset: Dataset) -> Self {
        let mut session = Self::new(config);
        session.apply(Event::DatasetLoaded(Box::new(dataset)));
        session
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::DatasetLoaded(dataset) => {
                self.dataset = *dataset;
                self.reload();
            }
            Event::ThresholdChanged(value) => {
                let threshold = self.layers.set_threshold(value);
                self.stats.set_threshold(threshold as f64);
            }
            Event::LayerToggled(layer) => {
                self.layers.toggle(layer);
            }
            Event::UnderservedHighlightShown => self.layers.show_underserved_highlight(),
            Event::UnderservedHighlightHidden => self.layers.hide_underserved_highlight(),
            Event::FocusChanged(name) => {
                let name = name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
                if let Some(name) = &name {
                    if self.dataset.map.counties().find_by_name(name).is_none() {
                        debug!(county = %name, "focus county not found; no bounds to fit");
                    }
                }
                self.focus = name;
            }
        }
    }

    /// Rebuild the join and the statistics from the current dataset.
    fn reload(&mut self) {
        let index = IdentifierIndex::build(&self.dataset.metrics);
        let tract_layer = self.dataset.map.tracts();
        self.tracts = enrich(tract_layer.features(), &index);

        let unmatched = index.ids().filter(|id| !tract_layer.contains(id)).count();
        if unmatched > 0 {
            debug!(unmatched, "metric records without tract geometry; counted in statistics only");
        }

        self.stats.load(self.dataset.metrics.clone(), self.dataset.population.clone());
        info!(
            tracts = self.tracts.len(),
            matched = self.tracts.iter().filter(|f| f.has_data()).count(),
            "session recomputed"
        );
    }

    #[inline] pub fn dataset(&self) -> &Dataset { &self.dataset }

    /// Tract features joined with their metrics, in geometry order.
    #[inline] pub fn enriched_tracts(&self) -> &[EnrichedFeature] { &self.tracts }

    #[inline] pub fn stats(&self) -> &StatisticsEngine { &self.stats }

    /// What the statistics panel shows.
    pub fn statistics(&self) -> StatisticsView<'_> { self.stats.view() }

    #[inline] pub fn layers(&self) -> &LayerState { &self.layers }

    #[inline] pub fn threshold(&self) -> u32 { self.layers.threshold() }

    pub fn visibility(&self) -> VisibilitySnapshot { self.layers.snapshot() }

    /// Tracts the underserved highlight selects at the current threshold.
    pub fn underserved_tracts(&self) -> Vec<&EnrichedFeature> {
        self.layers.underserved_filter().select(&self.tracts)
    }

    /// Speed-test tiles below the high-speed cutoff.
    pub fn discrepancy_tiles(&self) -> Vec<&SpeedTile> {
        DiscrepancyFilter::default().select(&self.dataset.tiles).into_iter()
            .map(|i| &self.dataset.tiles[i])
            .collect()
    }

    #[inline] pub fn focus(&self) -> Option<&str> { self.focus.as_deref() }

    /// Bounding box of the focused county. `None` without a focus or for an unknown name.
    pub fn focus_bounds(&self) -> Option<Rect<f64>> {
        self.dataset.map.counties().bounds_by_name(self.focus.as_deref()?)
    }

    /// Enriched tracts whose bounding boxes intersect `rect`, e.g. the focus bounds.
    pub fn tracts_within(&self, rect: &Rect<f64>) -> Vec<&EnrichedFeature> {
        self.dataset.map.tracts().indices_within(rect).into_iter()
            .filter_map(|i| self.tracts.get(i))
            .collect()
    }

    /// County names for the search selector, sorted.
    pub fn county_names(&self) -> Vec<String> {
        self.dataset.map.counties().sorted_names().iter().map(|name| name.to_string()).collect()
    }

    /// Report snapshot of the current statistics, threshold and focus.
    pub fn report(&self, assembler: &ReportAssembler) -> ReportSummary {
        let focus = self.focus.as_deref()
            .map(|name| self.dataset.map.counties().find_by_name(name).map_or(name, |f| &*f.name));

        assembler.assemble(self.stats.legacy(), self.threshold(), focus)
            .with_population(self.dataset.population.clone())
            .with_dataset(DatasetInfo {
                metric_records: self.dataset.metrics.len(),
                speed_tiles: self.dataset.tiles.len(),
                speed_tests: self.dataset.speed_summary.as_ref().map(|s| s.total_tests),
                median_download_mbps: self.dataset.speed_summary.as_ref().map(|s| s.median_download_mbps),
            })
    }
}
