use std::sync::Arc;

use crate::{broadband::MetricRecord, map::Map, speedtest::{SpeedTestSummary, SpeedTile}, stats::PopulationSummary};

/// Every payload the analysis works from, loaded and validated as a unit.
#[derive(Debug, Default)]
pub struct Dataset {
    pub map: Map,
    pub metrics: Arc<[MetricRecord]>,
    pub tiles: Vec<SpeedTile>,
    pub speed_summary: Option<SpeedTestSummary>,
    pub population: Option<PopulationSummary>,
}

impl Dataset {
    pub fn new(map: Map, metrics: Vec<MetricRecord>) -> Self {
        Self { map, metrics: metrics.into(), ..Default::default() }
    }

    pub fn with_tiles(mut self, tiles: Vec<SpeedTile>, summary: Option<SpeedTestSummary>) -> Self {
        self.tiles = tiles;
        self.speed_summary = summary;
        self
    }

    pub fn with_population(mut self, population: Option<PopulationSummary>) -> Self {
        self.population = population;
        self
    }
}
