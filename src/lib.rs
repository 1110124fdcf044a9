#![doc = "OpenBroadband public API"]
mod broadband;
mod common;
mod config;
mod dataset;
mod error;
mod geom;
mod io;
mod map;
mod report;
mod session;
mod speedtest;
mod stats;
mod types;
mod view;

#[doc(inline)]
pub use types::{GeoId, GeoType, Tier};

#[doc(inline)]
pub use map::{GeometryFeature, Map, MapLayer};

#[doc(inline)]
pub use broadband::{enrich, EnrichedFeature, HasGeometry, IdentifierIndex, MetricRecord};

#[doc(inline)]
pub use speedtest::{DiscrepancyFilter, SpeedTestSummary, SpeedTile};

#[doc(inline)]
pub use stats::{compute, AggregateStatistics, GeographicBreakdown, PopulationSummary, StatEntry, StatisticsEngine, StatisticsView, HIGH_SPEED_MBPS};

#[doc(inline)]
pub use view::{LayerName, LayerState, UnderservedFilter, VisibilitySnapshot, DEFAULT_THRESHOLD, MAX_THRESHOLD, MIN_THRESHOLD};

#[doc(inline)]
pub use report::{DatasetInfo, ExportFileNames, ReportAssembler, ReportSummary};

#[doc(inline)]
pub use session::{Event, Session};

#[doc(inline)]
pub use config::{AnalysisConfig, SourceFiles};

#[doc(inline)]
pub use dataset::Dataset;

#[doc(inline)]
pub use error::LoadError;

#[doc(inline)]
pub use io::{
    csv::{read_metrics_csv, write_metrics_csv},
    geojson::{enriched_to_geojson, tiles_to_geojson},
    load::load_dataset,
    output::write_file,
};
