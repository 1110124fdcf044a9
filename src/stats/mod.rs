//! Statistics Engine: threshold-based and population-weighted coverage aggregates.

mod aggregate;
mod engine;
mod population;

pub use aggregate::{compute, AggregateStatistics, HIGH_SPEED_MBPS};
pub use engine::{StatEntry, StatisticsEngine, StatisticsView};
pub use population::{GeographicBreakdown, PopulationSummary};
