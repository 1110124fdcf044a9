//! Crowdsourced speed-test tiles, sourced independently of the provider metrics.

mod tile;

pub use tile::{DiscrepancyFilter, SpeedTestSummary, SpeedTile};
