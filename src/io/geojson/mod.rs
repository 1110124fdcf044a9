//! GeoJSON reading and writing.

mod read;
mod write;

pub(crate) use read::*;
pub use write::{enriched_to_geojson, tiles_to_geojson};
