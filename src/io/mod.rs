//! IO module for format-specific reading and writing operations.
//!
//! Organised by format rather than domain:
//!
//! - `geojson` - geometry and speed-test tile payloads, enriched feature export
//! - `json` - metric records and pre-aggregated summaries
//! - `csv` - tabular metric export (and re-import of that layout)
//! - `color` - fill colours for the choropleth
//! - `output` - write-then-rename output files
//! - `load` - assembling a complete dataset from a data directory

pub(crate) mod color;
pub(crate) mod csv;
pub(crate) mod geojson;
pub(crate) mod json;
pub(crate) mod load;
pub(crate) mod output;
