//! Provider-reported broadband metrics and their join onto tract geometry.

mod enrich;
mod index;
mod record;

pub use enrich::{enrich, EnrichedFeature, HasGeometry};
pub use index::IdentifierIndex;
pub use record::MetricRecord;
