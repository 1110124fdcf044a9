use ahash::AHashMap;
use tracing::warn;

use crate::{broadband::MetricRecord, types::GeoId};

/// Lookup from region identifier to its metric record.
/// Scratch state for a single enrichment pass.
#[derive(Debug, Clone, Default)]
pub struct IdentifierIndex {
    by_id: AHashMap<GeoId, MetricRecord>,
    replaced: usize,
}

impl IdentifierIndex {
    /// Index `records` by region id. When an id repeats, the later record wins.
    pub fn build(records: &[MetricRecord]) -> Self {
        let mut by_id = AHashMap::with_capacity(records.len());
        let mut replaced = 0;
        for record in records {
            if by_id.insert(record.region_id.clone(), record.clone()).is_some() {
                replaced += 1;
            }
        }
        if replaced > 0 {
            warn!(replaced, "metric records with repeated region ids; later records win");
        }
        Self { by_id, replaced }
    }

    #[inline] pub fn get(&self, id: &GeoId) -> Option<&MetricRecord> { self.by_id.get(id) }

    #[inline] pub fn len(&self) -> usize { self.by_id.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.by_id.is_empty() }

    /// Number of records overwritten by a later record with the same id.
    #[inline] pub fn replaced(&self) -> usize { self.replaced }

    /// Iterate over indexed region ids (arbitrary order).
    pub fn ids(&self) -> impl Iterator<Item = &GeoId> + '_ { self.by_id.keys() }
}
