use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use super::geo_type::GeoType;

/// Stable region identifier shared by geometry features and metric records.
/// Keep the original GEOID text (with leading zeros) but avoid repeated owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoId(Arc<str>); // e.g., "54039" for a county, "54039000100" for a tract

impl GeoId {
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    #[inline] pub fn id(&self) -> &str { &self.0 }

    /// Returns the `GeoId` of the enclosing region at `parent_ty`
    /// by truncating this GeoId's string to the correct prefix length.
    /// Returns `None` if the id is not longer than the parent prefix.
    pub fn to_parent(&self, parent_ty: GeoType) -> Option<GeoId> {
        let len = parent_ty.id_len();
        (self.0.len() > len && self.0.is_char_boundary(len))
            .then(|| GeoId(Arc::from(&self.0[..len])))
    }
}

impl fmt::Display for GeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GeoId {
    fn from(id: &str) -> Self { GeoId::new(id) }
}
