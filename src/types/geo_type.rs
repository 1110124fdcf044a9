use serde::{Deserialize, Serialize};

/// Administrative level of a geometry feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoType {
    County,     // County -> State
    Tract,      // Tract -> County
}

impl GeoType {
    pub const COUNT: usize = 2;
    pub const ALL: [GeoType; Self::COUNT] = [GeoType::County, GeoType::Tract];

    pub fn to_str(&self) -> &'static str {
        match self {
            GeoType::County => "county",
            GeoType::Tract => "tract",
        }
    }

    /// Length of a full census GEOID at this level (state + county [+ tract]).
    pub fn id_len(&self) -> usize {
        match self {
            GeoType::County => 5,
            GeoType::Tract => 11,
        }
    }

    /// Level of the enclosing region, if any is modelled.
    pub fn parent(&self) -> Option<GeoType> {
        match self {
            GeoType::County => None,
            GeoType::Tract => Some(GeoType::County),
        }
    }
}
