use std::sync::Arc;

use geo::MultiPolygon;

use crate::types::{GeoId, GeoType};

/// An administrative region (county or tract) as loaded from a geometry payload.
/// Immutable once loaded; shared between layers and enriched views through `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryFeature {
    pub id: GeoId,
    pub ty: GeoType,
    pub name: Arc<str>,                 // Common name, e.g. "Kanawha" or "101.02"
    pub parent_region_id: Option<GeoId>, // Tract -> County
    pub parent_label: Option<Arc<str>>,  // Display name of the parent, e.g. "Kanawha County"
    pub boundary: MultiPolygon<f64>,
    pub area_sq_meters: Option<f64>,    // Land area
}

impl GeometryFeature {
    /// Build a feature, deriving the parent region from the GEOID prefix.
    pub fn new(ty: GeoType, id: GeoId, name: &str, boundary: MultiPolygon<f64>) -> Self {
        let parent_region_id = ty.parent().and_then(|parent| id.to_parent(parent));
        Self {
            id,
            ty,
            name: Arc::from(name),
            parent_region_id,
            parent_label: None,
            boundary,
            area_sq_meters: None,
        }
    }

    pub fn with_area(mut self, area_sq_meters: Option<f64>) -> Self {
        self.area_sq_meters = area_sq_meters;
        self
    }

    pub fn with_parent_label(mut self, label: Option<&str>) -> Self {
        self.parent_label = label.map(Arc::from);
        self
    }

    /// Land area in square kilometres, if known.
    pub fn area_sq_km(&self) -> Option<f64> {
        self.area_sq_meters.map(|m2| m2 / 1_000_000.0)
    }
}
