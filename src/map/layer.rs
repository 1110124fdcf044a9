use std::{fmt, sync::Arc};

use ahash::AHashMap;
use geo::Rect;
use tracing::warn;

use crate::{geom::Geometries, map::GeometryFeature, types::{GeoId, GeoType}};

/// All features of one administrative level, with an id index and a spatial index.
pub struct MapLayer {
    pub ty: GeoType,
    features: Vec<Arc<GeometryFeature>>,
    index: AHashMap<GeoId, u32>, // Map between geo_ids and per-level contiguous indices
    geoms: Geometries,           // Per-level geometry store, indexed like `features`
}

impl MapLayer {
    pub fn new(ty: GeoType) -> Self {
        Self {
            ty,
            features: Vec::new(),
            index: AHashMap::new(),
            geoms: Geometries::default(),
        }
    }

    /// Build a layer from loaded features, preserving their order.
    /// If an id repeats, the index points at its first occurrence.
    pub fn from_features(ty: GeoType, features: Vec<GeometryFeature>) -> Self {
        let mut index = AHashMap::with_capacity(features.len());
        for (i, feature) in features.iter().enumerate() {
            if index.contains_key(&feature.id) {
                warn!(geo_id = %feature.id, level = ty.to_str(), "duplicate geometry id; keeping first");
                continue;
            }
            index.insert(feature.id.clone(), i as u32);
        }

        let geoms = Geometries::new(features.iter().map(|f| f.boundary.clone()).collect());
        Self {
            ty,
            features: features.into_iter().map(Arc::new).collect(),
            index,
            geoms,
        }
    }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    #[inline] pub fn features(&self) -> &[Arc<GeometryFeature>] { &self.features }

    pub fn get(&self, id: &GeoId) -> Option<&Arc<GeometryFeature>> {
        self.index.get(id).map(|&i| &self.features[i as usize])
    }

    pub fn contains(&self, id: &GeoId) -> bool { self.index.contains_key(id) }

    /// First feature whose name matches `name` (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Arc<GeometryFeature>> {
        self.position_by_name(name).map(|i| &self.features[i])
    }

    /// Bounding box of the feature named `name`.
    pub fn bounds_by_name(&self, name: &str) -> Option<Rect<f64>> {
        self.geoms.bounds_of(self.position_by_name(name)?)
    }

    /// Bounding box of the whole layer.
    pub fn bounds(&self) -> Option<Rect<f64>> { self.geoms.bounds() }

    /// Positions of features whose bounding boxes intersect `rect`, ascending.
    pub fn indices_within(&self, rect: &Rect<f64>) -> Vec<usize> {
        self.geoms.query_indices(rect)
    }

    /// Features whose bounding boxes intersect `rect`, in layer order.
    pub fn features_within(&self, rect: &Rect<f64>) -> Vec<&Arc<GeometryFeature>> {
        self.indices_within(rect).into_iter().map(|i| &self.features[i]).collect()
    }

    /// Feature names sorted alphabetically (the county selector list).
    pub fn sorted_names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<Arc<str>> = self.features.iter().map(|f| f.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.features.iter().position(|f| f.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Debug for MapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let with_area = self.features.iter().filter(|f| f.area_sq_meters.is_some()).count();
        let with_parent = self.features.iter().filter(|f| f.parent_region_id.is_some()).count();
        f.debug_struct("MapLayer")
            .field("ty", &self.ty)
            .field("features", &self.features.len())
            .field("indexed", &self.index.len())
            .field("shapes", &self.geoms.len())
            .field("with_area", &with_area)
            .field("with_parent", &with_parent)
            .field("bounds", &self.bounds())
            .finish()
    }
}
