mod feature;
mod layer;
mod map;

pub use feature::GeometryFeature;
pub use layer::MapLayer;
pub use map::Map;
