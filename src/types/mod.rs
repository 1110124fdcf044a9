mod geo_id;
mod geo_type;
mod tier;

pub use geo_id::GeoId;
pub use geo_type::GeoType;
pub use tier::Tier;
