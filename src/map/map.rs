use crate::{map::MapLayer, types::GeoType};

/// Map holds the administrative geometry layers of the analysed region.
#[derive(Debug)]
pub struct Map {
    pub layers: [MapLayer; GeoType::COUNT],
}

impl Default for Map {
    fn default() -> Self {
        Self { layers: GeoType::ALL.map(MapLayer::new) }
    }
}

impl Map {
    /// Get a reference to a specific map layer by geographic type.
    pub fn get_layer(&self, ty: GeoType) -> &MapLayer {
        &self.layers[ty as usize]
    }

    /// Set a specific map layer, replacing any existing data for that geographic type.
    pub fn set_layer(&mut self, layer: MapLayer) {
        let ty = layer.ty;
        self.layers[ty as usize] = layer;
    }

    #[inline] pub fn counties(&self) -> &MapLayer { self.get_layer(GeoType::County) }

    #[inline] pub fn tracts(&self) -> &MapLayer { self.get_layer(GeoType::Tract) }
}
