use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::{LayerName, UnderservedFilter};

pub const MIN_THRESHOLD: u32 = 1;
pub const MAX_THRESHOLD: u32 = 100;
pub const DEFAULT_THRESHOLD: u32 = 25;

/// Session-wide layer visibility and speed threshold.
/// Mutated only through its methods; consumers read a [`VisibilitySnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerState {
    visible: [bool; LayerName::COUNT],
    threshold: u32,
}

impl Default for LayerState {
    /// Counties visible, everything else hidden, threshold 25 Mbps.
    fn default() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD as i64)
    }
}

impl LayerState {
    /// Default visibility with a custom starting threshold (clamped).
    pub fn with_threshold(threshold: i64) -> Self {
        let mut visible = [false; LayerName::COUNT];
        visible[LayerName::Counties as usize] = true;
        Self { visible, threshold: clamp_threshold(threshold) }
    }

    #[inline] pub fn is_visible(&self, layer: LayerName) -> bool { self.visible[layer as usize] }

    #[inline] pub fn threshold(&self) -> u32 { self.threshold }

    /// Flip one layer, independent of all others. Returns the new visibility.
    pub fn toggle(&mut self, layer: LayerName) -> bool {
        let flag = &mut self.visible[layer as usize];
        *flag = !*flag;
        debug!(layer = layer.to_str(), visible = *flag, "[view] toggled layer");
        *flag
    }

    /// Store `value` clamped to [1, 100]. Returns the stored threshold.
    pub fn set_threshold(&mut self, value: i64) -> u32 {
        self.threshold = clamp_threshold(value);
        self.threshold
    }

    /// Show the underserved highlight, hiding the choropleth and tract layers so it is unobstructed.
    pub fn show_underserved_highlight(&mut self) {
        self.visible[LayerName::UnderservedHighlight as usize] = true;
        self.visible[LayerName::BroadbandChoropleth as usize] = false;
        self.visible[LayerName::Tracts as usize] = false;
    }

    /// Hide the underserved highlight. Layers hidden by [`Self::show_underserved_highlight`] stay hidden.
    pub fn hide_underserved_highlight(&mut self) {
        self.visible[LayerName::UnderservedHighlight as usize] = false;
    }

    /// Predicate for the underserved highlight at the current threshold.
    pub fn underserved_filter(&self) -> UnderservedFilter {
        UnderservedFilter::new(self.threshold as f64)
    }

    pub fn snapshot(&self) -> VisibilitySnapshot {
        VisibilitySnapshot {
            layers: LayerName::ALL.into_iter().map(|layer| (layer, self.is_visible(layer))).collect(),
            threshold: self.threshold,
        }
    }
}

fn clamp_threshold(value: i64) -> u32 {
    value.clamp(MIN_THRESHOLD as i64, MAX_THRESHOLD as i64) as u32
}

/// Read-only copy of the layer state handed to renderers and exporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilitySnapshot {
    pub layers: BTreeMap<LayerName, bool>,
    pub threshold: u32,
}

impl VisibilitySnapshot {
    /// Renderer layer ids with their visibility.
    pub fn render_visibility(&self) -> Vec<(&'static str, bool)> {
        self.layers.iter()
            .flat_map(|(layer, &visible)| layer.render_ids().iter().map(move |id| (*id, visible)))
            .collect()
    }
}
