//! Layer/Filter State Manager: visibility flags and the active speed threshold.

mod filter;
mod layers;
mod state;

pub use filter::UnderservedFilter;
pub use layers::LayerName;
pub use state::{LayerState, VisibilitySnapshot, DEFAULT_THRESHOLD, MAX_THRESHOLD, MIN_THRESHOLD};
