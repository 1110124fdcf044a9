use geo::{BoundingRect, Coord, MultiPolygon, Rect};
use rstar::{RTree, AABB};

use crate::geom::BoundingBox;

/// Geometries is an indexed collection of MultiPolygons with an R-tree over their bounding boxes.
#[derive(Debug, Clone, Default)]
pub(crate) struct Geometries {
    shapes: Vec<MultiPolygon<f64>>,
    rtree: RTree<BoundingBox>,
}

impl Geometries {
    /// Construct a Geometries object from a vector of MultiPolygons.
    /// Empty shapes are kept (so indices line up) but are never returned by queries.
    pub(crate) fn new(polygons: Vec<MultiPolygon<f64>>) -> Self {
        Self {
            rtree: RTree::bulk_load(
                polygons.iter().enumerate()
                    .filter_map(|(i, polygon)| Some(BoundingBox::new(i, polygon.bounding_rect()?)))
                    .collect()
            ),
            shapes: polygons,
        }
    }

    /// Get the number of MultiPolygons.
    #[inline] pub(crate) fn len(&self) -> usize { self.shapes.len() }

    /// Bounding rectangle of a single shape.
    #[inline]
    pub(crate) fn bounds_of(&self, idx: usize) -> Option<Rect<f64>> {
        self.shapes.get(idx)?.bounding_rect()
    }

    /// Compute the bounding rectangle of all MultiPolygons.
    pub(crate) fn bounds(&self) -> Option<Rect<f64>> {
        merge_rects(self.shapes.iter().filter_map(|polygon| polygon.bounding_rect()))
    }

    /// Indices of shapes whose bounding boxes intersect `rect`, in ascending order.
    pub(crate) fn query_indices(&self, rect: &Rect<f64>) -> Vec<usize> {
        let envelope = AABB::from_corners(rect.min().into(), rect.max().into());
        let mut indices: Vec<usize> = self.rtree
            .locate_in_envelope_intersecting(&envelope)
            .map(|bbox| bbox.idx())
            .collect();
        indices.sort_unstable();
        indices
    }
}

/// Smallest rectangle covering every rectangle in `rects`.
fn merge_rects(rects: impl IntoIterator<Item = Rect<f64>>) -> Option<Rect<f64>> {
    rects.into_iter().reduce(|a, b| Rect::new(
        Coord {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coord {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        }
    ))
}
