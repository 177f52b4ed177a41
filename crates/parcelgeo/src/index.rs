use geo::{Coord, Rect};
use rstar::{RTree, RTreeObject, AABB};

use crate::distance::METERS_PER_MILE;

/// Fewest metres spanned by one degree of latitude on WGS-84 (at the
/// equator); also a lower bound for the spherical model.
const MIN_METERS_PER_DEGREE: f64 = 110_574.0;

/// Slack applied to envelope half-widths so rounding never excludes a point
/// the exact distance test would accept.
const ENVELOPE_MARGIN: f64 = 1.01;

/// A point in the R-tree, associated with a caller-side record by index.
#[derive(Debug, Clone)]
struct IndexedPoint {
    idx: usize,
    coord: [f64; 2],
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.coord)
    }
}

/// A read-only R-tree over (lon, lat) points, used to pre-filter radius
/// queries before the exact distance test.
#[derive(Debug, Clone)]
pub struct PointIndex {
    rtree: RTree<IndexedPoint>,
    len: usize,
}

impl PointIndex {
    /// Build an index over `coords`; the `i`-th coordinate is reported as
    /// index `i`.  Non-finite coordinates are skipped.
    pub fn new(coords: impl IntoIterator<Item = Coord<f64>>) -> Self {
        let points: Vec<IndexedPoint> = coords.into_iter().enumerate()
            .filter(|(_, c)| c.x.is_finite() && c.y.is_finite())
            .map(|(idx, c)| IndexedPoint { idx, coord: [c.x, c.y] })
            .collect();
        let len = points.len();
        Self { rtree: RTree::bulk_load(points), len }
    }

    /// Number of indexed points.
    #[inline] pub fn len(&self) -> usize { self.len }

    /// Check if the index holds no points.
    #[inline] pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Indices of all points inside `rect` (inclusive), in ascending order.
    pub fn within_rect(&self, rect: Rect<f64>) -> Vec<usize> {
        let envelope = AABB::from_corners(rect.min().into(), rect.max().into());
        let mut hits: Vec<usize> = self.rtree.locate_in_envelope_intersecting(&envelope)
            .map(|point| point.idx)
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Indices of every point that could lie within `radius_miles` of
    /// `center`, in ascending order.  A superset of the exact answer.
    pub fn candidates_within(&self, center: Coord<f64>, radius_miles: f64) -> Vec<usize> {
        self.within_rect(envelope_for_radius(center, radius_miles))
    }
}

/// A lon/lat rectangle guaranteed to enclose every point within
/// `radius_miles` of `center` under either distance model.
///
/// Falls back to the whole globe near the poles, across the antimeridian,
/// and for non-finite radii.
pub fn envelope_for_radius(center: Coord<f64>, radius_miles: f64) -> Rect<f64> {
    let world = Rect::new(Coord { x: -180.0, y: -90.0 }, Coord { x: 180.0, y: 90.0 });
    if !radius_miles.is_finite() || !center.x.is_finite() || !center.y.is_finite() {
        return world;
    }

    let radius_miles = radius_miles.max(0.0);
    let dlat = radius_miles * METERS_PER_MILE / MIN_METERS_PER_DEGREE * ENVELOPE_MARGIN;
    let max_abs_lat = center.y.abs() + dlat;
    if max_abs_lat >= 90.0 {
        return Rect::new(
            Coord { x: -180.0, y: (center.y - dlat).max(-90.0) },
            Coord { x: 180.0, y: (center.y + dlat).min(90.0) },
        );
    }

    let dlon = dlat / max_abs_lat.to_radians().cos();
    if dlon >= 180.0 || center.x - dlon < -180.0 || center.x + dlon > 180.0 {
        return Rect::new(
            Coord { x: -180.0, y: center.y - dlat },
            Coord { x: 180.0, y: center.y + dlat },
        );
    }

    Rect::new(
        Coord { x: center.x - dlon, y: center.y - dlat },
        Coord { x: center.x + dlon, y: center.y + dlat },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_index() {
        let index = PointIndex::new(Vec::new());
        assert!(index.is_empty());
        assert!(index.candidates_within(Coord { x: 0.0, y: 0.0 }, 10.0).is_empty());
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let index = PointIndex::new(vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: f64::NAN, y: 0.0 },
            Coord { x: 0.0, y: f64::INFINITY },
        ]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn rect_query_is_sorted_and_inclusive() {
        let index = PointIndex::new(vec![
            Coord { x: 2.0, y: 2.0 },
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 5.0, y: 5.0 },
        ]);
        let rect = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 2.0 });
        assert_eq!(index.within_rect(rect), vec![0, 1, 2]);
    }

    #[test]
    fn zero_radius_still_finds_coincident_point() {
        let c = Coord { x: -80.85, y: 35.21 };
        let index = PointIndex::new(vec![c, Coord { x: -80.84, y: 35.21 }]);
        assert_eq!(index.candidates_within(c, 0.0), vec![0]);
    }

    #[test]
    fn polar_envelope_spans_all_longitudes() {
        let rect = envelope_for_radius(Coord { x: 10.0, y: 89.99 }, 5.0);
        assert_eq!(rect.min().x, -180.0);
        assert_eq!(rect.max().x, 180.0);
        assert!(rect.max().y <= 90.0);
    }

    #[test]
    fn antimeridian_envelope_spans_all_longitudes() {
        let rect = envelope_for_radius(Coord { x: 179.999, y: 0.0 }, 5.0);
        assert_eq!(rect.min().x, -180.0);
        assert_eq!(rect.max().x, 180.0);
    }

    #[test]
    fn infinite_radius_covers_the_world() {
        let rect = envelope_for_radius(Coord { x: 0.0, y: 0.0 }, f64::INFINITY);
        assert_eq!(rect.min(), Coord { x: -180.0, y: -90.0 });
        assert_eq!(rect.max(), Coord { x: 180.0, y: 90.0 });
    }
}
