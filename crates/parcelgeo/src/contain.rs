use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Coord, MultiPolygon};

/// How a point lying exactly on a polygon boundary is classified.
///
/// Containment is planar: longitude is `x`, latitude is `y`, and no
/// projection or curvature correction is applied.  At neighborhood scale the
/// distortion is negligible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Containment {
    /// Boundary points are inside (the closure of the polygon).
    #[default]
    Closed,
    /// Boundary points are outside (the interior only).
    Open,
}

impl Containment {
    /// Whether a point with the given position relative to a polygon counts
    /// as contained under this convention.
    #[inline]
    pub fn accepts(self, pos: CoordPos) -> bool {
        match (self, pos) {
            (_, CoordPos::Inside) => true,
            (Containment::Closed, CoordPos::OnBoundary) => true,
            _ => false,
        }
    }
}

/// Returns `true` if `coord` (lon, lat) lies in `shape` under `convention`.
///
/// Holes are respected: a point inside an interior ring is outside the shape,
/// and a point on a hole's ring is on the boundary.
pub fn contains(shape: &MultiPolygon<f64>, coord: Coord<f64>, convention: Containment) -> bool {
    if !coord.x.is_finite() || !coord.y.is_finite() {
        return false;
    }
    convention.accepts(shape.coordinate_position(&coord))
}
