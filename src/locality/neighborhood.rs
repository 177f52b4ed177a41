use geo::{BoundingRect, Coord, MultiPolygon, Polygon, Rect};
use parcelgeo::{contains, polygon_from_ring, Containment};

use crate::error::{AppraisalError, Result};

/// A neighborhood boundary in (longitude, latitude) order.
///
/// Usually a single polygon; multi-part boundaries are accepted so that a
/// GeoJSON `MultiPolygon` can be used as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighborhood {
    shape: MultiPolygon<f64>,
}

impl Neighborhood {
    /// Build a neighborhood from an ordered ring of `(lon, lat)` pairs.
    /// The ring is closed automatically.
    pub fn from_ring(ring: &[(f64, f64)]) -> Result<Self> {
        Ok(Self { shape: MultiPolygon(vec![polygon_from_ring(ring)?]) })
    }

    /// Build a neighborhood from a single polygon, validating its rings.
    pub fn from_polygon(polygon: Polygon<f64>) -> Result<Self> {
        Self::from_multi_polygon(MultiPolygon(vec![polygon]))
    }

    /// Build a neighborhood from a multi-part boundary, validating every ring.
    pub fn from_multi_polygon(shape: MultiPolygon<f64>) -> Result<Self> {
        if shape.0.is_empty() {
            return Err(AppraisalError::InvalidGeometry("neighborhood has no polygons".into()));
        }
        let polygons = shape.0.iter()
            .map(|polygon| {
                let exterior = validated_ring(polygon.exterior().coords())?;
                let interiors = polygon.interiors().iter()
                    .map(|ring| validated_ring(ring.coords()))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Polygon::new(exterior, interiors))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { shape: MultiPolygon(polygons) })
    }

    /// Axis-aligned bounds in lon/lat.
    pub fn bounds(&self) -> Option<Rect<f64>> { self.shape.bounding_rect() }

    /// Closed containment: points on the boundary are inside.
    #[inline]
    pub fn contains(&self, coord: Coord<f64>) -> bool {
        contains(&self.shape, coord, Containment::Closed)
    }

    /// Containment under an explicit boundary convention.
    #[inline]
    pub fn contains_with(&self, coord: Coord<f64>, convention: Containment) -> bool {
        contains(&self.shape, coord, convention)
    }
}

fn validated_ring<'a>(coords: impl Iterator<Item = &'a Coord<f64>>) -> Result<geo::LineString<f64>> {
    let ring: Vec<(f64, f64)> = coords.map(|c| (c.x, c.y)).collect();
    let (exterior, _) = polygon_from_ring(&ring)?.into_inner();
    Ok(exterior)
}
