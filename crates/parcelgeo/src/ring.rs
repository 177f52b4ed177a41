use geo::{Coord, LineString, Polygon};

/// Errors that can occur when building a polygon from raw coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate at position {0}")]
    NonFinite(usize),
    /// The ring has fewer than three distinct vertices.
    #[error("ring needs at least 3 distinct vertices, got {0}")]
    Degenerate(usize),
}

/// Build a polygon from an ordered ring of `(lon, lat)` pairs.
///
/// The ring is closed if the caller did not repeat the first vertex.
/// Consecutive duplicate vertices are collapsed before the size check.
pub fn polygon_from_ring(ring: &[(f64, f64)]) -> Result<Polygon<f64>, GeoError> {
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(ring.len() + 1);
    for (i, &(x, y)) in ring.iter().enumerate() {
        if !x.is_finite() || !y.is_finite() {
            return Err(GeoError::NonFinite(i));
        }
        let c = Coord { x, y };
        if coords.last() != Some(&c) {
            coords.push(c);
        }
    }

    // Drop an explicit closing vertex so it is not counted as distinct.
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }
    if coords.len() < 3 {
        return Err(GeoError::Degenerate(coords.len()));
    }

    coords.push(coords[0]);
    Ok(Polygon::new(LineString(coords), vec![]))
}
