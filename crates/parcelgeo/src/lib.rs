pub mod contain;
pub mod distance;
pub mod index;
pub mod ring;

pub use contain::{contains, Containment};
pub use distance::{distance_miles, DistanceMetric, METERS_PER_MILE};
pub use index::{envelope_for_radius, PointIndex};
pub use ring::{polygon_from_ring, GeoError};
