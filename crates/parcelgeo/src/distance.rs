use geo::{Distance, Geodesic, Haversine, Point};

/// International mile in metres.
pub const METERS_PER_MILE: f64 = 1609.344;

/// Great-circle distance model used for radius searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceMetric {
    /// Karney's geodesic on the WGS-84 ellipsoid (sub-millimetre accurate).
    #[default]
    Geodesic,
    /// Haversine formula on a sphere of mean Earth radius (~0.5% error).
    Haversine,
}

impl DistanceMetric {
    /// Distance in metres between two (lon, lat) points.
    pub fn meters(self, a: Point<f64>, b: Point<f64>) -> f64 {
        match self {
            DistanceMetric::Geodesic => Geodesic.distance(a, b),
            DistanceMetric::Haversine => Haversine.distance(a, b),
        }
    }
}

/// Distance in miles between two (lon, lat) points under `metric`.
#[inline]
pub fn distance_miles(a: Point<f64>, b: Point<f64>, metric: DistanceMetric) -> f64 {
    metric.meters(a, b) / METERS_PER_MILE
}
