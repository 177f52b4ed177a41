// Integration tests for the radius pre-filter: the R-tree envelope must never
// drop a point that the exact distance test accepts.

use geo::{Coord, Point};
use parcelgeo::{distance_miles, DistanceMetric, PointIndex};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn scatter(center: Coord<f64>, spread: f64, n: usize, seed: u64) -> Vec<Coord<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| Coord {
        x: center.x + rng.random_range(-spread..spread),
        y: center.y + rng.random_range(-spread..spread),
    }).collect()
}

fn exact(points: &[Coord<f64>], center: Coord<f64>, miles: f64, metric: DistanceMetric) -> Vec<usize> {
    points.iter().enumerate()
        .filter(|(_, c)| distance_miles(Point::from(center), Point::from(**c), metric) <= miles)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn prefilter_is_a_superset_at_mid_latitude() {
    let center = Coord { x: -80.8588, y: 35.2126 };
    let points = scatter(center, 0.05, 2_000, 1);
    let index = PointIndex::new(points.iter().copied());

    for miles in [0.25, 0.5, 1.0, 2.0] {
        let candidates = index.candidates_within(center, miles);
        for metric in [DistanceMetric::Geodesic, DistanceMetric::Haversine] {
            for hit in exact(&points, center, miles, metric) {
                assert!(candidates.binary_search(&hit).is_ok(), "dropped {hit} at {miles} mi");
            }
        }
    }
}

#[test]
fn prefilter_is_a_superset_at_high_latitude() {
    let center = Coord { x: 25.0, y: 70.0 };
    let points = scatter(center, 0.2, 2_000, 2);
    let index = PointIndex::new(points.iter().copied());

    let candidates = index.candidates_within(center, 5.0);
    for hit in exact(&points, center, 5.0, DistanceMetric::Geodesic) {
        assert!(candidates.binary_search(&hit).is_ok(), "dropped {hit}");
    }
}

#[test]
fn prefilter_prunes_distant_points() {
    let center = Coord { x: -80.8588, y: 35.2126 };
    let far = Coord { x: -78.6382, y: 35.7796 }; // Raleigh, ~130 mi away
    let index = PointIndex::new(vec![center, far]);
    assert_eq!(index.candidates_within(center, 1.0), vec![0]);
}
