// Randomized checks of the locality invariants: the neighborhood and radius
// searches never share a property, and radius results respect the distance.

use std::collections::HashSet;

use chrono::NaiveDate;
use openappraise::{
    Containment, DistanceMetric, Locality, LocalityEngine, Neighborhood, Property, PropertyId,
    PropertySet,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_set(rng: &mut StdRng, n: i64) -> PropertySet {
    let sold = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let properties = (0..n)
        .map(|id| {
            // Snap a share of the points onto the polygon's edges.
            let mut lat = rng.random_range(35.17..35.25);
            let mut long = rng.random_range(-80.90..-80.82);
            if rng.random_bool(0.1) { long = -80.85; }
            if rng.random_bool(0.1) { lat = 35.20; }
            Property::new(id, format!("p{id}"), lat, long, 50_000.0, 10_000_000.0, sold)
        })
        .collect();
    PropertySet::new(properties).unwrap()
}

fn neighborhood() -> Neighborhood {
    Neighborhood::from_ring(&[
        (-80.870, 35.200), (-80.850, 35.200), (-80.850, 35.222), (-80.860, 35.226), (-80.870, 35.222),
    ]).unwrap()
}

fn engines() -> Vec<LocalityEngine> {
    let mut out = Vec::new();
    for metric in [DistanceMetric::Geodesic, DistanceMetric::Haversine] {
        for containment in [Containment::Closed, Containment::Open] {
            out.push(LocalityEngine::new(metric, containment));
        }
    }
    out
}

#[test]
fn neighborhood_and_radius_results_are_disjoint() {
    let mut rng = StdRng::seed_from_u64(2024);
    let set = random_set(&mut rng, 400);
    let region = neighborhood();

    for engine in engines() {
        for target in set.iter().filter(|p| engine.is_inside(p, &region)).take(20) {
            let inside: HashSet<PropertyId> = engine.properties_in_neighborhood(target.id, &set, &region)
                .unwrap().iter().map(|p| p.id).collect();
            for radius in [0.5, 1.0, 3.0] {
                let nearby = engine.properties_within_radius(target.id, &set, &region, radius).unwrap();
                assert!(nearby.iter().all(|p| !inside.contains(&p.id)), "{engine:?} r={radius}");
                assert!(nearby.iter().all(|p| p.id != target.id));
            }
        }
    }
}

#[test]
fn radius_search_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);
    let set = random_set(&mut rng, 300);
    let region = neighborhood();

    for engine in engines() {
        for target in set.iter().step_by(37) {
            let radius = 1.25;
            let found: Vec<PropertyId> = engine.properties_within_radius(target.id, &set, &region, radius)
                .unwrap().iter().map(|p| p.id).collect();
            let expected: Vec<PropertyId> = set.iter()
                .filter(|p| p.id != target.id)
                .filter(|p| !engine.is_inside(p, &region))
                .filter(|p| parcelgeo::distance_miles(target.point(), p.point(), engine.metric) <= radius)
                .map(|p| p.id)
                .collect();
            assert_eq!(found, expected, "{engine:?} target {}", target.id);
        }
    }
}

#[test]
fn classify_agrees_with_searches() {
    let mut rng = StdRng::seed_from_u64(99);
    let set = random_set(&mut rng, 200);
    let region = neighborhood();
    let engine = LocalityEngine::default();

    let target = set.iter().find(|p| engine.is_inside(p, &region)).unwrap();
    let classes = engine.classify(target.id, &set, &region, 1.0).unwrap();
    let inside: Vec<PropertyId> = engine.properties_in_neighborhood(target.id, &set, &region)
        .unwrap().iter().map(|p| p.id).collect();
    let nearby: Vec<PropertyId> = engine.properties_within_radius(target.id, &set, &region, 1.0)
        .unwrap().iter().map(|p| p.id).collect();

    let pick = |want: Locality| -> Vec<PropertyId> {
        classes.iter().filter(|(_, l)| *l == want).map(|(id, _)| *id).collect()
    };
    assert_eq!(pick(Locality::Neighborhood), inside);
    assert_eq!(pick(Locality::Radius), nearby);
    assert_eq!(classes.len(), set.len() - 1);
}
