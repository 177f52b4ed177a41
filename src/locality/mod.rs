mod engine;
mod neighborhood;

pub use engine::{
    classify, is_inside, properties_in_neighborhood, properties_within_radius,
    Locality, LocalityEngine, DEFAULT_RADIUS_MILES,
};
pub use neighborhood::Neighborhood;
