#![doc = "OpenAppraise public API"]
mod common;
mod config;
mod error;
mod locality;
mod property;
mod valuation;

#[doc(inline)]
pub use property::{Property, PropertyId, PropertySet};

#[doc(inline)]
pub use locality::{
    classify, is_inside, properties_in_neighborhood, properties_within_radius,
    Locality, LocalityEngine, Neighborhood, DEFAULT_RADIUS_MILES,
};

#[doc(inline)]
pub use valuation::{
    appraise, appraised_value, blend, blended_value_per_area, cap_rate_value, gross_income,
    gross_rent_multiplier_value, net_operating_income, replacement_cost, time_since_sale,
    weighted_value_per_area, weighted_value_per_area_with, Blend, CompGroup, CompWeights,
    Comparable, HardCutoff, LinearDecay, Method, Recency, RecencyPolicy, ValuationRow,
    ValuationSummary, DAYS_PER_YEAR, STALE_AFTER_YEARS,
};

#[doc(inline)]
pub use config::{AppraisalConfig, IncomeProfile, MarketAssumptions};

#[doc(inline)]
pub use error::{AppraisalError, Result};

#[doc(inline)]
pub use common::{
    read_config, read_neighborhood, read_neighborhood_from_bytes, read_properties,
    read_properties_from_bytes,
};

#[doc(inline)]
pub use parcelgeo::{Containment, DistanceMetric};
