mod comps;
mod methods;
mod recency;
mod summary;

pub use comps::{
    appraised_value, blend, blended_value_per_area, time_since_sale, weighted_value_per_area,
    weighted_value_per_area_with, Blend, CompGroup, CompWeights, Comparable,
};
pub use methods::{
    cap_rate_value, gross_income, gross_rent_multiplier_value, net_operating_income,
    replacement_cost,
};
pub use recency::{HardCutoff, LinearDecay, Recency, RecencyPolicy, DAYS_PER_YEAR, STALE_AFTER_YEARS};
pub use summary::{appraise, Method, ValuationRow, ValuationSummary};
