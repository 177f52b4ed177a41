use serde::{Deserialize, Serialize};

/// Average days per year, including leap days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Sales older than this many years do not count as comparables.
pub const STALE_AFTER_YEARS: f64 = 5.0;

/// Scores how much a sale still says about today's value, given its age.
///
/// Implementations return a factor in `0.0..=1.0`; `0.0` removes the sale
/// from a blend entirely (no value, no weight).  Non-finite ages score `0.0`.
pub trait RecencyPolicy: Send + Sync {
    /// Factor for a sale `years_since_sale` years before the valuation date.
    fn factor(&self, years_since_sale: f64) -> f64;
}

/// Full weight up to `max_years`, none after.  Sales dated after the
/// valuation date count at full weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HardCutoff {
    pub max_years: f64,
}

impl Default for HardCutoff {
    fn default() -> Self { Self { max_years: STALE_AFTER_YEARS } }
}

impl RecencyPolicy for HardCutoff {
    fn factor(&self, years_since_sale: f64) -> f64 {
        if !years_since_sale.is_finite() || years_since_sale > self.max_years { 0.0 } else { 1.0 }
    }
}

/// Weight falls linearly from 1 at the sale date to 0 at `max_years`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearDecay {
    pub max_years: f64,
}

impl Default for LinearDecay {
    fn default() -> Self { Self { max_years: STALE_AFTER_YEARS } }
}

impl RecencyPolicy for LinearDecay {
    fn factor(&self, years_since_sale: f64) -> f64 {
        if !years_since_sale.is_finite() || years_since_sale > self.max_years || self.max_years <= 0.0 {
            return 0.0;
        }
        (1.0 - years_since_sale / self.max_years).clamp(0.0, 1.0)
    }
}

/// Serializable choice of recency policy, as read from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Recency {
    HardCutoff(HardCutoff),
    LinearDecay(LinearDecay),
}

impl Default for Recency {
    fn default() -> Self { Recency::HardCutoff(HardCutoff::default()) }
}

impl RecencyPolicy for Recency {
    fn factor(&self, years_since_sale: f64) -> f64 {
        match self {
            Recency::HardCutoff(policy) => policy.factor(years_since_sale),
            Recency::LinearDecay(policy) => policy.factor(years_since_sale),
        }
    }
}
