use parcelgeo::{Containment, DistanceMetric};
use serde::{Deserialize, Serialize};

use crate::error::{AppraisalError, Result};
use crate::locality::{LocalityEngine, DEFAULT_RADIUS_MILES};
use crate::valuation::{CompWeights, Recency};

/// Market averages for the area around the target.  A method whose input is
/// missing is left out of the valuation summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketAssumptions {
    /// Construction cost per square foot.
    pub replacement_cost_per_sqft: Option<f64>,
    pub gross_rent_multiplier: Option<f64>,
    /// Capitalization rate as a fraction (0.06 for 6%).
    pub cap_rate: Option<f64>,
}

/// Rent roll of the target property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncomeProfile {
    /// Trailing-twelve-month average rent per unit, per month.
    pub avg_monthly_rent: f64,
    pub units: u32,
    /// Expected occupancy as a fraction.
    #[serde(default = "IncomeProfile::default_occupancy")]
    pub occupancy: f64,
    /// Operating expenses as a fraction of gross income.
    pub expense_ratio: f64,
}

impl IncomeProfile {
    fn default_occupancy() -> f64 { 0.9 }
}

/// Parameters of an appraisal run.  Every field has a default, so an empty
/// JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppraisalConfig {
    /// Search radius for comparables outside the neighborhood, in miles.
    pub radius_miles: f64,
    pub weights: CompWeights,
    pub recency: Recency,
    pub distance: DistanceMetric,
    pub containment: Containment,
    pub market: MarketAssumptions,
    pub income: Option<IncomeProfile>,
}

impl Default for AppraisalConfig {
    fn default() -> Self {
        Self {
            radius_miles: DEFAULT_RADIUS_MILES,
            weights: CompWeights::default(),
            recency: Recency::default(),
            distance: DistanceMetric::default(),
            containment: Containment::default(),
            market: MarketAssumptions::default(),
            income: None,
        }
    }
}

impl AppraisalConfig {
    /// Locality engine configured with this distance model and boundary convention.
    pub fn locality_engine(&self) -> LocalityEngine {
        LocalityEngine::new(self.distance, self.containment)
    }

    /// Reject values the engines would otherwise turn into nonsense.
    pub fn validate(&self) -> Result<()> {
        if !self.radius_miles.is_finite() || self.radius_miles < 0.0 {
            return Err(AppraisalError::InvalidInput(
                format!("radius_miles must be finite and non-negative, got {}", self.radius_miles)));
        }
        self.weights.validate()?;
        if let Some(income) = &self.income {
            for (name, value) in [("occupancy", income.occupancy), ("expense_ratio", income.expense_ratio)] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(AppraisalError::InvalidInput(format!("{name} must be in [0, 1], got {value}")));
                }
            }
        }
        Ok(())
    }
}
