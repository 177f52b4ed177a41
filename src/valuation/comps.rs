use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppraisalError, Result};
use crate::property::{Property, PropertyId, PropertySet};
use crate::valuation::recency::{HardCutoff, RecencyPolicy, DAYS_PER_YEAR};

/// Relative trust placed in each group of comparables.
///
/// The weights are independent; they are not required to sum to one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompWeights {
    pub neighborhood: f64,
    pub radius: f64,
}

impl Default for CompWeights {
    fn default() -> Self { Self { neighborhood: 0.7, radius: 0.3 } }
}

impl CompWeights {
    pub fn new(neighborhood: f64, radius: f64) -> Self { Self { neighborhood, radius } }

    /// Weight assigned to `group`.
    #[inline]
    pub fn of(&self, group: CompGroup) -> f64 {
        match group {
            CompGroup::Neighborhood => self.neighborhood,
            CompGroup::Radius => self.radius,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [("neighborhood", self.neighborhood), ("radius", self.radius)] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AppraisalError::InvalidInput(
                    format!("{name} weight must be finite and non-negative, got {weight}")));
            }
        }
        Ok(())
    }
}

/// Which search produced a comparable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompGroup {
    Neighborhood,
    Radius,
}

/// One comparable's contribution to a blended value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparable<'a> {
    pub property: &'a Property,
    pub group: CompGroup,
    pub group_weight: f64,
    /// Output of the recency policy for this sale.
    pub recency_factor: f64,
    /// `price * recency_factor * group_weight / area`.
    pub weighted_value: f64,
    /// Group weight added to the denominator; zero when `weighted_value` is zero.
    pub applied_weight: f64,
}

/// Result of blending two groups of comparables.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Blend<'a> {
    pub comparables: Vec<Comparable<'a>>,
    pub total_weighted_value: f64,
    pub total_applied_weight: f64,
    /// Blended value per square foot; zero when no comparable contributed.
    pub value_per_area: f64,
}

/// Fractional years from `sale_date` to `as_of`: elapsed days / 365.25.
/// Negative when the sale is dated after `as_of`.
pub fn time_since_sale(sale_date: NaiveDate, as_of: NaiveDate) -> f64 {
    (as_of - sale_date).num_days() as f64 / DAYS_PER_YEAR
}

/// Weighted value per square foot under the default five-year cliff:
/// zero for sales older than five years, else `price * group_weight / area`.
pub fn weighted_value_per_area(property: &Property, group_weight: f64, as_of: NaiveDate) -> f64 {
    weighted_value_per_area_with(&HardCutoff::default(), property, group_weight, as_of)
}

/// Weighted value per square foot with an explicit recency policy.
/// Properties without a positive area contribute zero.
pub fn weighted_value_per_area_with(
    policy: &(impl RecencyPolicy + ?Sized),
    property: &Property,
    group_weight: f64,
    as_of: NaiveDate,
) -> f64 {
    let factor = policy.factor(time_since_sale(property.last_sale_date, as_of));
    weighted(property, factor, group_weight)
}

fn weighted(property: &Property, factor: f64, group_weight: f64) -> f64 {
    if factor == 0.0 || !(property.square_feet > 0.0) {
        return 0.0;
    }
    property.last_sale_price * factor * group_weight / property.square_feet
}

/// Blend neighborhood and radius comparables into one value per square foot,
/// keeping every comparable's contribution.
///
/// A comparable adds its group weight to the denominator only when its
/// weighted value is non-zero, so stale or zero-price sales affect neither
/// side of the ratio.  The recency factor scales the numerator alone.
pub fn blend<'a>(
    neighborhood: &[&'a Property],
    radius: &[&'a Property],
    weights: CompWeights,
    policy: &(impl RecencyPolicy + ?Sized),
    as_of: NaiveDate,
) -> Blend<'a> {
    let groups = neighborhood.iter().map(|p| (*p, CompGroup::Neighborhood))
        .chain(radius.iter().map(|p| (*p, CompGroup::Radius)));

    let comparables: Vec<Comparable<'a>> = groups
        .map(|(property, group)| {
            let group_weight = weights.of(group);
            let recency_factor = policy.factor(time_since_sale(property.last_sale_date, as_of));
            let weighted_value = weighted(property, recency_factor, group_weight);
            let applied_weight = if weighted_value != 0.0 { group_weight } else { 0.0 };
            Comparable { property, group, group_weight, recency_factor, weighted_value, applied_weight }
        })
        .collect();

    let total_weighted_value: f64 = comparables.iter().map(|c| c.weighted_value).sum();
    let total_applied_weight: f64 = comparables.iter().map(|c| c.applied_weight).sum();
    let value_per_area = if total_applied_weight == 0.0 { 0.0 } else { total_weighted_value / total_applied_weight };

    Blend { comparables, total_weighted_value, total_applied_weight, value_per_area }
}

/// Blended value per square foot under the default five-year cliff.
/// Returns zero when no comparable contributes.
pub fn blended_value_per_area(
    neighborhood: &[&Property],
    radius: &[&Property],
    weights: CompWeights,
    as_of: NaiveDate,
) -> f64 {
    blend(neighborhood, radius, weights, &HardCutoff::default(), as_of).value_per_area
}

/// Target area times `value_per_area`.
pub fn appraised_value(target_id: PropertyId, properties: &PropertySet, value_per_area: f64) -> Result<f64> {
    let target = properties.find(target_id)?;
    Ok(target.square_feet * value_per_area)
}
