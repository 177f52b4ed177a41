use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::AppraisalConfig;
use crate::error::Result;
use crate::locality::Neighborhood;
use crate::property::{Property, PropertyId, PropertySet};
use crate::valuation::comps::{appraised_value, blend, Blend};
use crate::valuation::methods::{
    cap_rate_value, gross_income, gross_rent_multiplier_value, net_operating_income, replacement_cost,
};

/// A valuation approach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    ReplacementCost,
    GrossRentMultiplier,
    CapitalizationRate,
    SalesComparison,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::ReplacementCost => "Replacement Cost",
            Method::GrossRentMultiplier => "Gross Rent Multiplier",
            Method::CapitalizationRate => "Capitalization Rate",
            Method::SalesComparison => "Sales Comparison",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ValuationRow {
    pub method: Method,
    pub value: f64,
}

/// Every applicable valuation of one target, plus the comparables behind the
/// sales-comparison figure.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValuationSummary<'a> {
    pub target: &'a Property,
    pub as_of: NaiveDate,
    pub neighborhood_comps: Vec<PropertyId>,
    pub radius_comps: Vec<PropertyId>,
    pub sales_comparison: Blend<'a>,
    pub rows: Vec<ValuationRow>,
}

impl ValuationSummary<'_> {
    /// Value produced by `method`, if it was applicable.
    pub fn value(&self, method: Method) -> Option<f64> {
        self.rows.iter().find(|row| row.method == method).map(|row| row.value)
    }

    /// Unweighted mean of all rows; `None` when there are none.
    pub fn mean(&self) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        Some(self.rows.iter().map(|row| row.value).sum::<f64>() / self.rows.len() as f64)
    }
}

/// Appraise `target_id` with every method `config` has inputs for.
///
/// Sales comparison always runs: neighborhood comparables (the target must
/// be inside `neighborhood`), radius comparables outside it, blended under
/// the configured weights and recency policy.
pub fn appraise<'a>(
    target_id: PropertyId,
    properties: &'a PropertySet,
    neighborhood: &Neighborhood,
    config: &AppraisalConfig,
    as_of: NaiveDate,
) -> Result<ValuationSummary<'a>> {
    config.validate()?;
    let target = properties.find(target_id)?;
    let engine = config.locality_engine();

    let in_neighborhood = engine.properties_in_neighborhood(target_id, properties, neighborhood)?;
    let in_radius = engine.properties_within_radius(target_id, properties, neighborhood, config.radius_miles)?;
    let sales_comparison = blend(&in_neighborhood, &in_radius, config.weights, &config.recency, as_of);

    let mut rows = Vec::with_capacity(4);
    if let Some(cost) = config.market.replacement_cost_per_sqft {
        rows.push(ValuationRow { method: Method::ReplacementCost, value: replacement_cost(target.square_feet, cost) });
    }
    if let Some(income) = &config.income {
        let gross = gross_income(income.avg_monthly_rent, income.units, income.occupancy);
        if let Some(grm) = config.market.gross_rent_multiplier {
            rows.push(ValuationRow { method: Method::GrossRentMultiplier, value: gross_rent_multiplier_value(gross, grm) });
        }
        if let Some(cap_rate) = config.market.cap_rate {
            let noi = net_operating_income(gross, income.expense_ratio);
            rows.push(ValuationRow { method: Method::CapitalizationRate, value: cap_rate_value(noi, cap_rate)? });
        }
    }
    rows.push(ValuationRow {
        method: Method::SalesComparison,
        value: appraised_value(target_id, properties, sales_comparison.value_per_area)?,
    });

    Ok(ValuationSummary {
        target,
        as_of,
        neighborhood_comps: in_neighborhood.iter().map(|p| p.id).collect(),
        radius_comps: in_radius.iter().map(|p| p.id).collect(),
        sales_comparison,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IncomeProfile, MarketAssumptions};
    use crate::error::AppraisalError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn square() -> Neighborhood {
        Neighborhood::from_ring(&[(-80.87, 35.20), (-80.85, 35.20), (-80.85, 35.22), (-80.87, 35.22)]).unwrap()
    }

    fn set() -> PropertySet {
        PropertySet::new(vec![
            Property::new(1, "target", 35.210, -80.860, 100_000.0, 5_000_000.0, date(2010, 1, 1)),
            Property::new(2, "inside", 35.215, -80.855, 10_000.0, 1_000_000.0, date(2023, 1, 1)),
            Property::new(3, "nearby", 35.210, -80.845, 10_000.0, 500_000.0, date(2023, 1, 1)),
            Property::new(4, "outside", 35.230, -80.800, 10_000.0, 500_000.0, date(2023, 1, 1)),
        ]).unwrap()
    }

    #[test]
    fn sales_comparison_only_by_default() {
        let set = set();
        let summary = appraise(PropertyId(1), &set, &square(), &AppraisalConfig::default(), date(2024, 6, 1)).unwrap();
        assert_eq!(summary.neighborhood_comps, vec![PropertyId(2)]);
        assert_eq!(summary.radius_comps, vec![PropertyId(3)]);
        assert!((summary.sales_comparison.value_per_area - 85.0).abs() < 1e-9);
        assert_eq!(summary.rows.len(), 1);
        assert!((summary.value(Method::SalesComparison).unwrap() - 8_500_000.0).abs() < 1e-3);
    }

    #[test]
    fn all_methods_with_full_config() {
        let set = set();
        let config = AppraisalConfig {
            market: MarketAssumptions {
                replacement_cost_per_sqft: Some(278.0),
                gross_rent_multiplier: Some(9.6),
                cap_rate: Some(0.06),
            },
            income: Some(IncomeProfile { avg_monthly_rent: 1_000.0, units: 100, occupancy: 0.9, expense_ratio: 0.4 }),
            ..Default::default()
        };
        let summary = appraise(PropertyId(1), &set, &square(), &config, date(2024, 6, 1)).unwrap();
        let methods: Vec<Method> = summary.rows.iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![
            Method::ReplacementCost,
            Method::GrossRentMultiplier,
            Method::CapitalizationRate,
            Method::SalesComparison,
        ]);
        assert_eq!(summary.value(Method::ReplacementCost), Some(27_800_000.0));
        // 1,000 * 100 * 12 * 0.9 = 1,080,000 gross
        assert!((summary.value(Method::GrossRentMultiplier).unwrap() - 10_368_000.0).abs() < 1e-3);
        assert!((summary.value(Method::CapitalizationRate).unwrap() - 10_800_000.0).abs() < 1e-3);
        assert!(summary.mean().is_some());
    }

    #[test]
    fn target_outside_neighborhood_is_reported() {
        let set = set();
        let err = appraise(PropertyId(3), &set, &square(), &AppraisalConfig::default(), date(2024, 6, 1)).unwrap_err();
        assert_eq!(err, AppraisalError::NotInRegion(PropertyId(3)));
    }

    #[test]
    fn missing_target_is_reported() {
        let set = set();
        let err = appraise(PropertyId(9), &set, &square(), &AppraisalConfig::default(), date(2024, 6, 1)).unwrap_err();
        assert_eq!(err, AppraisalError::NotFound(PropertyId(9)));
    }

    #[test]
    fn method_display() {
        assert_eq!(Method::GrossRentMultiplier.to_string(), "Gross Rent Multiplier");
    }
}
