//! Market-average valuation methods: replacement cost, gross rent
//! multiplier and capitalization rate.  All amounts are in currency units.

use crate::error::{AppraisalError, Result};

/// Cost to rebuild: finished area times construction cost per square foot.
#[inline]
pub fn replacement_cost(square_feet: f64, cost_per_square_foot: f64) -> f64 {
    square_feet * cost_per_square_foot
}

/// Annual effective gross income from the average monthly rent per unit,
/// the unit count and the expected occupancy (`0.0..=1.0`).
#[inline]
pub fn gross_income(avg_monthly_rent: f64, units: u32, occupancy: f64) -> f64 {
    avg_monthly_rent * f64::from(units) * 12.0 * occupancy
}

/// Value implied by a gross rent multiplier.
#[inline]
pub fn gross_rent_multiplier_value(annual_gross_income: f64, grm: f64) -> f64 {
    annual_gross_income * grm
}

/// Income left after operating expenses, given the expense ratio.
#[inline]
pub fn net_operating_income(annual_gross_income: f64, expense_ratio: f64) -> f64 {
    annual_gross_income * (1.0 - expense_ratio)
}

/// Value implied by capitalizing `noi` at `cap_rate`.
pub fn cap_rate_value(noi: f64, cap_rate: f64) -> Result<f64> {
    if !cap_rate.is_finite() || cap_rate <= 0.0 {
        return Err(AppraisalError::InvalidInput(format!("cap rate must be positive, got {cap_rate}")));
    }
    Ok(noi / cap_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-6 * b.abs().max(1.0) }

    #[test]
    fn replacement_cost_of_link_apartments() {
        assert_eq!(replacement_cost(242_843.0, 278.0), 67_510_354.0);
    }

    #[test]
    fn income_chain() {
        let gross = gross_income(1_718.0, 259, 0.9);
        assert!(close(gross, 4_805_589.6), "{gross}");
        assert!(close(gross_rent_multiplier_value(gross, 9.6), 46_133_660.16));

        let noi = net_operating_income(gross, 0.4);
        assert!(close(noi, 2_883_353.76), "{noi}");
        assert!(close(cap_rate_value(noi, 0.06).unwrap(), 48_055_896.0));
    }

    #[test]
    fn zero_cap_rate_is_rejected() {
        assert!(matches!(cap_rate_value(1.0, 0.0), Err(AppraisalError::InvalidInput(_))));
        assert!(cap_rate_value(1.0, -0.05).is_err());
    }
}
