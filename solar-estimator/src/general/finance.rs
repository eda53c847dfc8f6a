use lead_model::estimate::projection::ProjectionPoint;
use lead_model::estimate::sizing::EstimationResult;

use crate::sizing::config::EstimatorConfig;

/// Project the annual savings of an estimation over a number of years.
///
/// Electricity prices compound at the configured inflation rate starting
/// from year 2, so year 1 carries the plain annual savings. The running
/// cumulative sum is kept unrounded between years; both emitted figures
/// are rounded to 2 decimals for presentation.
///
/// # Arguments
/// * `result` - Estimation the projection is derived from
/// * `horizon_years` - Number of years to project, one point per year
/// * `config` - Supplies the annual electricity price inflation
///
/// # Returns
/// * Exactly `horizon_years` points ordered by ascending year
pub fn project_savings(
    result: &EstimationResult,
    horizon_years: u32,
    config: &EstimatorConfig,
) -> Vec<ProjectionPoint> {
    let mut points = Vec::with_capacity(horizon_years as usize);
    let mut cumulative = 0.0;

    for year in 1..=horizon_years {
        let inflation_factor = (1.0 + config.annual_price_inflation).powi(year as i32 - 1);
        let year_savings = result.annual_savings_usd * inflation_factor;
        cumulative += year_savings;

        points.push(ProjectionPoint::new(
            year,
            round2(year_savings),
            round2(cumulative),
        ));
    }

    points
}

/// Payback period of an estimation, if one exists.
///
/// Zero or negative annual savings make the period undefined; callers
/// should render that as "not applicable" instead of showing infinity.
pub fn payback_period(result: &EstimationResult) -> Option<f64> {
    if result.annual_savings_usd <= 0.0 || !result.payback_years.is_finite() {
        return None;
    }

    Some(result.payback_years)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
