use lead_model::estimate::sizing::{EstimationInput, EstimationResult};

use crate::sizing::config::EstimatorConfig;

/// Round to 2 decimals for presentation of money/power/area/CO2 figures.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal for presentation of the payback period.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Size a solar system and project its savings for one lead submission.
///
/// Pure and deterministic: no I/O, no side effects, same result for the
/// same input and config. Inputs are not validated here; the web layer is
/// responsible for rejecting non-numeric form data, and NaN propagates.
///
/// # Arguments
/// * `input` - Consumption figures and free-text location from the form
/// * `config` - Pricing and technical parameters, see [`EstimatorConfig`]
///
/// # Returns
/// * Sizing and financial result with presentation rounding applied
pub fn estimate(input: &EstimationInput, config: &EstimatorConfig) -> EstimationResult {
    let peak_sun_hours = config.peak_sun_hours(&input.location);

    // Capacity needed so that derated production over a month covers the
    // submitted consumption.
    let system_power_kw = input.monthly_consumption_kwh
        / (config.days_per_month * peak_sun_hours * config.performance_factor);

    // Ceiling of a non-positive sizing is clamped to zero panels so a
    // degenerate submission never yields a negative count.
    let raw_panel_count = (system_power_kw * 1000.0 / config.rated_panel_watts).ceil();
    let panel_count = if raw_panel_count > 0.0 {
        raw_panel_count as u32
    } else {
        0
    };

    let required_area_m2 = panel_count as f64 * config.panel_area_m2;
    let estimated_cost_usd = system_power_kw * config.cost_per_kw_usd;

    // With billing history the quote offsets most of the bill; without it
    // the savings fall back to consumption at the spot energy price.
    let monthly_savings_usd = if input.has_bill() {
        input.average_monthly_bill * config.bill_offset_factor
    } else {
        input.monthly_consumption_kwh * config.price_per_kwh_usd
    };

    let monthly_savings_usd = round2(monthly_savings_usd);
    let annual_savings_usd = round2(monthly_savings_usd * 12.0);
    let estimated_cost_usd = round2(estimated_cost_usd);

    // Undefined payback (zero savings) surfaces as infinity or NaN; the
    // caller decides how to display it, see EstimationResult::payback_computable.
    let payback_years = round1(estimated_cost_usd / annual_savings_usd);

    let annual_co2_reduction_tons =
        round2(input.monthly_consumption_kwh * config.co2_factor_kg_per_kwh * 12.0 / 1000.0);

    EstimationResult {
        system_power_kw: round2(system_power_kw),
        panel_count,
        required_area_m2: round2(required_area_m2),
        estimated_cost_usd,
        monthly_savings_usd,
        annual_savings_usd,
        payback_years,
        annual_co2_reduction_tons,
    }
}
