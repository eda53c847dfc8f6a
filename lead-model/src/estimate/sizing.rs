use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// Consumption data submitted by a lead.
///
/// The estimator only needs the monthly figures and a free-text location;
/// contact details live on the lead record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./sizing.ts")]
pub struct EstimationInput {
    /// Average monthly electricity consumption in kWh.
    pub monthly_consumption_kwh: f64,
    /// Average monthly bill in USD. 0 means the lead did not provide one.
    pub average_monthly_bill: f64,
    /// Free-text location, used only for the regional sun-hours lookup.
    pub location: String,
}

impl EstimationInput {
    pub fn new(monthly_consumption_kwh: f64, average_monthly_bill: f64, location: String) -> Self {
        EstimationInput {
            monthly_consumption_kwh,
            average_monthly_bill,
            location,
        }
    }

    /// Whether the lead provided billing history.
    pub fn has_bill(&self) -> bool {
        self.average_monthly_bill > 0.0
    }
}

/// Sizing and financial projection for one estimation request.
///
/// Produced fresh per call and never mutated afterwards; the web layer
/// persists it next to the lead record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./sizing.ts")]
pub struct EstimationResult {
    /// Recommended system capacity in kW.
    pub system_power_kw: f64,
    /// Number of physical panels.
    pub panel_count: u32,
    /// Roof area needed for the panels in m².
    pub required_area_m2: f64,
    /// Installed system cost in USD.
    pub estimated_cost_usd: f64,
    /// Expected monthly savings in USD.
    pub monthly_savings_usd: f64,
    /// Expected annual savings in USD.
    pub annual_savings_usd: f64,
    /// Years until savings cover the installed cost.
    /// `f64::INFINITY` when annual savings is zero.
    pub payback_years: f64,
    /// Avoided grid emissions in metric tons of CO2 per year.
    pub annual_co2_reduction_tons: f64,
}

impl EstimationResult {
    /// Whether the payback period can be shown to the lead.
    /// Zero or negative savings make it undefined, not an error.
    pub fn payback_computable(&self) -> bool {
        self.annual_savings_usd > 0.0 && self.payback_years.is_finite()
    }
}
