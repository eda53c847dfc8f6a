use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// One year of the multi-year savings projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./projection.ts")]
pub struct ProjectionPoint {
    /// Year of the projection, starting at 1.
    pub year: u32,
    /// Savings earned during this year in USD.
    pub year_savings_usd: f64,
    /// Savings accumulated through this year in USD.
    pub cumulative_savings_usd: f64,
}

impl ProjectionPoint {
    pub fn new(year: u32, year_savings_usd: f64, cumulative_savings_usd: f64) -> Self {
        ProjectionPoint {
            year,
            year_savings_usd,
            cumulative_savings_usd,
        }
    }
}
