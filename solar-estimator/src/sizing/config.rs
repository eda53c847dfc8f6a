use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration struct holding all estimation parameters
///
/// Defaults match the parameters the sales team quotes with in Panama.
/// Passing the config explicitly keeps the estimator free of global state
/// and lets callers override pricing per region or per tenant, e.g. from
/// a serialized tenant profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    // Technical parameters
    pub panel_efficiency: f64,   // Module efficiency, informational only
    pub rated_panel_watts: f64,  // Nameplate watts per physical panel
    pub panel_area_m2: f64,      // Roof area per physical panel in m²
    pub performance_factor: f64, // Derates nameplate capacity for real-world losses

    // Economic parameters
    pub cost_per_kw_usd: f64,        // Installed cost per kW
    pub price_per_kwh_usd: f64,      // Fallback energy price when no bill is known
    pub bill_offset_factor: f64,     // Fraction of the bill replaced by solar
    pub annual_price_inflation: f64, // Electricity price increase per year

    // Environmental parameters
    pub co2_factor_kg_per_kwh: f64, // Grid emission factor

    // Irradiance parameters
    pub days_per_month: f64,         // Simplification constant used uniformly
    pub default_peak_sun_hours: f64, // Fallback daily peak sun hours
    /// Keyword to peak-sun-hours lookup for the regional resolution.
    /// Iteration order is the match priority, so entries must be inserted
    /// from most to least specific.
    pub region_sun_hours: IndexMap<String, f64>,

    // Projection parameters
    pub projection_horizon_years: u32, // Default projection length
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        let mut region_sun_hours = IndexMap::new();
        region_sun_hours.insert("david".to_string(), 5.5);
        region_sun_hours.insert("chiriqui".to_string(), 5.5);
        region_sun_hours.insert("colon".to_string(), 4.9);

        Self {
            // Technical parameters
            panel_efficiency: 0.21,
            rated_panel_watts: 400.0,
            panel_area_m2: 2.0,
            performance_factor: 0.8,

            // Economic parameters
            cost_per_kw_usd: 1000.0,
            price_per_kwh_usd: 0.15,
            bill_offset_factor: 0.95,
            annual_price_inflation: 0.03,

            // Environmental parameters
            co2_factor_kg_per_kwh: 0.5,

            // Irradiance parameters
            days_per_month: 30.0,
            default_peak_sun_hours: 5.2,
            region_sun_hours,

            // Projection parameters
            projection_horizon_years: 25,
        }
    }
}

impl EstimatorConfig {
    /// Resolve the daily peak sun hours for a free-text location.
    ///
    /// Case-insensitive containment check against the region table, first
    /// matching key wins. Unmatched or empty text falls back to the default.
    pub fn peak_sun_hours(&self, location: &str) -> f64 {
        let normalized = location.to_lowercase();

        for (keyword, &sun_hours) in &self.region_sun_hours {
            if normalized.contains(keyword.as_str()) {
                return sun_hours;
            }
        }

        self.default_peak_sun_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimator_config_default_values() {
        let config = EstimatorConfig::default();

        assert_eq!(config.panel_efficiency, 0.21);
        assert_eq!(config.rated_panel_watts, 400.0);
        assert_eq!(config.panel_area_m2, 2.0);
        assert_eq!(config.performance_factor, 0.8);
        assert_eq!(config.cost_per_kw_usd, 1000.0);
        assert_eq!(config.price_per_kwh_usd, 0.15);
        assert_eq!(config.bill_offset_factor, 0.95);
        assert_eq!(config.annual_price_inflation, 0.03);
        assert_eq!(config.co2_factor_kg_per_kwh, 0.5);
        assert_eq!(config.days_per_month, 30.0);
        assert_eq!(config.default_peak_sun_hours, 5.2);
        assert_eq!(config.projection_horizon_years, 25);
    }

    #[test]
    fn test_peak_sun_hours_region_matching() {
        let config = EstimatorConfig::default();

        assert_eq!(config.peak_sun_hours("David"), 5.5);
        assert_eq!(config.peak_sun_hours("Boquete, CHIRIQUI"), 5.5);
        assert_eq!(config.peak_sun_hours("Colon"), 4.9);
        assert_eq!(config.peak_sun_hours("Panama"), 5.2);
        assert_eq!(config.peak_sun_hours(""), 5.2);
    }

    #[test]
    fn test_peak_sun_hours_priority_order() {
        // "David, Chiriqui" matches both keywords; the table order decides.
        let config = EstimatorConfig::default();
        assert_eq!(config.peak_sun_hours("David, Chiriqui"), 5.5);

        // An override table with a different first entry changes the result.
        let mut config = EstimatorConfig::default();
        config.region_sun_hours = IndexMap::new();
        config.region_sun_hours.insert("colon".to_string(), 4.9);
        config.region_sun_hours.insert("david".to_string(), 5.5);
        assert_eq!(config.peak_sun_hours("David y Colon"), 4.9);
    }
}
