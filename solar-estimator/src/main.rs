use lead_model::estimate::sizing::{EstimationInput, EstimationResult};
use solar_estimator::general::consumption::load_monthly_consumption;
use solar_estimator::general::finance::{payback_period, project_savings};
use solar_estimator::sizing::config::EstimatorConfig;
use solar_estimator::sizing::estimator::estimate;
use solar_estimator::sizing::plot::plot_projection;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = EstimatorConfig::default();

    match args.get(1).map(|s| s.as_str()) {
        Some("csv") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: solar-estimator csv <file> [bill] [location]");
                return;
            };
            let bill = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let location = args.get(4).cloned().unwrap_or_default();

            match load_monthly_consumption(path) {
                Ok(consumption) => {
                    let input = EstimationInput::new(consumption.average(), bill, location);
                    println!(
                        "Estimating from {} ({:.1} kWh/month average)...",
                        path,
                        consumption.average()
                    );
                    run_estimate(&input, &config, false);
                }
                Err(e) => {
                    eprintln!("Error loading consumption file: {:#}", e);
                }
            }
        }
        Some("plot") => {
            println!("Running sample estimation with projection plot...");
            let input = EstimationInput::new(500.0, 75.0, "Panama".to_string());
            run_estimate(&input, &config, true);
        }
        _ => {
            println!("Running sample estimation...");
            let input = EstimationInput::new(500.0, 75.0, "Panama".to_string());
            run_estimate(&input, &config, false);
        }
    }

    println!("Estimation complete!");
}

fn run_estimate(input: &EstimationInput, config: &EstimatorConfig, plot: bool) {
    let result = estimate(input, config);
    print_result(&result);

    let points = project_savings(&result, config.projection_horizon_years, config);
    println!("Year  Savings  Cumulative");
    for point in &points {
        println!(
            "{:>4}  {:>8.2}  {:>10.2}",
            point.year, point.year_savings_usd, point.cumulative_savings_usd
        );
    }

    if plot {
        if let Err(e) = std::fs::create_dir_all("results") {
            eprintln!("Error creating results directory: {}", e);
            return;
        }
        if let Err(e) = plot_projection(&points, "results/savings_projection.png") {
            eprintln!("Error generating projection plot: {}", e);
        }
    }
}

fn print_result(result: &EstimationResult) {
    println!("System power: {:.2} kW", result.system_power_kw);
    println!("Panels: {}", result.panel_count);
    println!("Required area: {:.2} m2", result.required_area_m2);
    println!("Estimated cost: {:.2} USD", result.estimated_cost_usd);
    println!("Monthly savings: {:.2} USD", result.monthly_savings_usd);
    println!("Annual savings: {:.2} USD", result.annual_savings_usd);
    match payback_period(result) {
        Some(years) => println!("Payback: {:.1} years", years),
        None => println!("Payback: n/a"),
    }
    println!(
        "CO2 reduction: {:.2} t/year",
        result.annual_co2_reduction_tons
    );
}
