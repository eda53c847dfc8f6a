use plotters::prelude::*;

use lead_model::estimate::projection::ProjectionPoint;

/// Render the savings projection as a two-panel chart: yearly savings as
/// bars on top, cumulative savings as a line below.
pub fn plot_projection(
    points: &[ProjectionPoint],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if points.is_empty() {
        return Err("Cannot plot an empty projection".into());
    }

    let root = BitMapBackend::new(filename, (800, 1000)).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((2, 1));
    let upper = &areas[0];
    let lower = &areas[1];

    let max_year = points.last().map(|p| p.year).unwrap_or(1) as f64;
    let max_yearly = points
        .iter()
        .map(|p| p.year_savings_usd)
        .fold(0f64, |a, b| a.max(b));
    let max_cumulative = points
        .iter()
        .map(|p| p.cumulative_savings_usd)
        .fold(0f64, |a, b| a.max(b));

    // First subplot: savings per year
    let mut chart1 = ChartBuilder::on(&upper)
        .caption("Yearly Savings", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..max_year + 1.0, 0f64..max_yearly * 1.1)?;

    chart1
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Savings [USD]")
        .draw()?;

    chart1
        .draw_series(points.iter().map(|p| {
            let x = p.year as f64;
            Rectangle::new(
                [(x - 0.4, 0.0), (x + 0.4, p.year_savings_usd)],
                GREEN.filled(),
            )
        }))?
        .label("Yearly")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &GREEN));

    chart1.configure_series_labels().draw()?;

    // Second subplot: cumulative savings
    let mut chart2 = ChartBuilder::on(&lower)
        .caption("Cumulative Savings", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..max_year + 1.0, 0f64..max_cumulative * 1.1)?;

    chart2
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Savings [USD]")
        .draw()?;

    chart2
        .draw_series(LineSeries::new(
            points
                .iter()
                .map(|p| (p.year as f64, p.cumulative_savings_usd)),
            &BLUE,
        ))?
        .label("Cumulative")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLUE));

    chart2.draw_series(PointSeries::of_element(
        points
            .iter()
            .map(|p| (p.year as f64, p.cumulative_savings_usd)),
        3,
        &BLUE,
        &|c, s, st| {
            return EmptyElement::at(c) + Circle::new((0, 0), s, st.filled());
        },
    ))?;

    chart2.configure_series_labels().draw()?;

    root.present()?;
    println!("Plot saved as {}", filename);
    Ok(())
}
