use plotters::prelude::SVGBackend;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use crate::stats::ScalingSummary;

const FONT: &str = "Fira Code";
const PLOT_WIDTH: u32 = 800;
const PLOT_HEIGHT: u32 = 400;

/// Draw speedup and efficiency against process count as an SVG chart.
pub fn write_plot(summary: &ScalingSummary, caption: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    let procs = summary.mean.len() as u32;

    let resolution = (PLOT_WIDTH, PLOT_HEIGHT);
    let root = SVGBackend::new(path, resolution).into_drawing_area();

    root.fill(&WHITE)?;

    let y_max = summary
        .speedup
        .iter()
        .chain(summary.efficiency.iter())
        .fold(1.0f64, |acc, v| acc.max(*v));

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(caption, (FONT, 20))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Right, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(1..procs + 1, 0.0..y_max * 1.1)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_label_formatter(&|v| format!("{}", v))
        .y_label_formatter(&|v| format!("{:.2}", v))
        .x_labels(procs as usize)
        .y_labels(10)
        .y_desc("Ratio vs 1 process")
        .x_desc("Processes")
        .draw()?;

    let series: [(&str, &[f64], &RGBColor); 2] = [
        ("speedup", &summary.speedup, &GREEN),
        ("efficiency", &summary.efficiency, &BLUE),
    ];

    for (name, values, color) in series {
        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(i, v)| (i as u32 + 1, *v)),
                color,
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, 13))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
