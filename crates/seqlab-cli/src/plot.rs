//! PNG charts for the analyze command.

use std::path::Path;

use anyhow::Context;
use plotters::{coord::Shift, prelude::*};
use seqlab_stats::{correlation::AutocorrelationProfile, histogram::Histogram};

const CHART_SIZE: (u32, u32) = (1200, 700);
const COMPARISON_SIZE: (u32, u32) = (1600, 700);

/// Plot the sequence values against their index.
pub fn plot_sequence(path: &Path, values: &[f64]) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_min, y_max) = padded_bounds(values);
    let mut chart = ChartBuilder::on(&root)
        .caption("Sequence", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0..values.len(), y_min..y_max)?;

    chart.configure_mesh().x_desc("Index").y_desc("Value").draw()?;

    chart.draw_series(LineSeries::new(values.iter().copied().enumerate(), &BLUE))?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Plot the autocorrelation profile as a stem chart with the significance
/// band.
pub fn plot_correlogram(
    path: &Path,
    profile: &AutocorrelationProfile,
    threshold: f64,
) -> anyhow::Result<()> {
    let max_lag = profile.coefficients.last().map_or(1, |c| c.lag);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Autocorrelation", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_lag + 1, -1.1..1.1)?;

    chart
        .configure_mesh()
        .x_desc("Lag")
        .y_desc("Coefficient")
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0, 0.0), (max_lag + 1, 0.0)],
        BLACK,
    )))?;
    for bound in [threshold, -threshold] {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0, bound), (max_lag + 1, bound)],
            RED.mix(0.5),
        )))?;
    }

    for coefficient in &profile.coefficients {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![
                (coefficient.lag, 0.0),
                (coefficient.lag, coefficient.coefficient),
            ],
            BLUE,
        )))?;
        chart.draw_series(std::iter::once(Circle::new(
            (coefficient.lag, coefficient.coefficient),
            3,
            BLUE.filled(),
        )))?;
    }

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Plot the value distribution as filled bars.
pub fn plot_histogram(path: &Path, histogram: &Histogram) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    draw_histogram_panel(&root, "Value distribution", BLUE, histogram)?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Plot the value distributions of the original and the synthetic sequence
/// side by side.
pub fn plot_comparison(
    path: &Path,
    original: &[f64],
    generated: &[f64],
    num_bins: usize,
) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, COMPARISON_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    draw_histogram_panel(
        &panels[0],
        "Original",
        BLUE,
        &Histogram::new(original, num_bins),
    )?;
    draw_histogram_panel(
        &panels[1],
        "Generated",
        RED,
        &Histogram::new(generated, num_bins),
    )?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn draw_histogram_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    caption: &str,
    color: RGBColor,
    histogram: &Histogram,
) -> anyhow::Result<()> {
    let Some((first, last)) = histogram.bins.first().zip(histogram.bins.last()) else {
        anyhow::bail!("histogram has no bins to plot");
    };
    let max_count = histogram.bins.iter().map(|b| b.count).max().unwrap_or(1);
    let headroom = max_count + max_count.div_ceil(10);

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(first.range.start..last.range.end, 0u64..headroom)?;

    chart.configure_mesh().x_desc("Value").y_desc("Count").draw()?;

    chart.draw_series(histogram.bins.iter().map(|bin| {
        Rectangle::new(
            [(bin.range.start, 0), (bin.range.end, bin.count)],
            color.mix(0.5).filled(),
        )
    }))?;
    Ok(())
}

fn padded_bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < 1e-6 {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}
