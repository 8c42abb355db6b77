//! SVG plots of orbits, final states and bifurcation diagrams.

use std::ops::Range;
use std::path::Path;

use anyhow::Result;
use chaos_maps::{BifurcationDiagram, FinalState, MapKind, VisibleSlice};
use log::info;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

pub const SUPTITLE: &str = "Dynamic Systems and Chaos";

const SEAGREEN: RGBColor = RGBColor(60, 179, 113);
const INDIANRED: RGBColor = RGBColor(205, 92, 92);
const ROYALBLUE: RGBColor = RGBColor(65, 105, 225);

const SIZE: (u32, u32) = (1024, 768);
const FONT: &str = "sans-serif";

/// Axis range spanning `values`, widened when they are all equal.
fn span(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return -1.0..1.0;
    }
    if hi - lo < f64::EPSILON {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}

fn time_axis(time: &[usize]) -> Range<f64> {
    let first = time.first().copied().unwrap_or(0) as f64;
    let last = time.last().copied().unwrap_or(1) as f64;
    if last > first {
        first..last
    } else {
        first..first + 1.0
    }
}

fn draw_dots(
    chart: &mut ChartContext<'_, SVGBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    points: &[(f64, f64)],
    color: RGBColor,
    connect: bool,
) -> Result<()> {
    chart.draw_series(
        points
            .iter()
            .map(|&point| Circle::new(point, 3, color.filled())),
    )?;
    if connect {
        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            color.mix(0.6).stroke_width(1),
        ))?;
    }
    Ok(())
}

fn series(time: &[usize], values: &[f64]) -> Vec<(f64, f64)> {
    time.iter().map(|&t| t as f64).zip(values.iter().copied()).collect()
}

/// Plot one or two time series; with two, add a panel for their difference.
///
/// `diff` is the full-length difference sequence; only its visible part is drawn.
pub fn time_series(
    path: &Path,
    map: MapKind,
    slice: &VisibleSlice<'_>,
    diff: Option<&[f64]>,
    dots_only: bool,
) -> Result<()> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(SUPTITLE, (FONT, 24))?;
    let x_range = time_axis(slice.time);
    let y_range = map.y_min()..map.y_max();

    match (slice.y2, diff) {
        (Some(y2), Some(diff)) => {
            let panels = root.split_evenly((2, 1));
            let mut chart = ChartBuilder::on(&panels[0])
                .caption(
                    format!(
                        "Time series for a {} with two different initial conditions",
                        map.long_name()
                    ),
                    (FONT, 16),
                )
                .margin(10)
                .x_label_area_size(30)
                .y_label_area_size(50)
                .build_cartesian_2d(x_range.clone(), y_range)?;
            chart.configure_mesh().y_desc("y1(t), y2(t)").draw()?;
            draw_dots(&mut chart, &series(slice.time, slice.y1), INDIANRED, !dots_only)?;
            draw_dots(&mut chart, &series(slice.time, y2), SEAGREEN, !dots_only)?;

            let skip = diff.len() - slice.time.len();
            let visible_diff = &diff[skip..];
            let mut chart = ChartBuilder::on(&panels[1])
                .caption("Difference between the two time series", (FONT, 16))
                .margin(10)
                .x_label_area_size(30)
                .y_label_area_size(50)
                .build_cartesian_2d(x_range, span(visible_diff.iter().copied()))?;
            chart
                .configure_mesh()
                .x_desc("time t")
                .y_desc("y2(t) - y1(t)")
                .draw()?;
            draw_dots(&mut chart, &series(slice.time, visible_diff), ROYALBLUE, true)?;
        }
        _ => {
            let mut chart = ChartBuilder::on(&root)
                .caption(map.long_name(), (FONT, 18))
                .margin(10)
                .x_label_area_size(30)
                .y_label_area_size(50)
                .build_cartesian_2d(x_range, y_range)?;
            chart.configure_mesh().x_desc("time t").draw()?;
            draw_dots(&mut chart, &series(slice.time, slice.y1), SEAGREEN, !dots_only)?;
        }
    }

    root.present()?;
    info!("wrote time series plot to {}", path.display());
    Ok(())
}

/// Plot final states as dots on a horizontal reference line.
pub fn final_state(path: &Path, map: MapKind, state: &FinalState) -> Result<()> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(SUPTITLE, (FONT, 24))?;

    let (y_min, y_max) = (map.y_min(), map.y_max());
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Final State Diagram for the {}", map.long_name()), (FONT, 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(20)
        .build_cartesian_2d(y_min..y_max, 0.0..1.0)?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .draw()?;

    let line_height = state.marker.first().copied().unwrap_or(0.5);
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(y_min, line_height), (y_max, line_height)],
        BLACK.stroke_width(1),
    )))?;
    chart.draw_series(
        state
            .points()
            .map(|point| Circle::new(point, 4, BLACK.filled())),
    )?;
    chart.draw_series(std::iter::once(Text::new(
        format!("r = {}", state.r),
        (y_min + 0.1 * (y_max - y_min), 0.4),
        (FONT, 18),
    )))?;

    root.present()?;
    info!("wrote final state plot to {}", path.display());
    Ok(())
}

/// Plot a bifurcation diagram as a scatter of `(r, value)` points.
pub fn bifurcation(path: &Path, diagram: &BifurcationDiagram) -> Result<()> {
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(SUPTITLE, (FONT, 24))?;

    let (r0, r1) = diagram.r_range;
    let (y0, y1) = diagram.y_range;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Bifurcation Diagram for the {}", diagram.map.long_name()),
            (FONT, 18),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(r0..r1, y0..y1)?;
    chart
        .configure_mesh()
        .x_labels(5)
        .x_desc("r")
        .y_desc("final states")
        .draw()?;

    chart.draw_series(
        diagram
            .points
            .iter()
            .filter(|p| p.value >= y0 && p.value <= y1)
            .map(|p| Circle::new((p.r, p.value), 1, BLACK.filled())),
    )?;

    root.present()?;
    info!(
        "wrote bifurcation plot with {} points to {}",
        diagram.points.len(),
        path.display()
    );
    Ok(())
}
