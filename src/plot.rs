//! PNG rendering of a sweep: optimal query node against transmission probability.
//!
//! Rendering is a plain function of the series and an output directory; no
//! drawing state outlives a call.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::error::{CascadeError, Result};
use crate::sweep::SweepSeries;

/// Output file name for a chain of `chain_length` nodes.
pub fn plot_file_name(chain_length: usize) -> String {
    format!("path_graph_k_vs_p_N{chain_length}.png")
}

/// Raster geometry and typography.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub caption: String,
    pub x_desc: String,
    pub y_desc: String,
    pub caption_font: u32,
    pub label_font: u32,
    pub annotation_font: u32,
    /// Half-width of the square marker, in pixels.
    pub marker_half: i32,
    pub line_width: u32,
    /// Draw caption, axis labels and point annotations. Text needs a system
    /// sans-serif font; without it only the line and markers are drawn.
    pub text: bool,
}

impl Default for PlotStyle {
    /// 8 in × 8 in at 300 DPI.
    fn default() -> Self {
        Self {
            width: 2400,
            height: 2400,
            caption: "Path graph analysis".to_string(),
            x_desc: "Transmission rate p".to_string(),
            y_desc: "Optimal node k to query".to_string(),
            caption_font: 72,
            label_font: 48,
            annotation_font: 36,
            marker_half: 12,
            line_width: 4,
            text: true,
        }
    }
}

/// Point annotation: minimum entropy rounded to two decimals.
pub fn annotation_label(entropy: f64) -> String {
    format!("{entropy:.2}")
}

/// Draw one series into `out_dir`, returning the written path.
pub fn render_series(
    series: &SweepSeries,
    out_dir: &Path,
    style: &PlotStyle,
) -> Result<PathBuf> {
    let path = out_dir.join(plot_file_name(series.chain_length));
    draw(series, &path, style).map_err(|e| CascadeError::Plot(e.to_string()))?;
    tracing::info!(path = %path.display(), chain_length = series.chain_length, "wrote plot");
    Ok(path)
}

/// Draw every series, creating `out_dir` if needed.
pub fn render_all(
    series: &[SweepSeries],
    out_dir: &Path,
    style: &PlotStyle,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    series.iter().map(|s| render_series(s, out_dir, style)).collect()
}

fn draw(
    series: &SweepSeries,
    path: &Path,
    style: &PlotStyle,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = series.max_node().unwrap_or(2) as f64 * 1.1 + 1.0;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(40);
    if style.text {
        builder
            .caption(&style.caption, ("sans-serif", style.caption_font))
            .x_label_area_size(140)
            .y_label_area_size(180);
    }
    let mut chart = builder.build_cartesian_2d(0.0f64..1.0f64, 0.0f64..y_max)?;

    if style.text {
        chart
            .configure_mesh()
            .x_desc(style.x_desc.as_str())
            .y_desc(style.y_desc.as_str())
            .label_style(("sans-serif", style.label_font))
            .draw()?;
    }

    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|pt| (pt.p, pt.node as f64))
        .collect();

    chart.draw_series(LineSeries::new(points.clone(), BLUE.stroke_width(style.line_width)))?;

    let s = style.marker_half;
    chart.draw_series(
        points
            .iter()
            .map(|&xy| EmptyElement::at(xy) + Rectangle::new([(-s, -s), (s, s)], BLUE.filled())),
    )?;

    if style.text {
        let font = ("sans-serif", style.annotation_font).into_font();
        chart.draw_series(series.points.iter().map(|pt| {
            EmptyElement::at((pt.p, pt.node as f64))
                + Text::new(annotation_label(pt.entropy), (s, -3 * s), font.clone())
        }))?;
    }

    root.present()?;
    Ok(())
}
