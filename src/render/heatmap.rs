use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use plotters::coord::ranged1d::SegmentValue;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::palette::{color_for, text_color_on, Palette};
use crate::grid::{matrix_bounds, Heatmap, SamplingGrid};

/// Layout and colouring of the two-panel heatmap.
///
/// Spot runs left to right and volatility top to bottom, so the first row of
/// each matrix (lowest volatility) is drawn at the top.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeatmapStyle {
    /// Image width in pixels (both panels)
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    pub call_palette: Palette,
    pub put_palette: Palette,
    /// Write each cell's price inside it
    pub annotate: bool,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 350,
            call_palette: Palette::YlGnBu,
            put_palette: Palette::YlOrRd,
            annotate: true,
        }
    }
}

/// Render the call and put heatmaps side by side into an SVG file.
pub fn render_svg(heatmap: &Heatmap, style: &HeatmapStyle, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    draw_heatmaps(&root, heatmap, style)
        .with_context(|| format!("failed to draw heatmap to {}", path.display()))?;
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!("heatmap written to {}", path.display());
    Ok(())
}

/// Render the heatmaps into an in-memory SVG document.
pub fn render_svg_string(heatmap: &Heatmap, style: &HeatmapStyle) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height))
            .into_drawing_area();
        draw_heatmaps(&root, heatmap, style)?;
        root.present()?;
    }
    Ok(svg)
}

/// Draw both panels onto any plotters drawing area, with the current prices as title.
pub fn draw_heatmaps<DB>(
    root: &DrawingArea<DB, Shift>,
    heatmap: &Heatmap,
    style: &HeatmapStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let body = root.titled(&heatmap.current.to_string(), ("sans-serif", 18))?;
    let panels = body.split_evenly((1, 2));

    let grid = &heatmap.grid;
    draw_panel(
        &panels[0],
        "Call Option Prices",
        &grid.call_matrix,
        grid,
        style.call_palette,
        style.annotate,
    )?;
    draw_panel(
        &panels[1],
        "Put Option Prices",
        &grid.put_matrix,
        grid,
        style.put_palette,
        style.annotate,
    )?;
    Ok(())
}

fn axis_label(axis: &[f64], value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::CenterOf(idx) => usize::try_from(*idx)
            .ok()
            .and_then(|i| axis.get(i))
            .map(|v| format!("{v:.2}"))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Segment index of matrix row `row`; row 0 goes to the top segment.
fn segment_row(row: usize, rows: usize) -> i32 {
    (rows - 1 - row) as i32
}

fn draw_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    matrix: &[Vec<f64>],
    grid: &SamplingGrid,
    palette: Palette,
    annotate: bool,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (rows, cols) = grid.shape();
    if rows == 0 || cols == 0 {
        return Ok(());
    }
    let (lo, hi) = matrix_bounds(matrix).unwrap_or((0.0, 0.0));

    // Integer ranges are inclusive in plotters, so 0..=n-1 gives n segments.
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .caption(title, ("sans-serif", 16))
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(
            (0..cols as i32 - 1).into_segmented(),
            (0..rows as i32 - 1).into_segmented(),
        )?;

    let spot_label = |v: &SegmentValue<i32>| axis_label(&grid.spot_axis, v);
    let vol_top_down: Vec<f64> = grid.vol_axis.iter().rev().copied().collect();
    let vol_label = |v: &SegmentValue<i32>| axis_label(&vol_top_down, v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(cols)
        .y_labels(rows)
        .x_label_formatter(&spot_label)
        .y_label_formatter(&vol_label)
        .x_desc("Spot Price")
        .y_desc("Volatility")
        .draw()?;

    chart.draw_series(matrix.iter().enumerate().flat_map(move |(i, row)| {
        row.iter().enumerate().map(move |(j, &value)| {
            let (x, y) = (j as i32, segment_row(i, rows));
            Rectangle::new(
                [
                    (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                    (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
                ],
                color_for(value, lo, hi, palette).filled(),
            )
        })
    }))?;

    if annotate {
        chart.draw_series(matrix.iter().enumerate().flat_map(move |(i, row)| {
            row.iter().enumerate().map(move |(j, &value)| {
                let ink = text_color_on(color_for(value, lo, hi, palette));
                let font = ("sans-serif", 11)
                    .into_font()
                    .color(&ink)
                    .pos(Pos::new(HPos::Center, VPos::Center));
                Text::new(
                    format!("{value:.2}"),
                    (
                        SegmentValue::CenterOf(j as i32),
                        SegmentValue::CenterOf(segment_row(i, rows)),
                    ),
                    font,
                )
            })
        }))?;
    }

    Ok(())
}
