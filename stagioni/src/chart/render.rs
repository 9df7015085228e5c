use std::path::Path;
use std::sync::OnceLock;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};
use stagioni_core::StagioniError;

use super::{ChartSpec, day_x, month_label, month_ticks};
use crate::theme::{Rgb, Theme};

const FONT: &str = "sans-serif";

// DejaVu Sans, so rendering does not depend on fonts installed on the host.
static EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

fn ensure_font() -> Result<(), StagioniError> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();
    REGISTERED
        .get_or_init(|| {
            register_font(FONT, FontStyle::Normal, EMBEDDED_FONT)
                .map_err(|e| format!("embedded font: {e:?}"))
        })
        .clone()
        .map_err(StagioniError::Render)
}

const fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

/// Rasterize `spec` with `theme` into a PNG at `path`, replacing any existing file.
///
/// # Errors
/// Returns `Render` if drawing fails or the image cannot be written.
pub fn render_png(spec: &ChartSpec, theme: &Theme, path: &Path) -> Result<(), StagioniError> {
    ensure_font()?;
    let root = BitMapBackend::new(path, theme.size_px).into_drawing_area();
    draw(&root, spec, theme).map_err(|e| StagioniError::Render(e.to_string()))?;
    root.present()
        .map_err(|e| StagioniError::Render(format!("writing {}: {e}", path.display())))
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    theme: &Theme,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let text = rgb(theme.text);
    let edge = rgb(theme.edge);
    let grid = rgb(theme.grid);
    let year = spec.current_year();

    root.fill(&rgb(theme.figure_bg))?;

    let ticks: Vec<f64> = month_ticks(year).into_iter().map(day_x).collect();
    let x_max = day_x(spec.x_range.1);
    let (y_lo, y_hi) = spec.y_range;

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, (FONT, 20).into_font().color(&text))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0f64..x_max).with_key_points(ticks), y_lo..y_hi)?;

    chart.plotting_area().fill(&rgb(theme.axes_bg))?;

    let label_font = (FONT, 14).into_font().color(&text);
    let x_fmt = |x: &f64| month_label(year, *x);
    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .x_labels(12)
        .x_label_formatter(&x_fmt)
        .axis_style(edge.stroke_width(1))
        .bold_line_style(grid.mix(0.6).stroke_width(1))
        .light_line_style(grid.mix(0.0).stroke_width(0))
        .label_style(label_font.clone())
        .axis_desc_style(label_font.clone())
        .draw()?;

    for (idx, line) in spec.lines.iter().enumerate() {
        let color = rgb(theme.line_color(idx));
        chart
            .draw_series(LineSeries::new(
                line.points.iter().map(|(d, v)| (day_x(*d), *v)),
                color.stroke_width(2),
            ))?
            .label(line.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    if !spec.lines.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(rgb(theme.axes_bg).mix(0.8).filled())
            .border_style(edge.stroke_width(1))
            .label_font(label_font)
            .draw()?;
    }
    Ok(())
}
