//! Showing the chart to the user before it is saved.

use eframe::egui;
use egui_plot::{Corner, GridInput, GridMark, Legend, Line, Plot, PlotPoints};
use stagioni_core::StagioniError;

use crate::chart::{ChartLine, ChartSpec, day_x, month_label, month_ticks};
use crate::theme::{Rgb, Theme, ThemeKind};

/// Displays a chart. `show` returns once the user is done with it.
pub trait Viewer {
    /// Show `spec` drawn with `theme`.
    ///
    /// # Errors
    /// Returns `Render` when the display cannot be opened.
    fn show(&self, spec: &ChartSpec, theme: &Theme) -> Result<(), StagioniError>;
}

/// Native window with an interactive plot. Blocks until the window is closed.
///
/// Must be called from the main thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowViewer;

impl Viewer for WindowViewer {
    #[allow(clippy::cast_precision_loss)]
    fn show(&self, spec: &ChartSpec, theme: &Theme) -> Result<(), StagioniError> {
        let (w, h) = theme.size_px;
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([w as f32, h as f32])
                .with_title(spec.title.clone()),
            ..Default::default()
        };
        let window = ChartWindow {
            spec: spec.clone(),
            theme: theme.clone(),
        };
        tracing::debug!(lines = spec.lines.len(), "opening chart window");
        eframe::run_native(
            &spec.title,
            options,
            Box::new(move |cc| {
                cc.egui_ctx.set_visuals(visuals(&window.theme));
                Ok(Box::new(window))
            }),
        )
        .map_err(|e| StagioniError::Render(format!("chart window: {e}")))
    }
}

/// Does nothing; used for `--no-show` and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoViewer;

impl Viewer for NoViewer {
    fn show(&self, spec: &ChartSpec, _theme: &Theme) -> Result<(), StagioniError> {
        tracing::debug!(title = %spec.title, "viewer disabled");
        Ok(())
    }
}

struct ChartWindow {
    spec: ChartSpec,
    theme: Theme,
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(self.spec.title.as_str());
            });

            let year = self.spec.current_year();
            let marks = month_grid(&self.spec);
            let (y_lo, y_hi) = self.spec.y_range;
            Plot::new("season_overlay")
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .x_axis_label(self.spec.x_label.as_str())
                .y_axis_label(self.spec.y_label.as_str())
                .x_axis_formatter(move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
                    month_label(year, mark.value)
                })
                .x_grid_spacer(move |_input: GridInput| marks.clone())
                .include_x(0.0)
                .include_x(day_x(self.spec.x_range.1))
                .include_y(y_lo)
                .include_y(y_hi)
                .legend(Legend::default().position(Corner::LeftTop))
                .show(ui, |plot_ui| {
                    for (idx, line) in self.spec.lines.iter().enumerate() {
                        plot_ui.line(
                            Line::new(line_points(line))
                                .name(&line.label)
                                .color(color32(self.theme.line_color(idx)))
                                .width(2.0),
                        );
                    }
                });
        });
    }
}

fn color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.0, c.1, c.2)
}

fn visuals(theme: &Theme) -> egui::Visuals {
    let mut v = match theme.kind {
        ThemeKind::Dark => egui::Visuals::dark(),
        ThemeKind::Light => egui::Visuals::light(),
    };
    v.panel_fill = color32(theme.figure_bg);
    v.window_fill = color32(theme.figure_bg);
    v.extreme_bg_color = color32(theme.axes_bg);
    v.override_text_color = Some(color32(theme.text));
    v
}

// One grid line per month start; the step size only weights line strength.
fn month_grid(spec: &ChartSpec) -> Vec<GridMark> {
    month_ticks(spec.current_year())
        .into_iter()
        .map(|d| GridMark {
            value: day_x(d),
            step_size: 30.0,
        })
        .collect()
}

fn line_points(line: &ChartLine) -> PlotPoints {
    line.points.iter().map(|(d, v)| [day_x(*d), *v]).collect()
}
