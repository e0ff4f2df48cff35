use eframe::egui;
use osm_chart_core::Dataset;
use osm_chart_core::views::{ChartStyle, render_bar_chart};
use osm_chart_protocol::{RenderCommand, Viewport};

use crate::renderer;
use crate::theme::ThemeMode;

/// Seconds a status message stays up before the data set summary returns.
const STATUS_TIMEOUT_SECS: f64 = 5.0;

/// A transient status bar message, stamped with egui's input time.
#[derive(Debug, Clone, PartialEq)]
struct StatusMessage {
    text: String,
    shown_at: f64,
}

impl StatusMessage {
    fn new(text: String, now: f64) -> Self {
        Self { text, shown_at: now }
    }

    /// Seconds left before the message expires, or `None` once it has.
    fn remaining(&self, now: f64) -> Option<f64> {
        let left = self.shown_at + STATUS_TIMEOUT_SECS - now;
        (left > 0.0).then_some(left)
    }
}

/// Window state: the data set and the commands for the current canvas size.
pub struct ChartApp {
    dataset: Dataset,
    style: ChartStyle,
    theme_mode: ThemeMode,
    /// Cached render commands (invalidated on resize).
    commands: Vec<RenderCommand>,
    /// Canvas size the cached commands were laid out for.
    canvas_size: egui::Vec2,
    /// Message shown in the status bar in place of the summary.
    status: Option<StatusMessage>,
}

impl ChartApp {
    pub fn new(cc: &eframe::CreationContext<'_>, dataset: Dataset, theme_mode: ThemeMode) -> Self {
        cc.egui_ctx.set_visuals(theme_mode.visuals());

        Self {
            dataset,
            style: ChartStyle::default(),
            theme_mode,
            commands: Vec::new(),
            canvas_size: egui::Vec2::ZERO,
            status: None,
        }
    }

    fn ensure_commands(&mut self, size: egui::Vec2, now: f64) {
        if size == self.canvas_size && !self.commands.is_empty() {
            return;
        }

        let viewport = Viewport::sized(f64::from(size.x), f64::from(size.y));
        match render_bar_chart(&self.dataset, &self.style, &viewport) {
            Ok(commands) => {
                self.commands = commands;
                self.status = None;
            }
            Err(e) => {
                tracing::error!("failed to lay out chart: {e}");
                self.commands.clear();
                self.status = Some(StatusMessage::new(
                    format!("Failed to lay out chart: {e}"),
                    now,
                ));
            }
        }
        self.canvas_size = size;
    }

    /// Drop the status message once it has expired, otherwise schedule a
    /// repaint for when it does.
    fn expire_status(&mut self, ctx: &egui::Context, now: f64) {
        let Some(status) = &self.status else {
            return;
        };
        match status.remaining(now) {
            Some(left) => ctx.request_repaint_after(std::time::Duration::from_secs_f64(left)),
            None => self.status = None,
        }
    }

    fn save_svg(&mut self, now: f64) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("SVG image", &["svg"])
            .set_file_name("time_comparison.svg")
            .save_file()
        else {
            return;
        };

        let viewport = Viewport::sized(
            f64::from(self.canvas_size.x),
            f64::from(self.canvas_size.y),
        );
        let text =
            match crate::write_svg(&self.dataset, &viewport, self.theme_mode.is_dark(), &path) {
                Ok(()) => format!("Saved {}", path.display()),
                Err(e) => format!("Failed to save SVG: {e:#}"),
            };
        self.status = Some(StatusMessage::new(text, now));
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.expire_status(ctx, now);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("osm-chart");
                ui.separator();
                if ui.button("Save SVG…").clicked() {
                    self.save_svg(now);
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| match &self.status {
                Some(msg) => {
                    ui.label(&msg.text);
                }
                None => {
                    let series: Vec<&str> =
                        self.dataset.series().iter().map(|s| s.name.as_str()).collect();
                    ui.label(format!(
                        "{} categories | series: {}",
                        self.dataset.categories().len(),
                        series.join(", "),
                    ));
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let available = ui.available_rect_before_wrap();
                self.ensure_commands(available.size(), now);
                let painter = ui.painter_at(available);
                renderer::render_commands(&painter, &self.commands, available.min, self.theme_mode);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_expires_after_timeout() {
        let msg = StatusMessage::new("Saved chart.svg".into(), 10.0);
        assert_eq!(msg.remaining(10.0), Some(STATUS_TIMEOUT_SECS));
        assert!(msg.remaining(12.5).is_some_and(|left| (left - 2.5).abs() < 1e-9));
        assert_eq!(msg.remaining(10.0 + STATUS_TIMEOUT_SECS), None);
        assert_eq!(msg.remaining(100.0), None);
    }
}
