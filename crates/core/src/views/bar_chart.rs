use osm_chart_protocol::{Point, Rect, RenderCommand, TextAlign, TextBaseline, ThemeToken, Viewport};

use crate::labels::{BarLabel, LABEL_OFFSET, annotate};
use crate::layout::{BAR_WIDTH, BarSlot, layout_bars, tick_x, x_domain};
use crate::model::{ChartError, Dataset};
use crate::scale::{LinearScale, LogScale, nice_log_domain};
use crate::views::axis::{Tick, render_x_axis, render_y_axis};
use crate::views::legend::{LegendEntry, render_legend};

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Text and geometry settings for a grouped bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bar_width: f64,
    pub margins: Margins,
    pub title_font_size: f64,
    pub axis_font_size: f64,
    pub tick_font_size: f64,
    pub label_font_size: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Time Comparison".into(),
            x_label: "Test Type".into(),
            y_label: "Time in ns  (log scale)".into(),
            bar_width: BAR_WIDTH,
            margins: Margins {
                left: 80.0,
                right: 16.0,
                top: 36.0,
                bottom: 64.0,
            },
            title_font_size: 14.0,
            axis_font_size: 12.0,
            tick_font_size: 10.0,
            label_font_size: 9.0,
        }
    }
}

/// A grouped bar chart resolved to pixel space for one viewport.
#[derive(Debug, Clone)]
pub struct ChartLayout<'a> {
    dataset: &'a Dataset,
    style: &'a ChartStyle,
    pub viewport: Viewport,
    /// The framed area bars are drawn into.
    pub plot: Rect,
    pub x_scale: LinearScale,
    pub y_scale: LogScale,
    pub bars: Vec<BarSlot>,
    pub labels: Vec<BarLabel>,
    pub ticks: Vec<Tick>,
}

impl<'a> ChartLayout<'a> {
    pub fn compute(
        dataset: &'a Dataset,
        style: &'a ChartStyle,
        viewport: &Viewport,
    ) -> Result<Self, ChartError> {
        let m = style.margins;
        let plot = Rect::new(
            viewport.x + m.left,
            viewport.y + m.top,
            (viewport.width - m.left - m.right).max(1.0),
            (viewport.height - m.top - m.bottom).max(1.0),
        );

        let categories = dataset.categories().len();
        let series = dataset.series().len();
        let x_scale = LinearScale::new(
            x_domain(categories, series, style.bar_width),
            (plot.x, plot.right()),
        );

        // Leave headroom for the labels above the tallest bar.
        let (min, max) = dataset.value_range();
        let domain = nice_log_domain(min, max * LABEL_OFFSET);
        let y_scale = LogScale::new(domain, (plot.bottom(), plot.y))?;

        let bars = layout_bars(dataset, style.bar_width);
        let labels = annotate(&bars);
        let ticks = dataset
            .categories()
            .iter()
            .enumerate()
            .map(|(i, name)| Tick {
                x: tick_x(i, series, style.bar_width),
                label: name.clone(),
            })
            .collect();

        tracing::debug!(
            categories,
            series,
            y_min = domain.0,
            y_max = domain.1,
            plot_w = plot.w,
            plot_h = plot.h,
            "laid out bar chart"
        );

        Ok(Self {
            dataset,
            style,
            viewport: *viewport,
            plot,
            x_scale,
            y_scale,
            bars,
            labels,
            ticks,
        })
    }

    /// One legend entry per series, in series order.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.dataset
            .series()
            .iter()
            .map(|s| LegendEntry {
                label: s.name.clone(),
                color: s.color,
            })
            .collect()
    }

    /// Pixel rectangle of a bar, from the axis floor up to its value.
    pub fn bar_rect(&self, bar: &BarSlot) -> Rect {
        Rect::from_corners(
            Point::new(self.x_scale.map(bar.left()), self.y_scale.map(bar.value)),
            Point::new(self.x_scale.map(bar.right()), self.plot.bottom()),
        )
    }

    /// Pixel anchor of a value label (bottom center of the text).
    pub fn label_position(&self, label: &BarLabel) -> Point {
        Point::new(self.x_scale.map(label.x), self.y_scale.map(label.y))
    }

    pub fn render(&self) -> Vec<RenderCommand> {
        let style = self.style;
        let vp = &self.viewport;
        let mut commands = Vec::with_capacity(self.bars.len() * 2 + 48);

        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(vp.x, vp.y, vp.width, vp.height),
            color: ThemeToken::Background,
            border_color: None,
            label: None,
            bar_id: None,
        });
        commands.push(RenderCommand::DrawRect {
            rect: self.plot,
            color: ThemeToken::PlotBackground,
            border_color: Some(ThemeToken::PlotBorder),
            label: None,
            bar_id: None,
        });

        commands.extend(render_y_axis(
            &self.plot,
            &self.y_scale,
            &style.y_label,
            style.tick_font_size,
            style.axis_font_size,
        ));
        commands.extend(render_x_axis(
            &self.plot,
            &self.x_scale,
            &self.ticks,
            &style.x_label,
            style.tick_font_size,
            style.axis_font_size,
        ));

        let categories = self.dataset.categories();
        for (index, series) in self.dataset.series().iter().enumerate() {
            commands.push(RenderCommand::BeginGroup {
                id: format!("series:{}", series.name),
                label: Some(series.name.clone()),
            });
            for bar in self.bars.iter().filter(|b| b.series == index) {
                let category = categories.get(bar.category).map_or("", String::as_str);
                commands.push(RenderCommand::DrawRect {
                    rect: self.bar_rect(bar),
                    color: series.color,
                    border_color: Some(ThemeToken::BarEdge),
                    label: Some(format!("{} · {category}: {}", series.name, bar.value)),
                    bar_id: Some((bar.series * categories.len() + bar.category) as u64),
                });
            }
            commands.push(RenderCommand::EndGroup);
        }

        commands.push(RenderCommand::BeginGroup {
            id: "labels".into(),
            label: None,
        });
        for label in &self.labels {
            commands.push(RenderCommand::DrawText {
                position: self.label_position(label),
                text: label.text.clone(),
                color: ThemeToken::TextPrimary,
                font_size: style.label_font_size,
                align: TextAlign::Center,
                baseline: TextBaseline::Bottom,
                angle: 0.0,
            });
        }
        commands.push(RenderCommand::EndGroup);

        commands.push(RenderCommand::DrawText {
            position: Point::new(self.plot.center_x(), self.plot.y - 10.0),
            text: style.title.clone(),
            color: ThemeToken::TextPrimary,
            font_size: style.title_font_size,
            align: TextAlign::Center,
            baseline: TextBaseline::Bottom,
            angle: 0.0,
        });

        commands.extend(render_legend(
            &self.plot,
            &self.legend_entries(),
            style.axis_font_size,
        ));

        commands
    }
}

/// Lay out and render `dataset` as a grouped bar chart on a log y axis.
pub fn render_bar_chart(
    dataset: &Dataset,
    style: &ChartStyle,
    viewport: &Viewport,
) -> Result<Vec<RenderCommand>, ChartError> {
    Ok(ChartLayout::compute(dataset, style, viewport)?.render())
}
