use osm_chart_protocol::{Point, Rect, RenderCommand, TextAlign, TextBaseline, ThemeToken};

use crate::scale::{LinearScale, LogScale, format_decade};

const TICK_LENGTH: f64 = 5.0;
const TICK_LABEL_GAP: f64 = 3.0;
/// Distance from the plot edge to an axis title.
const TITLE_OFFSET_X: f64 = 34.0;
const TITLE_OFFSET_Y: f64 = 22.0;

/// A category tick on the x axis, in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub x: f64,
    pub label: String,
}

/// Render the logarithmic y axis: decade gridlines, tick marks, tick labels
/// and the rotated axis title left of the plot.
pub fn render_y_axis(
    plot: &Rect,
    scale: &LogScale,
    title: &str,
    tick_font_size: f64,
    title_font_size: f64,
) -> Vec<RenderCommand> {
    let ticks = scale.decade_ticks();
    let mut commands = Vec::with_capacity(ticks.len() * 3 + 3);
    commands.push(RenderCommand::BeginGroup {
        id: "y-axis".into(),
        label: Some("log".into()),
    });

    for &tick in &ticks {
        let y = scale.map(tick);

        // Gridline across the plot
        commands.push(RenderCommand::DrawLine {
            from: Point::new(plot.x, y),
            to: Point::new(plot.right(), y),
            color: ThemeToken::GridLine,
            width: 0.5,
        });

        commands.push(RenderCommand::DrawLine {
            from: Point::new(plot.x - TICK_LENGTH, y),
            to: Point::new(plot.x, y),
            color: ThemeToken::AxisLine,
            width: 1.0,
        });

        commands.push(RenderCommand::DrawText {
            position: Point::new(plot.x - TICK_LENGTH - TICK_LABEL_GAP, y),
            text: format_decade(tick),
            color: ThemeToken::TextSecondary,
            font_size: tick_font_size,
            align: TextAlign::Right,
            baseline: TextBaseline::Middle,
            angle: 0.0,
        });
    }

    let left_x = plot.x - TITLE_OFFSET_X - TICK_LENGTH;
    commands.push(RenderCommand::DrawText {
        position: Point::new(left_x, plot.y + plot.h / 2.0),
        text: title.to_string(),
        color: ThemeToken::TextPrimary,
        font_size: title_font_size,
        align: TextAlign::Center,
        baseline: TextBaseline::Middle,
        angle: -90.0,
    });

    commands.push(RenderCommand::EndGroup);
    commands
}

/// Render the categorical x axis: one tick mark and label per category and
/// the axis title below the plot.
pub fn render_x_axis(
    plot: &Rect,
    scale: &LinearScale,
    ticks: &[Tick],
    title: &str,
    tick_font_size: f64,
    title_font_size: f64,
) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(ticks.len() * 2 + 3);
    commands.push(RenderCommand::BeginGroup {
        id: "x-axis".into(),
        label: None,
    });

    let bottom = plot.bottom();
    for tick in ticks {
        let x = scale.map(tick.x);
        commands.push(RenderCommand::DrawLine {
            from: Point::new(x, bottom),
            to: Point::new(x, bottom + TICK_LENGTH),
            color: ThemeToken::AxisLine,
            width: 1.0,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x, bottom + TICK_LENGTH + TICK_LABEL_GAP),
            text: tick.label.clone(),
            color: ThemeToken::TextSecondary,
            font_size: tick_font_size,
            align: TextAlign::Center,
            baseline: TextBaseline::Top,
            angle: 0.0,
        });
    }

    commands.push(RenderCommand::DrawText {
        position: Point::new(plot.center_x(), bottom + TICK_LENGTH + TITLE_OFFSET_Y),
        text: title.to_string(),
        color: ThemeToken::TextPrimary,
        font_size: title_font_size,
        align: TextAlign::Center,
        baseline: TextBaseline::Top,
        angle: 0.0,
    });

    commands.push(RenderCommand::EndGroup);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(commands: &[RenderCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn y_axis_labels_every_decade() {
        let plot = Rect::new(70.0, 40.0, 500.0, 380.0);
        let scale = LogScale::new((0.1, 1000.0), (plot.bottom(), plot.y)).expect("valid domain");
        let cmds = render_y_axis(&plot, &scale, "Time", 10.0, 12.0);
        assert_eq!(texts(&cmds), ["0.1", "1", "10", "100", "1000", "Time"]);

        let rotated = cmds.iter().any(|c| {
            matches!(c, RenderCommand::DrawText { text, angle, .. } if text == "Time" && *angle == -90.0)
        });
        assert!(rotated);

        let gridlines = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawLine { color: ThemeToken::GridLine, .. }))
            .count();
        assert_eq!(gridlines, 5);
    }

    #[test]
    fn x_axis_ticks_follow_scale() {
        let plot = Rect::new(0.0, 0.0, 300.0, 100.0);
        let scale = LinearScale::new((0.0, 3.0), (0.0, 300.0));
        let ticks = vec![
            Tick { x: 0.5, label: "a".into() },
            Tick { x: 1.5, label: "b".into() },
        ];
        let cmds = render_x_axis(&plot, &scale, &ticks, "Kind", 10.0, 12.0);
        assert_eq!(texts(&cmds), ["a", "b", "Kind"]);

        let tick_xs: Vec<f64> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawLine { from, .. } => Some(from.x),
                _ => None,
            })
            .collect();
        assert_eq!(tick_xs, [50.0, 150.0]);
    }
}
