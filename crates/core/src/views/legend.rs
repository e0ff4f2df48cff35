use osm_chart_protocol::{Point, Rect, RenderCommand, TextAlign, TextBaseline, ThemeToken};

const PADDING: f64 = 6.0;
const SWATCH_WIDTH: f64 = 20.0;
const SWATCH_GAP: f64 = 6.0;
/// Rough advance of one glyph relative to the font size.
const GLYPH_ASPECT: f64 = 0.6;

/// A legend row: a color swatch and the series it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: ThemeToken,
}

/// Render a boxed legend in the upper-left corner of `plot`.
pub fn render_legend(plot: &Rect, entries: &[LegendEntry], font_size: f64) -> Vec<RenderCommand> {
    if entries.is_empty() {
        return Vec::new();
    }

    let row_height = font_size * 1.6;
    let widest = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0) as f64;
    let width = PADDING * 2.0 + SWATCH_WIDTH + SWATCH_GAP + widest * font_size * GLYPH_ASPECT;
    let height = PADDING * 2.0 + row_height * entries.len() as f64;
    let origin = Point::new(plot.x + PADDING * 2.0, plot.y + PADDING * 2.0);

    let mut commands = Vec::with_capacity(entries.len() * 2 + 3);
    commands.push(RenderCommand::BeginGroup {
        id: "legend".into(),
        label: None,
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(origin.x, origin.y, width, height),
        color: ThemeToken::LegendBackground,
        border_color: Some(ThemeToken::LegendBorder),
        label: None,
        bar_id: None,
    });

    for (i, entry) in entries.iter().enumerate() {
        let row_y = origin.y + PADDING + row_height * i as f64;
        let mid_y = row_y + row_height / 2.0;
        let swatch_h = font_size * 0.7;

        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(origin.x + PADDING, mid_y - swatch_h / 2.0, SWATCH_WIDTH, swatch_h),
            color: entry.color,
            border_color: Some(ThemeToken::BarEdge),
            label: Some(entry.label.clone()),
            bar_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(origin.x + PADDING + SWATCH_WIDTH + SWATCH_GAP, mid_y),
            text: entry.label.clone(),
            color: ThemeToken::TextPrimary,
            font_size,
            align: TextAlign::Left,
            baseline: TextBaseline::Middle,
            angle: 0.0,
        });
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_swatch_and_label_per_entry() {
        let plot = Rect::new(0.0, 0.0, 400.0, 300.0);
        let entries = vec![
            LegendEntry {
                label: "Direct".into(),
                color: ThemeToken::SeriesPrimary,
            },
            LegendEntry {
                label: "VM".into(),
                color: ThemeToken::SeriesSecondary,
            },
        ];
        let cmds = render_legend(&plot, &entries, 10.0);

        let swatches: Vec<ThemeToken> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawRect {
                    color,
                    border_color: Some(ThemeToken::BarEdge),
                    ..
                } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(swatches, [ThemeToken::SeriesPrimary, ThemeToken::SeriesSecondary]);

        let labels: Vec<&str> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["Direct", "VM"]);
    }

    #[test]
    fn empty_legend_draws_nothing() {
        assert!(render_legend(&Rect::new(0.0, 0.0, 10.0, 10.0), &[], 10.0).is_empty());
    }
}
