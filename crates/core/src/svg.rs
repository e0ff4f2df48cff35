//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use std::fmt::Write as _;

use osm_chart_protocol::{RenderCommand, TextAlign, TextBaseline, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 160);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:DejaVu Sans,system-ui,sans-serif">"#,
    );

    let bg = resolve_color(ThemeToken::Background, dark);
    let _ = write!(svg, r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#);

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                label,
                bar_id,
            } => {
                let fill = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}""#,
                    rect.x, rect.y, rect.w, rect.h,
                );
                if let Some(border) = border_color {
                    let stroke = resolve_color(*border, dark);
                    let _ = write!(svg, r#" stroke="{stroke}" stroke-width="1""#);
                }
                if let Some(id) = bar_id {
                    let _ = write!(svg, r#" data-bar-id="{id}""#);
                }
                match label {
                    Some(label) => {
                        let _ = write!(svg, "><title>{}</title></rect>", escape_xml(label));
                    }
                    None => svg.push_str("/>"),
                }
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}"/>"#,
                    from.x, from.y, to.x, to.y,
                );
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
                baseline,
                angle,
            } => {
                let fill = resolve_color(*color, dark);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                let dominant = match baseline {
                    TextBaseline::Top => "hanging",
                    TextBaseline::Middle => "central",
                    TextBaseline::Bottom => "text-after-edge",
                };
                let _ = write!(
                    svg,
                    r#"<text x="{x}" y="{y}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}" dominant-baseline="{dominant}""#,
                    x = position.x,
                    y = position.y,
                );
                if *angle != 0.0 {
                    let _ = write!(
                        svg,
                        r#" transform="rotate({angle} {} {})""#,
                        position.x, position.y,
                    );
                }
                let _ = write!(svg, ">{}</text>", escape_xml(text));
            }
            RenderCommand::BeginGroup { id, .. } => {
                let _ = write!(svg, r#"<g id="{}">"#, escape_xml(id));
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str("</svg>");
    svg
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::Background => "#181818",
            ThemeToken::PlotBackground => "#1f1f1f",
            ThemeToken::PlotBorder | ThemeToken::AxisLine => "#bdbdbd",
            ThemeToken::GridLine => "#3a3a3a",
            ThemeToken::TextPrimary => "#ececec",
            ThemeToken::TextSecondary => "#9e9e9e",
            ThemeToken::SeriesPrimary => "#8c9db0",
            ThemeToken::SeriesSecondary => "#b03a3a",
            ThemeToken::BarEdge => "#000000",
            ThemeToken::LegendBackground => "#262626",
            ThemeToken::LegendBorder => "#616161",
        }
    } else {
        match token {
            ThemeToken::Background | ThemeToken::PlotBackground => "#ffffff",
            ThemeToken::PlotBorder | ThemeToken::AxisLine => "#000000",
            ThemeToken::GridLine => "#e0e0e0",
            ThemeToken::TextPrimary => "#000000",
            ThemeToken::TextSecondary => "#333333",
            // matplotlib "slategray" and "maroon"
            ThemeToken::SeriesPrimary => "#708090",
            ThemeToken::SeriesSecondary => "#800000",
            ThemeToken::BarEdge => "#000000",
            ThemeToken::LegendBackground => "#ffffff",
            ThemeToken::LegendBorder => "#cccccc",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
