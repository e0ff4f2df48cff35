use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind, Vec2};
use osm_chart_protocol::{RenderCommand, TextAlign, TextBaseline};

use crate::theme::{self, ThemeMode};

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the top-left pixel position of the rendering area.
pub fn render_commands(
    painter: &egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
) {
    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                border_color,
                ..
            } => {
                let w = rect.w as f32;
                let h = rect.h as f32;
                if w < 0.5 || h < 0.5 {
                    continue;
                }

                let min = Pos2::new(rect.x as f32 + offset.x, rect.y as f32 + offset.y);
                let egui_rect = Rect::from_min_size(min, egui::vec2(w, h));

                // Cull off-screen
                if !painter.clip_rect().intersects(egui_rect) {
                    continue;
                }

                painter.rect_filled(egui_rect, CornerRadius::ZERO, theme::resolve(*color, mode));

                if let Some(bc) = border_color {
                    painter.rect_stroke(
                        egui_rect,
                        CornerRadius::ZERO,
                        Stroke::new(1.0, theme::resolve(*bc, mode)),
                        StrokeKind::Inside,
                    );
                }
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
                let size = *font_size as f32;
                if size < 1.0 || text.is_empty() {
                    continue;
                }

                let text_color = theme::resolve(*color, mode);
                let galley =
                    painter.layout_no_wrap(text.clone(), FontId::proportional(size), text_color);

                let radians = angle.to_radians() as f32;
                let anchor = Pos2::new(position.x as f32 + offset.x, position.y as f32 + offset.y);
                let top_left = text_origin(anchor, galley.size(), *align, *baseline, radians);

                painter.add(TextShape::new(top_left, galley, text_color).with_angle(radians));
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
            } => {
                let p1 = Pos2::new(from.x as f32 + offset.x, from.y as f32 + offset.y);
                let p2 = Pos2::new(to.x as f32 + offset.x, to.y as f32 + offset.y);
                let line_color = theme::resolve(*color, mode);
                painter.line_segment([p1, p2], Stroke::new(*width as f32, line_color));
            }

            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {
                // Groups are semantic — no visual effect in egui
            }
        }
    }
}

/// Top-left corner for a galley of `size` so that its `align`/`baseline`
/// point lands on `anchor` once rotated by `radians` about that corner.
fn text_origin(
    anchor: Pos2,
    size: Vec2,
    align: TextAlign,
    baseline: TextBaseline,
    radians: f32,
) -> Pos2 {
    let local = Vec2::new(
        size.x * align_fraction(align),
        size.y * baseline_fraction(baseline),
    );
    anchor - Rot2::from_angle(radians) * local
}

fn align_fraction(align: TextAlign) -> f32 {
    match align {
        TextAlign::Left => 0.0,
        TextAlign::Center => 0.5,
        TextAlign::Right => 1.0,
    }
}

fn baseline_fraction(baseline: TextBaseline) -> f32 {
    match baseline {
        TextBaseline::Top => 0.0,
        TextBaseline::Middle => 0.5,
        TextBaseline::Bottom => 1.0,
    }
}
