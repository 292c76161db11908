//! Painting gizmo draw commands with egui.

use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke};
use glam::{Vec2, Vec4};
use viewgizmo_core::{DrawCommand, DrawList};

/// Converts a `[0, 1]` RGBA color to an unmultiplied [`Color32`].
#[must_use]
pub fn color32(color: Vec4) -> Color32 {
    let [r, g, b, a] = color
        .clamp(Vec4::ZERO, Vec4::ONE)
        .to_array()
        .map(|c| (c * 255.0).round() as u8);
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Converts a screen position to an egui point.
#[must_use]
pub fn pos2(p: Vec2) -> Pos2 {
    Pos2::new(p.x, p.y)
}

/// Paints every command of `list` in order.
///
/// Text sizes are multiples of `font_size`.
pub fn paint(painter: &Painter, list: &DrawList, font_size: f32) {
    for command in list {
        match command {
            DrawCommand::CircleFilled {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(pos2(*center), *radius, color32(*color));
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                painter.line_segment(
                    [pos2(*from), pos2(*to)],
                    Stroke::new(*width, color32(*color)),
                );
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
                width,
            } => {
                painter.circle_stroke(
                    pos2(*center),
                    *radius,
                    Stroke::new(*width, color32(*color)),
                );
            }
            DrawCommand::Text {
                center,
                text,
                scale,
                color,
            } => {
                painter.text(
                    pos2(*center),
                    Align2::CENTER_CENTER,
                    text,
                    FontId::proportional(font_size * scale),
                    color32(*color),
                );
            }
        }
    }
}
