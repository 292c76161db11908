//! Backend-agnostic draw commands for the gizmo.

use glam::{Vec2, Vec4};

use crate::axis::{GizmoAxis, GizmoElement};
use crate::projection::GizmoProjection;
use crate::style::Style;

/// One immediate-mode drawing primitive, in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled circle.
    CircleFilled {
        center: Vec2,
        radius: f32,
        color: Vec4,
    },
    /// A line segment.
    Line {
        from: Vec2,
        to: Vec2,
        color: Vec4,
        width: f32,
    },
    /// A stroked circle outline.
    Circle {
        center: Vec2,
        radius: f32,
        color: Vec4,
        width: f32,
    },
    /// Text centered on `center`. `scale` multiplies the host font size.
    Text {
        center: Vec2,
        text: String,
        scale: f32,
        color: Vec4,
    },
}

/// Draw commands for one frame, in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty draw list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// The commands in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Iterates the commands in paint order.
    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Darkens `color` by how far the axis points away from the viewer.
///
/// Depth 1 (facing) keeps full brightness, depth -1 scales RGB by `fade_factor`.
/// Alpha is unchanged.
#[must_use]
pub fn faded_color(color: Vec4, depth: f32, fade_factor: f32) -> Vec4 {
    let t = (depth + 1.0) * 0.5;
    let factor = fade_factor + (1.0 - fade_factor) * t;
    (color.truncate() * factor).extend(color.w)
}

/// Builds the frame's draw list.
///
/// `axes` must be back to front. `highlight_center` fills the center region,
/// which happens while it is hovered or dragged.
#[must_use]
pub fn build_draw_list(
    projection: &GizmoProjection,
    axes: &[GizmoAxis],
    hovered: Option<GizmoElement>,
    highlight_center: bool,
    style: &Style,
) -> DrawList {
    let metrics = style.metrics();
    let origin = projection.origin();
    let mut list = DrawList::new();

    if highlight_center {
        list.push(DrawCommand::CircleFilled {
            center: origin,
            radius: metrics.big_circle_radius,
            color: style.big_circle_color,
        });
    }

    for axis in axes {
        let color = faded_color(style.axis_colors[axis.axis_index], axis.depth, style.fade_factor);
        let handle = projection.handle(axis, style.line_length);
        list.push(DrawCommand::Line {
            from: origin,
            to: handle,
            color,
            width: metrics.line_width,
        });
        list.push(DrawCommand::CircleFilled {
            center: handle,
            radius: metrics.circle_radius,
            color,
        });
        if hovered == Some(axis.element()) {
            list.push(DrawCommand::Circle {
                center: handle,
                radius: metrics.highlight_radius,
                color: style.highlight_color,
                width: metrics.highlight_width,
            });
        }
    }

    // Labels go on top of every handle.
    for axis in axes.iter().filter(|axis| axis.is_facing()) {
        list.push(DrawCommand::Text {
            center: projection.handle(axis, style.line_length),
            text: style.axis_labels[axis.axis_index].clone(),
            scale: metrics.label_scale,
            color: style.label_color,
        });
    }

    list
}
