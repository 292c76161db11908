//! One-call view gizmo widget for egui.

use egui::{Pos2, TextStyle, Ui};
use glam::{Quat, Vec2, Vec3};
use viewgizmo_core::{
    GizmoOutput, Style, ViewGizmo, DEFAULT_MOUSE_SPEED, DEFAULT_SNAP_DISTANCE,
};

use crate::input::frame_input;
use crate::painter::paint;

/// A [`ViewGizmo`] driven by egui input and painted with the ui's painter.
#[derive(Debug, Clone)]
pub struct EguiViewGizmo {
    gizmo: ViewGizmo,
    /// Distance from the origin the camera snaps to.
    pub snap_distance: f32,
    /// Drag rotation speed, in radians per pixel.
    pub mouse_speed: f32,
}

impl Default for EguiViewGizmo {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiViewGizmo {
    /// Creates a gizmo with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(Style::default())
    }

    /// Creates a gizmo with the given style.
    #[must_use]
    pub fn with_style(style: Style) -> Self {
        Self {
            gizmo: ViewGizmo::with_style(style),
            snap_distance: DEFAULT_SNAP_DISTANCE,
            mouse_speed: DEFAULT_MOUSE_SPEED,
        }
    }

    /// Sets the snap distance.
    #[must_use]
    pub fn with_snap_distance(mut self, snap_distance: f32) -> Self {
        self.snap_distance = snap_distance;
        self
    }

    /// Sets the drag rotation speed.
    #[must_use]
    pub fn with_mouse_speed(mut self, mouse_speed: f32) -> Self {
        self.mouse_speed = mouse_speed;
        self
    }

    /// The wrapped gizmo.
    #[must_use]
    pub fn gizmo(&self) -> &ViewGizmo {
        &self.gizmo
    }

    /// The wrapped gizmo, mutably.
    pub fn gizmo_mut(&mut self) -> &mut ViewGizmo {
        &mut self.gizmo
    }

    /// Draws the gizmo centered at `anchor` and handles interaction.
    ///
    /// Returns true if the camera was modified.
    pub fn interact(
        &mut self,
        ui: &Ui,
        camera_pos: &mut Vec3,
        camera_rot: &mut Quat,
        anchor: Pos2,
    ) -> bool {
        let input = ui.input(frame_input);
        let GizmoOutput {
            modified,
            draw_list,
        } = self.gizmo.manipulate(
            camera_pos,
            camera_rot,
            Vec2::new(anchor.x, anchor.y),
            self.snap_distance,
            self.mouse_speed,
            &input,
        );

        let font_size = TextStyle::Body.resolve(ui.style()).size;
        paint(ui.painter(), &draw_list, font_size);

        // egui only repaints on input; keep frames coming until the snap lands
        if self.gizmo.context().is_animating() {
            ui.ctx().request_repaint();
        }
        modified
    }
}
