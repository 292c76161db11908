//! Converting egui input into a gizmo frame snapshot.

use glam::Vec2;
use viewgizmo_core::input::OFFSCREEN;
use viewgizmo_core::FrameInput;

/// Builds the gizmo's input snapshot from egui's input state.
///
/// A missing pointer position maps to an off-screen point so nothing is hovered.
#[must_use]
pub fn frame_input(input: &egui::InputState) -> FrameInput {
    let pointer = &input.pointer;
    FrameInput {
        time: input.time,
        mouse_pos: pointer
            .latest_pos()
            .map_or(OFFSCREEN, |p| Vec2::new(p.x, p.y)),
        mouse_delta: Vec2::new(pointer.delta().x, pointer.delta().y),
        primary_down: pointer.primary_down(),
        primary_released: pointer.primary_released(),
        drag_gesture: pointer.is_decidedly_dragging(),
    }
}
