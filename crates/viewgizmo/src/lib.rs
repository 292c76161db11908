//! viewgizmo: an interactive camera-orientation gizmo.
//!
//! The gizmo shows the six signed world axes as handles around a center
//! region. Clicking a handle snaps the camera onto that axis, optionally
//! with an eased orbit; dragging the center orbits the camera about the
//! origin.
//!
//! # Quick Start
//!
//! ```no_run
//! use viewgizmo::*;
//!
//! let mut gizmo = ViewGizmo::new();
//! let mut camera_pos = Vec3::new(0.0, 0.0, 5.0);
//! let mut camera_rot = Quat::IDENTITY;
//!
//! // once per frame, with the host's input
//! let input = FrameInput::at(0.0).with_mouse(Vec2::new(120.0, 80.0));
//! let output = gizmo.manipulate(
//!     &mut camera_pos,
//!     &mut camera_rot,
//!     Vec2::new(150.0, 150.0),
//!     DEFAULT_SNAP_DISTANCE,
//!     DEFAULT_MOUSE_SPEED,
//!     &input,
//! );
//! for command in &output.draw_list {
//!     // hand each command to the renderer
//!     let _ = command;
//! }
//! ```
//!
//! With egui, [`EguiViewGizmo::interact`] reads input and paints in one call.

// Re-export core types
pub use viewgizmo_core::{
    axis::{GizmoAxis, GizmoElement, CENTER_ID, NEAR_FACING_THRESHOLD, NONE_ID},
    context::Context,
    draw::{DrawCommand, DrawList},
    error::{Result, ViewGizmoError},
    gizmo::{GizmoOutput, ViewGizmo, DEFAULT_MOUSE_SPEED, DEFAULT_SNAP_DISTANCE},
    input::FrameInput,
    math::look_at,
    projection::GizmoProjection,
    snap::{SnapAnimation, SnapTarget},
    style::{rgba8, Style, StyleMetrics},
    Quat, Vec2, Vec3, Vec4,
};

// Re-export the egui integration
pub use viewgizmo_egui::{color32, frame_input, paint, EguiViewGizmo};
