//! Core logic for viewgizmo-rs.
//!
//! This crate implements the camera-orientation gizmo without any rendering
//! or windowing dependency:
//! - [`GizmoProjection`] projects the six signed world axes into screen space
//! - [`pick::hit_test`] resolves the hovered handle or center region
//! - [`drag`] orbits the camera while the center region is dragged
//! - [`SnapAnimation`] eases the camera onto an axis-aligned view
//! - [`ViewGizmo`] ties the stages together and emits a [`DrawList`]

// Documentation lints - internal functions don't need exhaustive error docs
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Host time is f64, animation math is f32
#![allow(clippy::cast_possible_truncation)]

pub mod axis;
pub mod context;
pub mod drag;
pub mod draw;
pub mod error;
pub mod gizmo;
pub mod input;
pub mod math;
pub mod pick;
pub mod projection;
pub mod snap;
pub mod style;

pub use axis::{GizmoAxis, GizmoElement, CENTER_ID, NEAR_FACING_THRESHOLD, NONE_ID};
pub use context::Context;
pub use draw::{DrawCommand, DrawList};
pub use error::{Result, ViewGizmoError};
pub use gizmo::{GizmoOutput, ViewGizmo, DEFAULT_MOUSE_SPEED, DEFAULT_SNAP_DISTANCE};
pub use input::FrameInput;
pub use projection::GizmoProjection;
pub use snap::{SnapAnimation, SnapFrame, SnapTarget};
pub use style::{rgba8, Style, StyleMetrics};

// Re-export glam types for convenience
pub use glam::{Quat, Vec2, Vec3, Vec4};
