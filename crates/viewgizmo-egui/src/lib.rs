//! egui integration for viewgizmo-rs.
//!
//! Reads the per-frame pointer state from egui, runs the gizmo and paints its
//! draw list with an [`egui::Painter`].

// Colors are quantized from [0, 1] floats to 8-bit channels
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod gizmo;
pub mod input;
pub mod painter;

pub use gizmo::EguiViewGizmo;
pub use input::frame_input;
pub use painter::{color32, paint, pos2};
