//! Orbiting the camera by dragging the center region.

use glam::{Quat, Vec2, Vec3};

use crate::math::{normalize_or, WORLD_RIGHT, WORLD_UP};

/// Rotation produced by a pointer motion of `delta` pixels.
///
/// Horizontal motion yaws about the fixed world up axis; vertical motion
/// pitches about the camera's current right axis, so pitch feels the same
/// whatever the current yaw. The result is `yaw * pitch`.
#[must_use]
pub fn drag_rotation(camera_rot: Quat, delta: Vec2, mouse_speed: f32) -> Quat {
    let yaw = Quat::from_axis_angle(WORLD_UP, -delta.x * mouse_speed);
    let right = camera_rot * WORLD_RIGHT;
    let pitch = Quat::from_axis_angle(normalize_or(right, WORLD_RIGHT), -delta.y * mouse_speed);
    yaw * pitch
}

/// Orbits the camera about the origin by the rotation for `delta`.
pub fn apply_drag(camera_pos: &mut Vec3, camera_rot: &mut Quat, delta: Vec2, mouse_speed: f32) {
    let rotation = drag_rotation(*camera_rot, delta, mouse_speed);
    *camera_pos = rotation * *camera_pos;
    *camera_rot = (rotation * *camera_rot).normalize();
}
