//! World-frame constants and small geometry helpers shared by the gizmo stages.

use glam::{Mat3, Quat, Vec3};

/// Gizmo diameter in pixels at a style scale of 1.
pub const BASE_SIZE: f32 = 256.0;

/// World right direction (+X).
pub const WORLD_RIGHT: Vec3 = Vec3::X;

/// World up direction. The gizmo works in a Y-down frame, so this is -Y.
pub const WORLD_UP: Vec3 = Vec3::NEG_Y;

/// World forward direction (+Z).
pub const WORLD_FORWARD: Vec3 = Vec3::Z;

/// Unit vectors for the X, Y and Z axes, indexed by axis index.
pub const AXIS_VECTORS: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

/// Lengths below this are treated as zero when normalizing.
pub const NORMALIZE_EPSILON: f32 = 1e-4;

/// Normalizes `v`, or returns `fallback` when `v` is (nearly) zero length.
#[must_use]
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    let length = v.length();
    if length > NORMALIZE_EPSILON && length.is_finite() {
        v / length
    } else {
        fallback
    }
}

/// Builds the rotation whose local -Z axis points along `direction`, with its
/// local +Y as close to `up` as possible.
///
/// When `up` is parallel to `direction` another reference axis is used, so the
/// result is always a unit quaternion.
#[must_use]
pub fn look_at(direction: Vec3, up: Vec3) -> Quat {
    let z = -normalize_or(direction, WORLD_FORWARD);
    let mut x = up.cross(z);
    if x.length_squared() <= NORMALIZE_EPSILON * NORMALIZE_EPSILON {
        // `up` is parallel to the view direction; pick whichever world axis is
        // least aligned with it.
        let alternate = if z.dot(WORLD_FORWARD).abs() < 0.9 {
            WORLD_FORWARD
        } else {
            WORLD_RIGHT
        };
        x = alternate.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}

/// Quadratic ease-out: `1 - (1 - t)^2`.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// Returns true when two rotations differ by more than `epsilon`, treating
/// `q` and `-q` as the same rotation.
#[must_use]
pub fn rotations_differ(a: Quat, b: Quat, epsilon: f32) -> bool {
    1.0 - a.dot(b).abs() > epsilon
}
