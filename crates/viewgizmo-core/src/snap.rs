//! Snapping the camera onto a world axis, immediately or as an eased orbit.

use glam::{Quat, Vec3};

use crate::axis::GizmoElement;
use crate::math::{
    ease_out, look_at, normalize_or, rotations_differ, AXIS_VECTORS, NORMALIZE_EPSILON,
    WORLD_FORWARD, WORLD_UP,
};

/// Squared position difference below which the camera already sits on the target.
pub const POSITION_EPSILON_SQ: f32 = 1e-4;

/// Rotation difference (`1 - |dot|`) below which the camera already faces the target.
pub const ROTATION_EPSILON: f32 = 1e-4;

/// The pose a snap to one axis handle ends in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    /// Final camera position.
    pub position: Vec3,
    /// Final camera orientation.
    pub rotation: Quat,
    /// Up reference used to build `rotation`.
    pub up: Vec3,
}

impl SnapTarget {
    /// Computes the target for handle `axis_id` at `snap_distance` from the origin.
    ///
    /// Even ids put the camera on the negative side of their axis, odd ids on
    /// the positive side. Snapping onto Y uses world forward as the up
    /// reference, every other axis uses world up. Returns `None` for ids
    /// outside `0..=5`.
    #[must_use]
    pub fn for_axis(axis_id: u8, snap_distance: f32) -> Option<Self> {
        let axis_index = usize::from(axis_id / 2);
        let axis = *AXIS_VECTORS.get(axis_index)?;
        let sign = if axis_id % 2 == 0 { -1.0 } else { 1.0 };
        let direction = axis * sign;
        let up = if axis_index == 1 {
            -WORLD_FORWARD
        } else {
            -WORLD_UP
        };
        Some(Self {
            position: direction * snap_distance,
            rotation: look_at(direction, up),
            up,
        })
    }

    /// Computes the target for a hovered element, or `None` for the center.
    #[must_use]
    pub fn for_element(element: GizmoElement, snap_distance: f32) -> Option<Self> {
        element
            .axis_id()
            .and_then(|id| Self::for_axis(id, snap_distance))
    }

    /// Whether a camera at `position`/`rotation` still has to move to reach this target.
    #[must_use]
    pub fn differs_from(&self, position: Vec3, rotation: Quat) -> bool {
        position.distance_squared(self.position) > POSITION_EPSILON_SQ
            || rotations_differ(rotation, self.rotation, ROTATION_EPSILON)
    }
}

/// A camera pose produced by one animation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapFrame {
    /// Interpolated camera position.
    pub position: Vec3,
    /// Interpolated camera orientation.
    pub rotation: Quat,
    /// The animation reached its end on this tick.
    pub finished: bool,
}

/// An in-flight snap animation.
///
/// The camera orbits the origin: the direction is blended and renormalized
/// while the distance is blended on its own, so the path never cuts through
/// the origin. Orientation is rebuilt with [`look_at`] each tick from the
/// blended direction and up vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnimation {
    /// Host time at which the snap was triggered.
    pub start_time: f64,
    /// Camera position at trigger time.
    pub start_pos: Vec3,
    /// Final camera position.
    pub target_pos: Vec3,
    /// Camera local up at trigger time.
    pub start_up: Vec3,
    /// Final camera orientation.
    pub target_rot: Quat,
    /// Up reference of the target pose.
    pub target_up: Vec3,
}

impl SnapAnimation {
    /// Starts an animation from the current camera pose towards `target`.
    ///
    /// The start up vector is the camera's local +Y at trigger time.
    #[must_use]
    pub fn new(start_time: f64, position: Vec3, rotation: Quat, target: &SnapTarget) -> Self {
        Self {
            start_time,
            start_pos: position,
            target_pos: target.position,
            start_up: rotation * Vec3::Y,
            target_rot: target.rotation,
            target_up: target.up,
        }
    }

    /// Normalized, eased progress at `time` for an animation lasting `duration` seconds.
    #[must_use]
    pub fn progress(&self, time: f64, duration: f32) -> f32 {
        let elapsed = (time - self.start_time) as f32;
        let t = if duration > 0.0 {
            (elapsed / duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        ease_out(t)
    }

    /// Camera pose at eased progress `t` in `[0, 1]`.
    #[must_use]
    pub fn pose_at(&self, t: f32) -> (Vec3, Quat) {
        let target_dir = normalize_or(self.target_pos, WORLD_FORWARD);
        let start_length = self.start_pos.length();
        let direction = if start_length > NORMALIZE_EPSILON
            && self.target_pos.length() > NORMALIZE_EPSILON
        {
            let start_dir = self.start_pos / start_length;
            normalize_or(start_dir.lerp(target_dir, t), target_dir)
        } else {
            normalize_or(WORLD_FORWARD.lerp(target_dir, t), target_dir)
        };
        let distance = start_length + (self.target_pos.length() - start_length) * t;
        let up = normalize_or(self.start_up.lerp(self.target_up, t), self.target_up);
        (direction * distance, look_at(direction, up))
    }

    /// Advances the animation to `time`.
    ///
    /// On the final tick the exact target pose is returned rather than the
    /// interpolated one.
    #[must_use]
    pub fn sample(&self, time: f64, duration: f32) -> SnapFrame {
        let t = self.progress(time, duration);
        if t >= 1.0 {
            return SnapFrame {
                position: self.target_pos,
                rotation: self.target_rot,
                finished: true,
            };
        }
        let (position, rotation) = self.pose_at(t);
        SnapFrame {
            position,
            rotation,
            finished: false,
        }
    }
}
