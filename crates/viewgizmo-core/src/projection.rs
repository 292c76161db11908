//! Projecting the world axes into gizmo screen space.

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use crate::axis::{GizmoAxis, AXIS_HANDLE_COUNT};
use crate::input::OFFSCREEN;

/// Half extent of the gizmo-local depth range.
const DEPTH_RANGE: f32 = 100.0;

/// Screen-space projection of the gizmo for one frame.
///
/// Only the camera rotation affects the result: translation is stripped from
/// the view transform so the gizmo stays centered at `anchor` whatever the
/// camera distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoProjection {
    /// Rotation-only view transform.
    pub view: Mat4,
    /// Orthographic projection of the `[-1, 1]` cube.
    pub projection: Mat4,
    /// `projection * view`.
    pub view_projection: Mat4,
    /// Screen position of the gizmo center.
    pub anchor: Vec2,
    /// Pixels per NDC unit (half the gizmo diameter).
    pub half_size: f32,
}

impl GizmoProjection {
    /// Builds the projection for a camera pose.
    #[must_use]
    pub fn new(camera_pos: Vec3, camera_rot: Quat, anchor: Vec2, half_size: f32) -> Self {
        let world = Mat4::from_rotation_translation(camera_rot, camera_pos);
        let view = Mat4::from_mat3(Mat3::from_mat4(world.inverse()));
        // left/right swapped: gizmo X runs right-to-left in NDC
        let projection =
            Mat4::orthographic_rh_gl(1.0, -1.0, -1.0, 1.0, -DEPTH_RANGE, DEPTH_RANGE);
        Self {
            view,
            projection,
            view_projection: projection * view,
            anchor,
            half_size,
        }
    }

    /// Camera-space z of a world direction.
    #[must_use]
    pub fn depth(&self, direction: Vec3) -> f32 {
        self.view.transform_vector3(direction).z
    }

    /// The six signed axes, sorted back to front (ascending depth).
    #[must_use]
    pub fn axes(&self) -> [GizmoAxis; AXIS_HANDLE_COUNT] {
        let mut axes = GizmoAxis::all();
        for axis in &mut axes {
            axis.depth = self.depth(axis.direction);
        }
        axes.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        axes
    }

    /// Projects a gizmo-local point to screen pixels.
    ///
    /// Returns [`OFFSCREEN`] when the homogeneous divisor is zero.
    #[must_use]
    pub fn world_to_screen(&self, point: Vec3) -> Vec2 {
        let clip = self.view_projection * point.extend(1.0);
        if clip.w == 0.0 {
            return OFFSCREEN;
        }
        let ndc = clip.truncate() / clip.w;
        Vec2::new(
            self.anchor.x + ndc.x * self.half_size,
            self.anchor.y - ndc.y * self.half_size,
        )
    }

    /// Screen position of the gizmo origin.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.world_to_screen(Vec3::ZERO)
    }

    /// Screen position of an axis handle at the end of a line of `line_length`.
    #[must_use]
    pub fn handle(&self, axis: &GizmoAxis, line_length: f32) -> Vec2 {
        self.world_to_screen(axis.direction * line_length)
    }
}
