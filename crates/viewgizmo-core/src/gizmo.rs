//! The view gizmo instance and its per-frame entry point.

use glam::{Quat, Vec2, Vec3};

use crate::axis::{GizmoAxis, GizmoElement};
use crate::context::Context;
use crate::drag::apply_drag;
use crate::draw::{build_draw_list, DrawList};
use crate::input::FrameInput;
use crate::pick::hit_test;
use crate::projection::GizmoProjection;
use crate::snap::{SnapAnimation, SnapTarget};
use crate::style::Style;

/// Default distance from the origin the camera snaps to.
pub const DEFAULT_SNAP_DISTANCE: f32 = 5.0;

/// Default drag rotation speed, in radians per pixel.
pub const DEFAULT_MOUSE_SPEED: f32 = 0.005;

/// Result of one [`ViewGizmo::manipulate`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GizmoOutput {
    /// The camera pose was changed this frame.
    pub modified: bool,
    /// What to draw this frame, in paint order.
    pub draw_list: DrawList,
}

/// A camera-orientation gizmo.
///
/// Owns its interaction state; create one per gizmo shown on screen and call
/// [`ViewGizmo::manipulate`] once per frame from the thread driving the UI.
#[derive(Debug, Clone, Default)]
pub struct ViewGizmo {
    style: Style,
    context: Context,
}

impl ViewGizmo {
    /// Creates a gizmo with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gizmo with the given style.
    #[must_use]
    pub fn with_style(style: Style) -> Self {
        Self {
            style,
            context: Context::default(),
        }
    }

    /// The style in use.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The style, for changes that take effect next frame.
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Interaction state carried between frames.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Whether any gizmo element is hovered.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.context.is_hovering()
    }

    /// Whether the gizmo is hovered or dragged; hosts use this to keep the
    /// pointer from reaching their own camera controls.
    #[must_use]
    pub fn is_using(&self) -> bool {
        self.context.is_using()
    }

    /// Clears hover and drag state.
    pub fn reset(&mut self) {
        self.context.reset();
    }

    /// Runs one frame of the gizmo.
    ///
    /// Advances a running snap animation, projects the axes around `anchor`,
    /// resolves hover, orbits the camera while the center is dragged and
    /// snaps onto an axis when its handle is clicked. `camera_pos` and
    /// `camera_rot` are updated in place.
    pub fn manipulate(
        &mut self,
        camera_pos: &mut Vec3,
        camera_rot: &mut Quat,
        anchor: Vec2,
        snap_distance: f32,
        mouse_speed: f32,
        input: &FrameInput,
    ) -> GizmoOutput {
        let mut modified = self.advance_animation(camera_pos, camera_rot, input.time);

        let projection = GizmoProjection::new(
            *camera_pos,
            *camera_rot,
            anchor,
            self.style.metrics().half_size(),
        );
        let axes = projection.axes();

        self.context.hovered = None;
        if !self.context.dragging && !self.context.is_animating() {
            self.context.hovered = hit_test(&projection, &axes, input.mouse_pos, &self.style);
        }

        let highlight_center =
            self.context.hovered == Some(GizmoElement::Center) || self.context.dragging;
        let draw_list = build_draw_list(
            &projection,
            &axes,
            self.context.hovered,
            highlight_center,
            &self.style,
        );

        if input.primary_down {
            if !self.context.dragging && self.grabs_center(&projection, &axes, input.mouse_pos) {
                self.context.begin_drag();
            }
            if self.context.dragging {
                apply_drag(camera_pos, camera_rot, input.mouse_delta, mouse_speed);
                modified = true;
            }
        } else {
            self.context.end_drag();
        }

        if input.primary_released && !input.drag_gesture {
            let target = self
                .context
                .hovered
                .and_then(|element| SnapTarget::for_element(element, snap_distance));
            if let Some(target) = target {
                modified |= self.snap(&target, camera_pos, camera_rot, input.time);
            }
        }

        GizmoOutput {
            modified,
            draw_list,
        }
    }

    /// Applies the running animation for `time`. Returns whether the pose changed.
    fn advance_animation(
        &mut self,
        camera_pos: &mut Vec3,
        camera_rot: &mut Quat,
        time: f64,
    ) -> bool {
        let Some(animation) = self.context.animation else {
            return false;
        };
        let frame = animation.sample(time, self.style.snap_animation_duration);
        *camera_pos = frame.position;
        *camera_rot = frame.rotation;
        if frame.finished {
            self.context.animation = None;
            log::debug!("view gizmo snap animation finished at {:?}", frame.position);
        }
        true
    }

    /// Whether a held press should start a center drag this frame.
    ///
    /// Hover is suppressed while animating, so a press over the center is
    /// tested directly to let it interrupt the animation.
    fn grabs_center(&self, projection: &GizmoProjection, axes: &[GizmoAxis], mouse: Vec2) -> bool {
        if self.context.is_animating() {
            hit_test(projection, axes, mouse, &self.style) == Some(GizmoElement::Center)
        } else {
            self.context.hovered == Some(GizmoElement::Center)
        }
    }

    /// Moves the camera to `target`, either at once or by starting an
    /// animation. Returns whether the pose changed this frame.
    fn snap(
        &mut self,
        target: &SnapTarget,
        camera_pos: &mut Vec3,
        camera_rot: &mut Quat,
        time: f64,
    ) -> bool {
        if self.style.snap_is_animated() {
            if target.differs_from(*camera_pos, *camera_rot) {
                log::debug!("view gizmo snapping to {:?} (animated)", target.position);
                self.context.animation =
                    Some(SnapAnimation::new(time, *camera_pos, *camera_rot, target));
            }
            false
        } else {
            log::debug!("view gizmo snapping to {:?}", target.position);
            *camera_pos = target.position;
            *camera_rot = target.rotation;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Vec2 = Vec2::new(200.0, 200.0);
    // +X handle for an identity camera
    const POS_X_HANDLE: Vec2 = Vec2::new(136.0, 200.0);
    // inside the center region, clear of every handle
    const CENTER_SPOT: Vec2 = Vec2::new(230.0, 230.0);

    fn frame(
        gizmo: &mut ViewGizmo,
        pos: &mut Vec3,
        rot: &mut Quat,
        input: FrameInput,
    ) -> GizmoOutput {
        gizmo.manipulate(
            pos,
            rot,
            ANCHOR,
            DEFAULT_SNAP_DISTANCE,
            DEFAULT_MOUSE_SPEED,
            &input,
        )
    }

    #[test]
    fn test_hover_resolved_each_frame() {
        let mut gizmo = ViewGizmo::new();
        let (mut pos, mut rot) = (Vec3::Z * 5.0, Quat::IDENTITY);

        frame(&mut gizmo, &mut pos, &mut rot, FrameInput::at(0.0).with_mouse(POS_X_HANDLE));
        assert_eq!(gizmo.context().hovered_id(), 0);
        assert!(gizmo.is_hovering());

        frame(&mut gizmo, &mut pos, &mut rot, FrameInput::at(0.1).with_mouse(CENTER_SPOT));
        assert_eq!(gizmo.context().hovered_id(), 6);

        let out = frame(&mut gizmo, &mut pos, &mut rot, FrameInput::at(0.2));
        assert_eq!(gizmo.context().hovered_id(), -1);
        assert!(!out.modified);
    }

    #[test]
    fn test_immediate_snap() {
        let mut gizmo = ViewGizmo::with_style(Style::default().with_snap_animation(false, 0.3));
        let (mut pos, mut rot) = (Vec3::Z * 5.0, Quat::IDENTITY);

        frame(&mut gizmo, &mut pos, &mut rot, FrameInput::at(0.0).with_mouse(POS_X_HANDLE));
        let out = frame(
            &mut gizmo,
            &mut pos,
            &mut rot,
            FrameInput::at(0.1).with_mouse(POS_X_HANDLE).released(),
        );

        let target = SnapTarget::for_axis(0, DEFAULT_SNAP_DISTANCE).unwrap();
        assert!(out.modified);
        assert_eq!(pos, target.position);
        assert_eq!(rot, target.rotation);
        assert!(!gizmo.context().is_animating());
    }

    #[test]
    fn test_release_after_drag_gesture_does_not_snap() {
        let mut gizmo = ViewGizmo::new();
        let (mut pos, mut rot) = (Vec3::Z * 5.0, Quat::IDENTITY);
        let out = frame(
            &mut gizmo,
            &mut pos,
            &mut rot,
            FrameInput::at(0.0).with_mouse(POS_X_HANDLE).released().dragging(),
        );
        assert!(!out.modified);
        assert!(!gizmo.context().is_animating());
        assert_eq!(pos, Vec3::Z * 5.0);
    }

    #[test]
    fn test_snap_to_current_pose_does_not_animate() {
        let target = SnapTarget::for_axis(0, DEFAULT_SNAP_DISTANCE).unwrap();
        let mut gizmo = ViewGizmo::new();
        let (mut pos, mut rot) = (target.position, target.rotation);

        // find the +X handle for this pose
        let half_size = gizmo.style().metrics().half_size();
        let projection = GizmoProjection::new(pos, rot, ANCHOR, half_size);
        let axis = projection.axes().into_iter().find(|a| a.id == 0).unwrap();
        let handle = projection.handle(&axis, gizmo.style().line_length);

        let input = FrameInput::at(0.0).with_mouse(handle).released();
        let out = frame(&mut gizmo, &mut pos, &mut rot, input);
        assert_eq!(gizmo.context().hovered_id(), 0);
        assert!(!out.modified);
        assert!(!gizmo.context().is_animating());
    }

    #[test]
    fn test_release_clears_dragging() {
        let mut gizmo = ViewGizmo::new();
        let (mut pos, mut rot) = (Vec3::Z * 5.0, Quat::IDENTITY);

        frame(&mut gizmo, &mut pos, &mut rot, FrameInput::at(0.0).with_mouse(CENTER_SPOT));
        let input = FrameInput::at(0.1).with_mouse(CENTER_SPOT).pressed();
        let out = frame(&mut gizmo, &mut pos, &mut rot, input);
        assert!(gizmo.context().is_dragging());
        assert!(gizmo.is_using());
        assert!(out.modified);
        assert!(out.draw_list.iter().any(|c| matches!(
            c,
            crate::DrawCommand::CircleFilled { radius, .. } if *radius == 80.0
        )));

        let input = FrameInput::at(0.2).with_mouse(CENTER_SPOT).released();
        frame(&mut gizmo, &mut pos, &mut rot, input);
        assert!(!gizmo.context().is_dragging());
        assert!(!gizmo.context().is_animating());
    }

    #[test]
    fn test_duration_cleared_mid_animation_finishes_next_tick() {
        let mut gizmo = ViewGizmo::new();
        let (mut pos, mut rot) = (Vec3::Z * 5.0, Quat::IDENTITY);

        frame(&mut gizmo, &mut pos, &mut rot, FrameInput::at(0.0).with_mouse(POS_X_HANDLE));
        let input = FrameInput::at(0.1).with_mouse(POS_X_HANDLE).released();
        frame(&mut gizmo, &mut pos, &mut rot, input);
        assert!(gizmo.context().is_animating());

        gizmo.style_mut().snap_animation_duration = 0.0;
        let out = frame(&mut gizmo, &mut pos, &mut rot, FrameInput::at(0.11));
        let target = SnapTarget::for_axis(0, DEFAULT_SNAP_DISTANCE).unwrap();
        assert!(out.modified);
        assert!(!gizmo.context().is_animating());
        assert_eq!(pos, target.position);
        assert_eq!(rot, target.rotation);
    }
}
