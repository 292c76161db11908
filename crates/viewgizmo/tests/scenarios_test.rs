//! End-to-end interaction scenarios for the view gizmo.
//!
//! Each test drives `ViewGizmo::manipulate` through a sequence of frames the
//! way a host's frame loop would.

use viewgizmo::*;

const ANCHOR: Vec2 = Vec2::new(200.0, 200.0);

/// +X handle for a camera with identity rotation.
const POS_X_HANDLE: Vec2 = Vec2::new(136.0, 200.0);

/// Inside the center region but farther than any handle can reach.
const CENTER_SPOT: Vec2 = Vec2::new(279.5, 200.0);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Harness {
    gizmo: ViewGizmo,
    pos: Vec3,
    rot: Quat,
    snap_distance: f32,
    mouse_speed: f32,
}

impl Harness {
    fn new(style: Style) -> Self {
        init_logging();
        Self {
            gizmo: ViewGizmo::with_style(style),
            pos: Vec3::new(0.0, 0.0, 5.0),
            rot: Quat::IDENTITY,
            snap_distance: DEFAULT_SNAP_DISTANCE,
            mouse_speed: DEFAULT_MOUSE_SPEED,
        }
    }

    fn frame(&mut self, input: FrameInput) -> GizmoOutput {
        self.gizmo.manipulate(
            &mut self.pos,
            &mut self.rot,
            ANCHOR,
            self.snap_distance,
            self.mouse_speed,
            &input,
        )
    }

    /// Screen position of handle `id` for the current pose.
    fn handle(&self, id: u8) -> (Vec2, GizmoAxis) {
        let style = self.gizmo.style();
        let projection =
            GizmoProjection::new(self.pos, self.rot, ANCHOR, style.metrics().half_size());
        let axis = projection
            .axes()
            .into_iter()
            .find(|a| a.id == id)
            .expect("six handles");
        (projection.handle(&axis, style.line_length), axis)
    }

    fn click(&mut self, at: Vec2, time: f64) -> GizmoOutput {
        self.frame(FrameInput::at(time).with_mouse(at));
        self.frame(FrameInput::at(time + 0.01).with_mouse(at).pressed());
        self.frame(FrameInput::at(time + 0.02).with_mouse(at).released())
    }
}

#[test]
fn test_animated_snap_to_neg_x() {
    let mut h = Harness::new(Style::default().with_snap_animation(true, 0.3));

    let out = h.click(POS_X_HANDLE, 0.0);
    assert!(!out.modified, "the trigger frame only starts the animation");
    assert!(h.gizmo.context().is_animating());
    assert_eq!(h.pos, Vec3::new(0.0, 0.0, 5.0));

    // halfway: still orbiting at distance 5, hover suppressed
    let out = h.frame(FrameInput::at(0.17).with_mouse(POS_X_HANDLE));
    assert!(out.modified);
    assert!(h.gizmo.context().is_animating());
    assert_eq!(h.gizmo.context().hovered_id(), NONE_ID);
    assert!((h.pos.length() - 5.0).abs() < 1e-4);
    assert!(h.pos.x < 0.0 && h.pos.z > 0.0);

    let out = h.frame(FrameInput::at(0.4));
    assert!(out.modified);
    assert!(!h.gizmo.context().is_animating());
    assert_eq!(h.pos, Vec3::new(-5.0, 0.0, 0.0));
    assert_eq!(h.rot, look_at(Vec3::NEG_X, Vec3::Y));

    // settled: nothing else changes
    let out = h.frame(FrameInput::at(0.5));
    assert!(!out.modified);
}

#[test]
fn test_animation_stays_on_arc() {
    let mut h = Harness::new(Style::default());
    h.pos = Vec3::new(0.0, 0.0, 2.0);
    h.click(POS_X_HANDLE, 0.0);
    assert!(h.gizmo.context().is_animating());

    let (lo, hi) = (2.0, 5.0);
    let mut previous = h.pos.length();
    for step in 1..=40 {
        let time = 0.02 + f64::from(step) * 0.01;
        h.frame(FrameInput::at(time));
        let distance = h.pos.length();
        assert!(distance >= lo - 1e-4 && distance <= hi + 1e-4);
        assert!(distance >= previous - 1e-4, "distance grows monotonically");
        previous = distance;
    }
    assert!(!h.gizmo.context().is_animating());
    assert_eq!(h.pos, Vec3::new(-5.0, 0.0, 0.0));
}

#[test]
fn test_immediate_snap_for_every_handle() {
    for id in 0..6u8 {
        let mut h = Harness::new(Style::default().with_snap_animation(false, 0.3));
        let target = SnapTarget::for_axis(id, DEFAULT_SNAP_DISTANCE).unwrap();
        // sit near the target so the handle faces the viewer
        h.rot = Quat::from_rotation_x(0.2) * target.rotation;
        h.pos = Vec3::new(1.0, 2.0, 3.0);

        let (handle, axis) = h.handle(id);
        assert!(axis.is_facing());
        h.frame(FrameInput::at(0.0).with_mouse(handle));
        assert_eq!(h.gizmo.context().hovered_id(), i32::from(id));

        let out = h.frame(FrameInput::at(0.1).with_mouse(handle).released());
        assert!(out.modified);
        assert_eq!(h.pos, target.position);
        assert_eq!(h.rot, target.rotation);
        assert!(!h.gizmo.context().is_animating());
    }
}

#[test]
fn test_center_drag_yaws_about_world_up() {
    let mut h = Harness::new(Style::default());
    h.frame(FrameInput::at(0.0).with_mouse(CENTER_SPOT));
    assert_eq!(h.gizmo.context().hovered_id(), CENTER_ID);

    let out = h.frame(
        FrameInput::at(0.016)
            .with_mouse(CENTER_SPOT)
            .with_delta(Vec2::new(10.0, 0.0))
            .pressed(),
    );
    assert!(out.modified);
    assert!(h.gizmo.context().is_dragging());

    let yaw = Quat::from_axis_angle(Vec3::Y, 0.05);
    assert!((h.pos - yaw * Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
    assert!(h.rot.dot(yaw).abs() > 1.0 - 1e-6);

    // every held frame reports a modification, even without motion
    let out = h.frame(FrameInput::at(0.032).with_mouse(CENTER_SPOT).pressed());
    assert!(out.modified);
    assert_eq!(h.gizmo.context().hovered_id(), NONE_ID);
}

#[test]
fn test_drag_interrupts_animation() {
    let mut h = Harness::new(Style::default());
    h.click(POS_X_HANDLE, 0.0);
    assert!(h.gizmo.context().is_animating());

    let out = h.frame(
        FrameInput::at(0.1)
            .with_mouse(CENTER_SPOT)
            .with_delta(Vec2::new(4.0, -3.0))
            .pressed(),
    );
    assert!(out.modified);
    assert!(h.gizmo.context().is_dragging());
    assert!(!h.gizmo.context().is_animating());

    // released: no snap resumes
    let before = h.pos;
    let out = h.frame(FrameInput::at(0.5).with_mouse(CENTER_SPOT).released());
    assert!(!out.modified);
    assert!(!h.gizmo.context().is_dragging());
    assert_eq!(h.pos, before);
}

#[test]
fn test_release_over_center_never_snaps() {
    for animate in [true, false] {
        let mut h = Harness::new(Style::default().with_snap_animation(animate, 0.3));
        let out = h.click(CENTER_SPOT, 0.0);
        assert!(!out.modified);
        assert!(!h.gizmo.context().is_animating());
        assert!(!h.gizmo.context().is_dragging());
    }
}

#[test]
fn test_away_facing_handle_is_not_clickable() {
    let mut h = Harness::new(Style::default().with_snap_animation(false, 0.3));
    // -Z points straight away and sits under +Z at the anchor
    let (handle, axis) = h.handle(5);
    assert!(!axis.is_facing());
    h.click(handle, 0.0);
    assert_ne!(h.gizmo.context().hovered_id(), 5);
    let target = SnapTarget::for_axis(4, DEFAULT_SNAP_DISTANCE).unwrap();
    assert_eq!(h.pos, target.position);
}

#[test]
fn test_style_from_json_drives_gizmo() {
    let style = Style::from_json(r#"{ "scale": 0.5, "animate_snap": false }"#).unwrap();
    let mut h = Harness::new(style);
    // half scale: the +X handle is 32px from the anchor
    let out = h.click(Vec2::new(168.0, 200.0), 0.0);
    assert!(out.modified);
    assert_eq!(h.pos, Vec3::new(-5.0, 0.0, 0.0));
}
