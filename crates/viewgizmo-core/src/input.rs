//! Per-frame host input snapshot.

use glam::Vec2;

/// Mouse position used when the host has no pointer position.
pub const OFFSCREEN: Vec2 = Vec2::splat(-f32::MAX);

/// What the gizmo reads from the host each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Current time in seconds. Only differences are used.
    pub time: f64,
    /// Pointer position in screen pixels (Y grows downward).
    pub mouse_pos: Vec2,
    /// Pointer motion since the previous frame.
    pub mouse_delta: Vec2,
    /// Primary button is held this frame.
    pub primary_down: bool,
    /// Primary button was released this frame.
    pub primary_released: bool,
    /// The current press has moved far enough to count as a drag gesture.
    pub drag_gesture: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            time: 0.0,
            mouse_pos: OFFSCREEN,
            mouse_delta: Vec2::ZERO,
            primary_down: false,
            primary_released: false,
            drag_gesture: false,
        }
    }
}

impl FrameInput {
    /// An idle frame at `time` with the pointer off screen.
    #[must_use]
    pub fn at(time: f64) -> Self {
        Self {
            time,
            ..Default::default()
        }
    }

    /// Sets the pointer position.
    #[must_use]
    pub fn with_mouse(mut self, pos: Vec2) -> Self {
        self.mouse_pos = pos;
        self
    }

    /// Sets the pointer motion since the previous frame.
    #[must_use]
    pub fn with_delta(mut self, delta: Vec2) -> Self {
        self.mouse_delta = delta;
        self
    }

    /// Marks the primary button as held.
    #[must_use]
    pub fn pressed(mut self) -> Self {
        self.primary_down = true;
        self.primary_released = false;
        self
    }

    /// Marks the primary button as released this frame.
    #[must_use]
    pub fn released(mut self) -> Self {
        self.primary_down = false;
        self.primary_released = true;
        self
    }

    /// Marks the current gesture as a drag.
    #[must_use]
    pub fn dragging(mut self) -> Self {
        self.drag_gesture = true;
        self
    }
}
