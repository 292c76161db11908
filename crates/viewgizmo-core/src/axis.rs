//! Gizmo elements and the per-frame axis records.

use glam::Vec3;

use crate::math::AXIS_VECTORS;

/// Number of axis handles (two per axis).
pub const AXIS_HANDLE_COUNT: usize = 6;

/// Integer id of the center free-rotate region.
pub const CENTER_ID: i32 = 6;

/// Integer id meaning "nothing hovered".
pub const NONE_ID: i32 = -1;

/// Handles whose depth is below this point away from the viewer; they are
/// neither pickable nor labelled.
pub const NEAR_FACING_THRESHOLD: f32 = -0.1;

/// An interactive element of the gizmo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoElement {
    /// One of the six axis handles, by id `0..=5`.
    ///
    /// Id `2i` is the positive end of axis `i`, id `2i + 1` the negative end.
    Axis(u8),
    /// The central free-rotate region.
    Center,
}

impl GizmoElement {
    /// Returns the integer id (`0..=5` for handles, 6 for the center).
    #[must_use]
    pub fn id(self) -> i32 {
        match self {
            GizmoElement::Axis(id) => i32::from(id),
            GizmoElement::Center => CENTER_ID,
        }
    }

    /// Converts from an integer id. Returns `None` for anything outside `0..=6`.
    #[must_use]
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0..=5 => u8::try_from(id).ok().map(GizmoElement::Axis),
            CENTER_ID => Some(GizmoElement::Center),
            _ => None,
        }
    }

    /// Returns the handle id if this is an axis handle.
    #[must_use]
    pub fn axis_id(self) -> Option<u8> {
        match self {
            GizmoElement::Axis(id) => Some(id),
            GizmoElement::Center => None,
        }
    }
}

/// One signed axis direction, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoAxis {
    /// Handle id, `0..=5`.
    pub id: u8,
    /// Axis index: 0 = X, 1 = Y, 2 = Z.
    pub axis_index: usize,
    /// Camera-space z of the direction. Positive faces the viewer.
    pub depth: f32,
    /// Signed unit direction in world space.
    pub direction: Vec3,
}

impl GizmoAxis {
    /// Builds the axis for handle `id` with the given camera-space depth.
    ///
    /// Returns `None` for ids outside `0..=5`.
    #[must_use]
    pub fn new(id: u8, depth: f32) -> Option<Self> {
        let axis_index = usize::from(id / 2);
        let sign = if id % 2 == 0 { 1.0 } else { -1.0 };
        AXIS_VECTORS.get(axis_index).map(|&axis| Self {
            id,
            axis_index,
            depth,
            direction: axis * sign,
        })
    }

    /// All six handles in id order, each with depth 0.
    #[must_use]
    pub fn all() -> [Self; AXIS_HANDLE_COUNT] {
        std::array::from_fn(|i| {
            let axis_index = i / 2;
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            Self {
                id: i as u8,
                axis_index,
                depth: 0.0,
                direction: AXIS_VECTORS[axis_index] * sign,
            }
        })
    }

    /// Whether the handle faces the viewer enough to be picked and labelled.
    #[must_use]
    pub fn is_facing(&self) -> bool {
        self.depth >= NEAR_FACING_THRESHOLD
    }

    /// The gizmo element this axis is picked as.
    #[must_use]
    pub fn element(&self) -> GizmoElement {
        GizmoElement::Axis(self.id)
    }
}
