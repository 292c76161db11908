//! Persistent interaction state for one gizmo instance.

use crate::axis::{GizmoElement, NONE_ID};
use crate::snap::SnapAnimation;

/// State carried between frames.
///
/// Each gizmo instance owns its own context. At most one of dragging and
/// animating is active at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    /// Element under the pointer this frame, if any.
    pub(crate) hovered: Option<GizmoElement>,
    /// A center drag is in progress.
    pub(crate) dragging: bool,
    /// The in-flight snap animation.
    pub(crate) animation: Option<SnapAnimation>,
}

impl Context {
    /// Creates an idle context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The element hovered this frame.
    #[must_use]
    pub fn hovered(&self) -> Option<GizmoElement> {
        self.hovered
    }

    /// The hovered element as an integer id: -1 for none, 0..=5 for handles, 6 for center.
    #[must_use]
    pub fn hovered_id(&self) -> i32 {
        self.hovered.map_or(NONE_ID, GizmoElement::id)
    }

    /// Whether any element is hovered.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    /// Whether the gizmo is hovered or being dragged.
    #[must_use]
    pub fn is_using(&self) -> bool {
        self.is_hovering() || self.dragging
    }

    /// Whether a center drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a snap animation is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The in-flight snap animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&SnapAnimation> {
        self.animation.as_ref()
    }

    /// Clears hover and drag state. A running animation is left alone.
    pub fn reset(&mut self) {
        self.hovered = None;
        self.dragging = false;
    }

    pub(crate) fn begin_drag(&mut self) {
        if self.animation.take().is_some() {
            log::debug!("view gizmo drag interrupted snap animation");
        }
        self.dragging = true;
        log::debug!("view gizmo drag started");
    }

    pub(crate) fn end_drag(&mut self) {
        if self.dragging {
            log::debug!("view gizmo drag ended");
        }
        self.dragging = false;
    }
}
