//! Hit testing the pointer against the gizmo handles.

use glam::Vec2;

use crate::axis::{GizmoAxis, GizmoElement};
use crate::projection::GizmoProjection;
use crate::style::Style;

/// Resolves which element lies under `mouse`.
///
/// `axes` must be in back-to-front order, as returned by
/// [`GizmoProjection::axes`]. Every facing handle under the pointer overwrites
/// the previous match, so where handles overlap the one drawn last (the
/// nearest) wins. The center region is only considered when no handle
/// matched.
#[must_use]
pub fn hit_test(
    projection: &GizmoProjection,
    axes: &[GizmoAxis],
    mouse: Vec2,
    style: &Style,
) -> Option<GizmoElement> {
    let metrics = style.metrics();
    let reach = projection.half_size + metrics.circle_radius;
    if mouse.distance_squared(projection.anchor) >= reach * reach {
        return None;
    }

    let radius_sq = metrics.circle_radius * metrics.circle_radius;
    let mut hovered = None;
    for axis in axes.iter().filter(|axis| axis.is_facing()) {
        let handle = projection.handle(axis, style.line_length);
        if handle.distance_squared(mouse) < radius_sq {
            hovered = Some(axis.element());
        }
    }

    if hovered.is_none() {
        let center_sq = metrics.big_circle_radius * metrics.big_circle_radius;
        if projection.origin().distance_squared(mouse) < center_sq {
            hovered = Some(GizmoElement::Center);
        }
    }
    hovered
}
