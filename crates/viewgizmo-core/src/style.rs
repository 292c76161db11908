//! Visual and behavioral configuration for the view gizmo.

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewGizmoError};
use crate::math::BASE_SIZE;

/// Converts 8-bit RGBA channels to a linear `[0, 1]` color.
#[must_use]
pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Vec4 {
    Vec4::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        f32::from(a) / 255.0,
    )
}

/// Style options for the view gizmo.
///
/// Sizes are in pixels at `scale == 1.0`; colors are RGBA in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Overall scale applied to every size below.
    pub scale: f32,

    /// Axis line length, in gizmo-local units (the gizmo spans `[-1, 1]`).
    pub line_length: f32,
    /// Axis line width.
    pub line_width: f32,
    /// Radius of the axis handle circles.
    pub circle_radius: f32,
    /// Brightness of an axis pointing fully away from the viewer.
    pub fade_factor: f32,

    /// Color of the ring drawn around a hovered handle.
    pub highlight_color: Vec4,
    /// Stroke width of the hover ring.
    pub highlight_width: f32,

    /// Colors of the X, Y and Z axes.
    pub axis_colors: [Vec4; 3],

    /// Label size as a multiple of the host font size.
    pub label_size: f32,
    /// Labels for the X, Y and Z axes.
    pub axis_labels: [String; 3],
    /// Label text color.
    pub label_color: Vec4,

    /// Radius of the center free-rotate region.
    pub big_circle_radius: f32,
    /// Fill color of the center region when hovered or dragged.
    pub big_circle_color: Vec4,

    /// Whether snapping to an axis is animated.
    pub animate_snap: bool,
    /// Snap animation duration, in seconds.
    pub snap_animation_duration: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            scale: 1.0,
            line_length: 0.5,
            line_width: 4.0,
            circle_radius: 15.0,
            fade_factor: 0.25,
            highlight_color: rgba8(255, 255, 0, 255),
            highlight_width: 2.0,
            axis_colors: [
                rgba8(230, 51, 51, 255),  // X
                rgba8(51, 230, 51, 255),  // Y
                rgba8(51, 128, 255, 255), // Z
            ],
            label_size: 1.0,
            axis_labels: ["X".to_string(), "Y".to_string(), "Z".to_string()],
            label_color: rgba8(255, 255, 255, 255),
            big_circle_radius: 80.0,
            big_circle_color: rgba8(255, 255, 255, 50),
            animate_snap: true,
            snap_animation_duration: 0.3,
        }
    }
}

impl Style {
    /// Creates a style with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overall scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Enables or disables the snap animation and sets its duration in seconds.
    #[must_use]
    pub fn with_snap_animation(mut self, enabled: bool, duration: f32) -> Self {
        self.animate_snap = enabled;
        self.snap_animation_duration = duration;
        self
    }

    /// Sets the X, Y and Z axis colors.
    #[must_use]
    pub fn with_axis_colors(mut self, colors: [Vec4; 3]) -> Self {
        self.axis_colors = colors;
        self
    }

    /// Sets the X, Y and Z axis labels.
    #[must_use]
    pub fn with_axis_labels(mut self, labels: [&str; 3]) -> Self {
        self.axis_labels = labels.map(str::to_string);
        self
    }

    /// Whether a snap should animate rather than jump.
    #[must_use]
    pub fn snap_is_animated(&self) -> bool {
        self.animate_snap && self.snap_animation_duration > 0.0
    }

    /// Pixel dimensions after applying `scale`.
    #[must_use]
    pub fn metrics(&self) -> StyleMetrics {
        StyleMetrics {
            gizmo_diameter: BASE_SIZE * self.scale,
            circle_radius: self.circle_radius * self.scale,
            big_circle_radius: self.big_circle_radius * self.scale,
            line_width: self.line_width * self.scale,
            highlight_width: self.highlight_width * self.scale,
            highlight_radius: (self.circle_radius + 2.0) * self.scale,
            label_scale: self.scale * self.label_size,
        }
    }

    /// Checks that every field is within its usable range.
    pub fn validate(&self) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ViewGizmoError::InvalidStyle(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        let non_negative = [
            ("line_length", self.line_length),
            ("line_width", self.line_width),
            ("circle_radius", self.circle_radius),
            ("highlight_width", self.highlight_width),
            ("label_size", self.label_size),
            ("big_circle_radius", self.big_circle_radius),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ViewGizmoError::InvalidStyle(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.fade_factor) {
            return Err(ViewGizmoError::InvalidStyle(format!(
                "fade_factor must be in [0, 1], got {}",
                self.fade_factor
            )));
        }
        if !self.snap_animation_duration.is_finite() {
            return Err(ViewGizmoError::InvalidStyle(
                "snap_animation_duration must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a style from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let style: Self = serde_json::from_str(json)?;
        if let Err(e) = style.validate() {
            log::warn!("rejecting view gizmo style: {e}");
            return Err(e);
        }
        Ok(style)
    }

    /// Serializes the style to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Style dimensions in pixels, with `scale` already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleMetrics {
    /// Full gizmo diameter.
    pub gizmo_diameter: f32,
    /// Axis handle radius.
    pub circle_radius: f32,
    /// Center region radius.
    pub big_circle_radius: f32,
    /// Axis line width.
    pub line_width: f32,
    /// Hover ring stroke width.
    pub highlight_width: f32,
    /// Hover ring radius.
    pub highlight_radius: f32,
    /// Label size multiplier on the host font size.
    pub label_scale: f32,
}

impl StyleMetrics {
    /// Half the gizmo diameter: the NDC-to-pixel factor.
    #[must_use]
    pub fn half_size(&self) -> f32 {
        self.gizmo_diameter * 0.5
    }
}
