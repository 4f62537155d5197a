//! Global constants for the boxview engine.
//!
//! This module centralizes hardcoded values for zoom limits, overlay
//! styling, loader defaults, and toolbar icons.

use crate::render::Color;

/// Zoom limits and step sizes.
pub mod zoom {
    /// Minimum zoom level (20%)
    pub const MIN: f32 = 0.2;
    /// Maximum zoom level (300%)
    pub const MAX: f32 = 3.0;
    /// Zoom step for wheel and toolbar buttons
    pub const STEP: f32 = 0.15;
}

/// Zoom slider range, in integer percent.
pub mod slider {
    /// Slider minimum (matches `zoom::MIN` * 100)
    pub const MIN_PERCENT: i32 = 20;
    /// Slider maximum (matches `zoom::MAX` * 100)
    pub const MAX_PERCENT: i32 = 300;
}

/// Overlay drawing style.
pub mod overlay {
    use super::Color;

    /// Stroke width for bounding-box outlines
    pub const STROKE_WIDTH: f32 = 2.0;
    /// Outline color for all boxes
    pub const STROKE_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    /// Fill color for hovered boxes (semi-transparent)
    pub const HOVER_FILL: Color = Color::new(0.0, 0.0, 1.0, 0.5);
}

/// Image loading defaults.
pub mod loader {
    /// Default base path prepended to image names
    pub const DEFAULT_BASE_PATH: &str = "images/";
    /// Image name attempted on initialization
    pub const INITIAL_IMAGE: &str = "img.jpg";
}

/// Toolbar mode-indicator icon names.
pub mod icon {
    /// Icon shown while in annotate (pointer) mode
    pub const ANNOTATE: &str = "prism-outline";
    /// Icon shown while in pan mode
    pub const PAN: &str = "pricetag-outline";
}
