//! Viewport transform mathematics.
//!
//! This module contains the pan/zoom state and the composed transform
//! derived from it, extracted for testability and reusability. The
//! composed transform is the single scale+translate operation that the
//! render step applies identically to the image surface and the
//! overlay surface.

use std::fmt;

use crate::constants::zoom;

/// Pan/zoom state of the viewport.
///
/// Zoom is always clamped to `[zoom::MIN, zoom::MAX]`. Pan is stored in
/// screen pixels and is unconstrained: the image may be dragged fully
/// off-screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub zoom: f32,
    pub pan_x: f32,
    pub pan_y: f32,
}

impl ViewportState {
    /// Create a new viewport state, clamping zoom into range.
    pub fn new(zoom: f32, pan_x: f32, pan_y: f32) -> Self {
        Self {
            zoom: zoom.clamp(zoom::MIN, zoom::MAX),
            pan_x,
            pan_y,
        }
    }

    /// Identity state (zoom=1, no pan).
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Set the zoom level, clamped into range. Pan is unchanged.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(zoom::MIN, zoom::MAX);
    }

    /// Zoom in by one step (toolbar button / wheel).
    pub fn zoom_in_step(&mut self) {
        self.set_zoom(self.zoom + zoom::STEP);
    }

    /// Zoom out by one step (toolbar button / wheel).
    pub fn zoom_out_step(&mut self) {
        self.set_zoom(self.zoom - zoom::STEP);
    }

    /// Apply a pan delta in screen pixels. Unconstrained.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Set the pan offset directly, in screen pixels.
    pub fn set_pan(&mut self, pan_x: f32, pan_y: f32) {
        self.pan_x = pan_x;
        self.pan_y = pan_y;
    }

    /// Reset to the identity state.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Slider representation of the current zoom (integer percent).
    pub fn slider_percent(&self) -> i32 {
        (self.zoom * 100.0).round() as i32
    }

    /// The composed transform for the current state.
    pub fn composed(&self) -> ComposedTransform {
        ComposedTransform {
            zoom: self.zoom,
            pan_x: self.pan_x,
            pan_y: self.pan_y,
        }
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::identity()
    }
}

/// The composed center-anchor/scale/translate transform.
///
/// Both surfaces are center-anchored in the container, scaled by
/// `zoom`, then translated by `(pan_x / zoom, pan_y / zoom)` in the
/// pre-scale frame. Dividing the translate term by zoom before the
/// scale is applied makes panning distance in screen pixels
/// zoom-invariant: a drag of 10px moves the image 10px at any zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposedTransform {
    pub zoom: f32,
    pub pan_x: f32,
    pub pan_y: f32,
}

impl ComposedTransform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    /// Map a point from image space to screen space.
    ///
    /// Image space has its origin at the image's top-left corner;
    /// screen space is relative to the container's top-left corner.
    pub fn image_to_screen(
        &self,
        img_x: f32,
        img_y: f32,
        image_size: (f32, f32),
        container_size: (f32, f32),
    ) -> (f32, f32) {
        let center_x = container_size.0 / 2.0;
        let center_y = container_size.1 / 2.0;

        // Convert to center-relative image coordinates
        let center_rel_x = img_x - image_size.0 / 2.0;
        let center_rel_y = img_y - image_size.1 / 2.0;

        // Scale about the center, then offset by the screen-space pan
        (
            center_x + center_rel_x * self.zoom + self.pan_x,
            center_y + center_rel_y * self.zoom + self.pan_y,
        )
    }

    /// Map a point from screen space to image space by inverting the
    /// composed transform.
    pub fn screen_to_image(
        &self,
        screen_x: f32,
        screen_y: f32,
        image_size: (f32, f32),
        container_size: (f32, f32),
    ) -> (f32, f32) {
        let center_x = container_size.0 / 2.0;
        let center_y = container_size.1 / 2.0;

        // Position relative to the container center
        let rel_x = screen_x - center_x;
        let rel_y = screen_y - center_y;

        // Remove the pan offset and divide by zoom, then convert back
        // to top-left-origin image coordinates
        (
            (rel_x - self.pan_x) / self.zoom + image_size.0 / 2.0,
            (rel_y - self.pan_y) / self.zoom + image_size.1 / 2.0,
        )
    }
}

impl Default for ComposedTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for ComposedTransform {
    /// CSS-compatible encoding of the composed transform, for hosts
    /// whose surfaces are styled elements. The translate term is in
    /// the pre-scale frame, hence the division by zoom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate(-50%, -50%) scale({}) translate({}px, {}px)",
            self.zoom,
            self.pan_x / self.zoom,
            self.pan_y / self.zoom
        )
    }
}
