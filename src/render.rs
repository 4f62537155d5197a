//! Render state: the transform engine and the snapshot consumed by a
//! host rendering surface.
//!
//! The engine never draws. Every state mutation ends by reapplying the
//! composed transform to both surface slots through
//! [`TransformEngine::apply`], and the host reads the resulting
//! [`RenderSnapshot`]. Keeping the image and overlay slots behind a
//! single apply call is what upholds the alignment invariant: the two
//! surfaces can never carry different transforms.

use crate::transform::{ComposedTransform, ViewportState};

/// RGBA color with components in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// The transform as applied to one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransform {
    pub transform: ComposedTransform,
    /// Whether the host should animate the application (discrete
    /// actions) or apply it instantaneously (continuous drag/slider)
    pub smooth: bool,
}

impl Default for SurfaceTransform {
    fn default() -> Self {
        Self {
            transform: ComposedTransform::identity(),
            smooth: true,
        }
    }
}

/// Applies the composed transform to the image and overlay surfaces.
///
/// Both slots are written in one call, from one viewport state. There
/// is deliberately no way to set them individually.
#[derive(Debug, Clone, Default)]
pub struct TransformEngine {
    image: SurfaceTransform,
    overlay: SurfaceTransform,
}

impl TransformEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the composed transform from the viewport and write it
    /// to both surfaces atomically.
    pub fn apply(&mut self, viewport: &ViewportState, smooth: bool) {
        let slot = SurfaceTransform {
            transform: viewport.composed(),
            smooth,
        };
        self.image = slot;
        self.overlay = slot;
    }

    pub fn image(&self) -> SurfaceTransform {
        self.image
    }

    pub fn overlay(&self) -> SurfaceTransform {
        self.overlay
    }
}

/// One drawing primitive on the overlay surface, in image-space
/// pixels. The surface transform does the scaling, which is what keeps
/// boxes glued to the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayCommand {
    /// Clear the whole surface
    Clear,
    /// Filled rectangle
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    /// Stroked rectangle outline
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        stroke_width: f32,
    },
}

/// Renderable state of the overlay surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlaySurface {
    /// Surface pixel width; matches the image's natural rendered width
    pub width: u32,
    /// Surface pixel height; matches the image's natural rendered height
    pub height: u32,
    pub transform: SurfaceTransform,
    pub commands: Vec<OverlayCommand>,
}

/// Renderable toolbar state.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarState {
    /// All controls disabled unless the image is loaded and no error
    /// surface is showing
    pub enabled: bool,
    /// Slider position: `round(zoom * 100)`
    pub slider_percent: i32,
    /// Mode indicator icon name
    pub mode_icon: &'static str,
}

/// Renderable error surface: message plus details payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSurface {
    pub message: String,
    pub details: String,
}

/// Immutable view of everything a host surface needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    /// Whether the image surface is shown (hidden while loading,
    /// failed, or displaced by an error surface)
    pub image_visible: bool,
    pub image_transform: SurfaceTransform,
    pub overlay: OverlaySurface,
    pub toolbar: ToolbarState,
    pub error: Option<ErrorSurface>,
}
