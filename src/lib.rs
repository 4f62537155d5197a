//! boxview: embeddable pan/zoom image viewer with bounding-box
//! overlays.
//!
//! The crate is the viewer's engine: it owns zoom/pan state, the
//! interaction-mode state machine, annotation hit-testing, and the
//! image load lifecycle, all driven through a single message-based
//! update loop. A host rendering surface consumes the immutable
//! [`RenderSnapshot`] produced after every update; the composed
//! transform is applied identically to the image and overlay surfaces,
//! which is what keeps annotations pixel-aligned with the image.

pub mod constants;
pub mod error;
pub mod loader;
pub mod message;
pub mod mode;
pub mod model;
pub mod overlay;
pub mod protocol;
pub mod render;
pub mod transform;
pub mod widget_state;

mod app;
mod handlers;

#[cfg(not(target_arch = "wasm32"))]
pub mod source;

pub use app::{ViewerApp, ViewerConfig};
pub use error::ViewerError;
pub use loader::{ImageLoadController, LoadOutcome, LoadRequest, LoadState};
pub use message::{
    CommandMessage, KeyMessage, LoadMessage, Message, PointerMessage, ToolbarMessage,
};
pub use mode::{InteractionMode, ModeStateMachine};
pub use model::{BoundingBox, BoxStore};
pub use overlay::AnnotationOverlay;
pub use render::{OverlayCommand, RenderSnapshot};
pub use transform::{ComposedTransform, ViewportState};
