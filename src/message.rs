//! Messages driving the viewer.
//!
//! Every external event (host payloads, toolbar actions, pointer
//! input, load completions) is a message routed through
//! [`ViewerApp::update`](crate::ViewerApp::update). Handlers run to
//! completion and the render snapshot is rebuilt before the next
//! message is processed.

use serde_json::Value;

use crate::loader::LoadOutcome;
use crate::model::BoundingBox;

/// Top-level message type.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw inbound payload from the host data source
    HostData(Value),
    /// Host-callable operations
    Command(CommandMessage),
    /// Toolbar actions
    Toolbar(ToolbarMessage),
    /// Pointer input over the image container
    Pointer(PointerMessage),
    /// Designated hold-key transitions
    Key(KeyMessage),
    /// Image load completions
    Load(LoadMessage),
    /// The embedding container changed size
    ContainerResized(f32, f32),
}

/// Operations exposed to the host.
#[derive(Debug, Clone)]
pub enum CommandMessage {
    /// Load an image by name under the current base path
    LoadImage(String),
    /// Change the base path and reload the current image
    SetBasePath(String),
    /// Replace the annotation set
    SetBoxes(Vec<BoundingBox>),
}

/// Toolbar actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarMessage {
    ZoomIn,
    ZoomOut,
    /// Slider moved to a percent value (zoom * 100)
    SliderSet(i32),
    /// Fit the image to the container ("maximize")
    Maximize,
    /// Reset zoom and pan ("minimize")
    Minimize,
    /// Flip between annotate and pan mode
    ToggleMode,
}

/// Pointer input, in screen coordinates relative to the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMessage {
    Down(f32, f32),
    Moved(f32, f32),
    Up,
    /// Pointer left the container (ends any drag)
    Left,
    /// Wheel rotation; negative delta zooms in
    Wheel(f32),
}

/// Hold-key transitions (the host owns the keyboard and reports the
/// designated key's edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMessage {
    HoldPressed,
    HoldReleased,
}

/// Load completion, echoing the request's generation token.
#[derive(Debug, Clone)]
pub enum LoadMessage {
    Completed { token: u64, outcome: LoadOutcome },
}
