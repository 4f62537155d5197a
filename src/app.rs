//! The top-level viewer component.
//!
//! `ViewerApp` owns every piece of state and routes all external
//! events (host payloads, toolbar actions, pointer input, load
//! completions) through [`ViewerApp::update`]. Each update runs to
//! completion before the next, so the render snapshot can never
//! observe an inconsistent intermediate state.

use serde_json::Value;

use crate::handlers;
use crate::loader::{ImageLoadController, LoadRequest, LoadState};
use crate::message::{CommandMessage, Message};
use crate::mode::{InteractionMode, ModeStateMachine};
use crate::overlay::AnnotationOverlay;
use crate::protocol;
use crate::render::{
    ErrorSurface, OverlaySurface, RenderSnapshot, ToolbarState, TransformEngine,
};
use crate::transform::ViewportState;
use crate::widget_state::ViewerWidgetState;

/// Static configuration of the component.
#[derive(Debug, Clone, Copy)]
pub struct ViewerConfig {
    /// Whether the bounding-box overlay is present. The reduced
    /// configuration (no overlay) matches the plain image viewer.
    pub annotations: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self { annotations: true }
    }
}

/// The embeddable image viewer.
pub struct ViewerApp {
    viewport: ViewportState,
    widget: ViewerWidgetState,
    mode: ModeStateMachine,
    overlay: AnnotationOverlay,
    loader: ImageLoadController,
    engine: TransformEngine,
    container: (f32, f32),
    /// Validation error from the most recent host payload, if any.
    /// Displaces the image until the next valid input.
    host_error: Option<crate::error::ViewerError>,
}

impl ViewerApp {
    /// Create a viewer with the default configuration, in `Idle` state.
    pub fn new() -> Self {
        Self::with_config(ViewerConfig::default())
    }

    /// Create a viewer with an explicit configuration.
    pub fn with_config(config: ViewerConfig) -> Self {
        Self {
            viewport: ViewportState::identity(),
            widget: ViewerWidgetState::new(),
            mode: ModeStateMachine::new(),
            overlay: if config.annotations {
                AnnotationOverlay::new()
            } else {
                AnnotationOverlay::disabled()
            },
            loader: ImageLoadController::new(),
            engine: TransformEngine::new(),
            container: (0.0, 0.0),
            host_error: None,
        }
    }

    /// Create a viewer and immediately attempt the initial image load,
    /// like the component does on construction in a page.
    pub fn init() -> (Self, LoadRequest) {
        let mut app = Self::new();
        let request = app.loader.load(crate::constants::loader::INITIAL_IMAGE);
        (app, request)
    }

    /// Whether interactive input is currently accepted.
    fn interactive(&self) -> bool {
        self.loader.is_loaded() && self.host_error.is_none()
    }

    /// Process one message. Returns a load request when the message
    /// caused a new image load; the host (or a bundled source) fulfills
    /// it and feeds the completion back as a `Message::Load`.
    pub fn update(&mut self, message: Message) -> Option<LoadRequest> {
        match message {
            Message::HostData(payload) => self.handle_host_data(&payload),
            Message::Command(msg) => {
                // A new load attempt is a recovery path: clear any
                // prior validation error display.
                if matches!(
                    msg,
                    CommandMessage::LoadImage(_) | CommandMessage::SetBasePath(_)
                ) {
                    self.host_error = None;
                }
                handlers::handle_command(msg, &mut self.loader, &mut self.overlay)
            }
            Message::Toolbar(msg) => {
                handlers::handle_toolbar(
                    msg,
                    self.interactive(),
                    &mut self.viewport,
                    &mut self.mode,
                    &mut self.widget,
                    &mut self.overlay,
                    &self.loader,
                    &mut self.engine,
                    self.container,
                );
                None
            }
            Message::Pointer(msg) => {
                handlers::handle_pointer(
                    msg,
                    self.interactive(),
                    &mut self.viewport,
                    &self.mode,
                    &mut self.widget,
                    &mut self.overlay,
                    &self.loader,
                    &mut self.engine,
                    self.container,
                );
                None
            }
            Message::Key(msg) => {
                handlers::handle_key(msg, &mut self.mode, &mut self.widget, &mut self.overlay);
                None
            }
            Message::Load(msg) => {
                handlers::handle_load(msg, &mut self.loader, &self.viewport, &mut self.engine);
                None
            }
            Message::ContainerResized(width, height) => {
                self.container = (width, height);
                None
            }
        }
    }

    fn handle_host_data(&mut self, payload: &Value) -> Option<LoadRequest> {
        match protocol::image_name_from_payload(payload) {
            Ok(name) => {
                self.host_error = None;
                Some(self.loader.load(&name))
            }
            Err(err) => {
                log::warn!("Rejected host payload: {}", err);
                self.host_error = Some(err);
                None
            }
        }
    }

    /// Build the immutable render snapshot for the host surface.
    pub fn snapshot(&self) -> RenderSnapshot {
        let error = self.error_surface();
        let visible = self.interactive();
        let (width, height) = self.loader.natural_size().unwrap_or((0, 0));
        RenderSnapshot {
            image_visible: visible,
            image_transform: self.engine.image(),
            overlay: OverlaySurface {
                width,
                height,
                transform: self.engine.overlay(),
                commands: self.overlay.draw_list(),
            },
            toolbar: ToolbarState {
                enabled: visible,
                slider_percent: self.viewport.slider_percent(),
                mode_icon: self.mode.mode().icon(),
            },
            error,
        }
    }

    fn error_surface(&self) -> Option<ErrorSurface> {
        if let Some(err) = &self.host_error {
            return Some(ErrorSurface {
                message: err.to_string(),
                details: err
                    .details()
                    .map(|d| format!("Raw data: {}", d))
                    .unwrap_or_default(),
            });
        }
        if let LoadState::Failed(err) = self.loader.state() {
            return Some(ErrorSurface {
                message: err.to_string(),
                details: err.details().unwrap_or_default().to_string(),
            });
        }
        None
    }

    // Read access for hosts and tests.

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode.mode()
    }

    pub fn load_state(&self) -> &LoadState {
        self.loader.state()
    }

    pub fn hovered_boxes(&self) -> usize {
        self.overlay.boxes().iter().filter(|b| b.hovered).count()
    }
}

impl Default for ViewerApp {
    fn default() -> Self {
        Self::new()
    }
}
