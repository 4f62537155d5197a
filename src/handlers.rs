//! Message handlers for the viewer.
//!
//! Each handler processes one category of messages, keeping the
//! top-level update function small. Handlers mutate the state slices
//! they are given; the caller reapplies gating and rebuilds the
//! snapshot afterwards.

use crate::loader::{ImageLoadController, LoadRequest};
use crate::message::{CommandMessage, KeyMessage, LoadMessage, PointerMessage, ToolbarMessage};
use crate::mode::ModeStateMachine;
use crate::overlay::AnnotationOverlay;
use crate::render::TransformEngine;
use crate::transform::ViewportState;
use crate::widget_state::ViewerWidgetState;

/// Handle host-callable commands. Returns a load request when one was
/// issued.
pub fn handle_command(
    msg: CommandMessage,
    loader: &mut ImageLoadController,
    overlay: &mut AnnotationOverlay,
) -> Option<LoadRequest> {
    match msg {
        CommandMessage::LoadImage(name) => Some(loader.load(&name)),
        CommandMessage::SetBasePath(path) => loader.set_base_path(&path),
        CommandMessage::SetBoxes(boxes) => {
            overlay.set_boxes(boxes);
            None
        }
    }
}

/// Handle toolbar actions.
///
/// The whole toolbar is conceptually disabled unless the viewer is
/// interactive, so every action is gated at the top.
#[allow(clippy::too_many_arguments)]
pub fn handle_toolbar(
    msg: ToolbarMessage,
    interactive: bool,
    viewport: &mut ViewportState,
    mode: &mut ModeStateMachine,
    widget: &mut ViewerWidgetState,
    overlay: &mut AnnotationOverlay,
    loader: &ImageLoadController,
    engine: &mut TransformEngine,
    container: (f32, f32),
) {
    if !interactive {
        return;
    }
    match msg {
        ToolbarMessage::ZoomIn => {
            viewport.zoom_in_step();
            engine.apply(viewport, true);
            log::debug!("🔍 Zoom in: {:.2}x", viewport.zoom);
        }
        ToolbarMessage::ZoomOut => {
            viewport.zoom_out_step();
            engine.apply(viewport, true);
            log::debug!("🔍 Zoom out: {:.2}x", viewport.zoom);
        }
        ToolbarMessage::SliderSet(percent) => {
            // Instantaneous: animating would fight the continuous
            // slider drag.
            viewport.set_zoom(percent as f32 / 100.0);
            engine.apply(viewport, false);
        }
        ToolbarMessage::Maximize => {
            let Some((width, height)) = loader.natural_size() else {
                return;
            };
            if width == 0 || height == 0 || container.0 <= 0.0 || container.1 <= 0.0 {
                return;
            }
            let width_scale = container.0 / width as f32;
            let height_scale = container.1 / height as f32;
            // The larger scale makes the image fill the container
            viewport.set_zoom(width_scale.max(height_scale));
            viewport.set_pan(0.0, 0.0);
            engine.apply(viewport, true);
            log::debug!("Maximize: zoom {:.2}x", viewport.zoom);
        }
        ToolbarMessage::Minimize => {
            viewport.reset();
            engine.apply(viewport, true);
            log::debug!("🔄 View reset");
        }
        ToolbarMessage::ToggleMode => {
            mode.toggle();
            // Hover flags are stale the moment hit-testing is
            // suspended or resumed; dragging dies with pan mode.
            overlay.clear_hover();
            if !mode.is_pan() {
                widget.end_drag();
            }
        }
    }
}

/// Handle pointer input, routed by the current interaction mode.
#[allow(clippy::too_many_arguments)]
pub fn handle_pointer(
    msg: PointerMessage,
    interactive: bool,
    viewport: &mut ViewportState,
    mode: &ModeStateMachine,
    widget: &mut ViewerWidgetState,
    overlay: &mut AnnotationOverlay,
    loader: &ImageLoadController,
    engine: &mut TransformEngine,
    container: (f32, f32),
) {
    match msg {
        PointerMessage::Down(x, y) => {
            if !interactive || !mode.is_pan() {
                return;
            }
            widget.start_drag((x, y), (viewport.pan_x, viewport.pan_y));
            // Continuous drag must not animate
            engine.apply(viewport, false);
            log::debug!("Pan drag started at ({:.1}, {:.1})", x, y);
        }
        PointerMessage::Moved(x, y) => {
            if !interactive {
                return;
            }
            if mode.is_pan() {
                if let Some((pan_x, pan_y)) = widget.drag_pan((x, y)) {
                    viewport.set_pan(pan_x, pan_y);
                    engine.apply(viewport, false);
                }
            } else {
                let image_size = match loader.natural_size() {
                    Some((w, h)) => (w as f32, h as f32),
                    None => return,
                };
                overlay.hit_test(x, y, &viewport.composed(), image_size, container);
            }
        }
        PointerMessage::Up | PointerMessage::Left => {
            if widget.is_dragging() {
                widget.end_drag();
                // Subsequent discrete actions animate again
                engine.apply(viewport, true);
                log::debug!("Pan drag ended");
            }
        }
        PointerMessage::Wheel(delta_y) => {
            if !interactive {
                return;
            }
            if delta_y < 0.0 {
                viewport.zoom_in_step();
            } else {
                viewport.zoom_out_step();
            }
            engine.apply(viewport, true);
            log::debug!(
                "🔍 Wheel zoom: {:.2}x (slider {})",
                viewport.zoom,
                viewport.slider_percent()
            );
        }
    }
}

/// Handle hold-key transitions.
///
/// Unlike the toolbar, the hold key is not gated on the load state:
/// the mode machine is always live, matching the keyboard being owned
/// by the host rather than the disabled toolbar.
pub fn handle_key(
    msg: KeyMessage,
    mode: &mut ModeStateMachine,
    widget: &mut ViewerWidgetState,
    overlay: &mut AnnotationOverlay,
) {
    let changed = match msg {
        KeyMessage::HoldPressed => mode.hold_pressed(),
        KeyMessage::HoldReleased => mode.hold_released(),
    };
    if changed {
        overlay.clear_hover();
        if !mode.is_pan() {
            widget.end_drag();
        }
    }
}

/// Handle load completions.
pub fn handle_load(
    msg: LoadMessage,
    loader: &mut ImageLoadController,
    viewport: &ViewportState,
    engine: &mut TransformEngine,
) {
    match msg {
        LoadMessage::Completed { token, outcome } => {
            if loader.complete(token, outcome) && loader.is_loaded() {
                // Natural size is only known now: resync both
                // surfaces so the overlay picks up the new geometry.
                engine.apply(viewport, true);
            }
        }
    }
}
