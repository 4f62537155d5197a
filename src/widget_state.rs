//! Transient widget state.
//!
//! Ephemeral interaction state that is not part of the viewport or
//! annotation data proper: the drag session opened by a pointer-down
//! in pan mode. Kept separate so the top-level component stays focused
//! on domain state.

/// An in-progress pan drag, anchored at the pointer and pan positions
/// observed on pointer-down.
///
/// While the session is active, the pan offset is recomputed as
/// `anchor_pan + (pointer - anchor_pointer)` on every pointer-move, so
/// the image tracks the pointer exactly at any zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at drag start, in screen pixels
    pub anchor_pointer: (f32, f32),
    /// Pan offset at drag start, in screen pixels
    pub anchor_pan: (f32, f32),
}

/// Transient state for the viewer widget.
#[derive(Debug, Clone, Default)]
pub struct ViewerWidgetState {
    drag: Option<DragSession>,
}

impl ViewerWidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Open a drag session anchored at the given pointer and pan.
    pub fn start_drag(&mut self, pointer: (f32, f32), pan: (f32, f32)) {
        self.drag = Some(DragSession {
            anchor_pointer: pointer,
            anchor_pan: pan,
        });
    }

    /// Pan offset for the current pointer position, if dragging.
    pub fn drag_pan(&self, pointer: (f32, f32)) -> Option<(f32, f32)> {
        self.drag.map(|session| {
            (
                session.anchor_pan.0 + (pointer.0 - session.anchor_pointer.0),
                session.anchor_pan.1 + (pointer.1 - session.anchor_pointer.1),
            )
        })
    }

    /// Close the drag session (pointer-up or pointer-leave).
    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}
