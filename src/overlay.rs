//! Annotation overlay: hover hit-testing and draw-list building.
//!
//! Boxes live in image-pixel space. Pointer positions arrive in screen
//! space and are converted by inverting the composed transform, so the
//! hit-test stays correct at every zoom and pan. The draw list is also
//! in image space; the overlay surface transform does the scaling.

use crate::constants::overlay as style;
use crate::model::{BoundingBox, BoxStore};
use crate::render::OverlayCommand;
use crate::transform::ComposedTransform;

/// The interactive bounding-box overlay.
///
/// When constructed disabled (the reduced viewer configuration), every
/// operation is a no-op and the draw list stays empty.
#[derive(Debug, Clone)]
pub struct AnnotationOverlay {
    store: BoxStore,
    enabled: bool,
}

impl AnnotationOverlay {
    /// Overlay seeded with the development sample boxes.
    pub fn new() -> Self {
        Self {
            store: BoxStore::sample(),
            enabled: true,
        }
    }

    /// Overlay for the reduced configuration: no boxes, all no-ops.
    pub fn disabled() -> Self {
        Self {
            store: BoxStore::new(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Replace the annotation set wholesale.
    pub fn set_boxes(&mut self, boxes: Vec<BoundingBox>) {
        if !self.enabled {
            return;
        }
        log::debug!("Annotation set replaced: {} boxes", boxes.len());
        self.store.set_boxes(boxes);
    }

    /// Clear all hover flags (entering pan mode suspends hit-testing).
    pub fn clear_hover(&mut self) {
        self.store.clear_hover();
    }

    /// Hit-test a screen-space pointer position against the boxes.
    ///
    /// Converts to image space through the inverse of the composed
    /// transform, then re-evaluates every hover flag. All boxes
    /// containing the point are flagged, independently.
    pub fn hit_test(
        &mut self,
        screen_x: f32,
        screen_y: f32,
        transform: &ComposedTransform,
        image_size: (f32, f32),
        container_size: (f32, f32),
    ) -> usize {
        if !self.enabled {
            return 0;
        }
        let (img_x, img_y) =
            transform.screen_to_image(screen_x, screen_y, image_size, container_size);
        self.store.hover_at(img_x, img_y)
    }

    /// Build the overlay draw list: clear, then for every box a
    /// semi-transparent fill (visible only when hovered) plus a
    /// stroked outline.
    pub fn draw_list(&self) -> Vec<OverlayCommand> {
        if !self.enabled || self.store.is_empty() {
            return vec![OverlayCommand::Clear];
        }
        let mut commands = Vec::with_capacity(1 + self.store.len() * 2);
        commands.push(OverlayCommand::Clear);
        for b in self.store.boxes() {
            if b.hovered {
                commands.push(OverlayCommand::FillRect {
                    x: b.x,
                    y: b.y,
                    width: b.width,
                    height: b.height,
                    color: style::HOVER_FILL,
                });
            }
            commands.push(OverlayCommand::StrokeRect {
                x: b.x,
                y: b.y,
                width: b.width,
                height: b.height,
                color: style::STROKE_COLOR,
                stroke_width: style::STROKE_WIDTH,
            });
        }
        commands
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        self.store.boxes()
    }
}

impl Default for AnnotationOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: (f32, f32) = (400.0, 300.0);
    const CONTAINER: (f32, f32) = (800.0, 600.0);

    fn transform(zoom: f32, pan_x: f32, pan_y: f32) -> ComposedTransform {
        ComposedTransform { zoom, pan_x, pan_y }
    }

    #[test]
    fn test_hit_test_at_identity() {
        let mut overlay = AnnotationOverlay::new();
        // Image point (60, 60) maps to screen (260, 210) with a
        // 400x300 image centered in an 800x600 container.
        assert_eq!(overlay.hit_test(260.0, 210.0, &transform(1.0, 0.0, 0.0), IMAGE, CONTAINER), 1);
        assert!(overlay.boxes()[0].hovered);
        assert!(!overlay.boxes()[1].hovered);
    }

    #[test]
    fn test_hit_test_outside_box() {
        let mut overlay = AnnotationOverlay::new();
        // Image point (160, 160) is past the first box (ends at 150)
        // and before the second (starts at 200).
        assert_eq!(overlay.hit_test(360.0, 310.0, &transform(1.0, 0.0, 0.0), IMAGE, CONTAINER), 0);
        assert!(overlay.boxes().iter().all(|b| !b.hovered));
    }

    #[test]
    fn test_hit_test_tracks_zoom() {
        let mut overlay = AnnotationOverlay::new();
        // At zoom 2, image point (60, 60) lands at screen (120, 120).
        assert_eq!(overlay.hit_test(120.0, 120.0, &transform(2.0, 0.0, 0.0), IMAGE, CONTAINER), 1);
        assert!(overlay.boxes()[0].hovered);
    }

    #[test]
    fn test_hit_test_tracks_pan() {
        let mut overlay = AnnotationOverlay::new();
        let t = transform(1.0, 25.0, -10.0);
        // Same image point, shifted by the pan in screen space.
        assert_eq!(overlay.hit_test(285.0, 200.0, &t, IMAGE, CONTAINER), 1);
        assert!(overlay.boxes()[0].hovered);
    }

    #[test]
    fn test_draw_list_fills_only_hovered() {
        let mut overlay = AnnotationOverlay::new();
        overlay.hit_test(260.0, 210.0, &transform(1.0, 0.0, 0.0), IMAGE, CONTAINER);

        let commands = overlay.draw_list();
        assert_eq!(commands[0], OverlayCommand::Clear);
        let fills = commands
            .iter()
            .filter(|c| matches!(c, OverlayCommand::FillRect { .. }))
            .count();
        let strokes = commands
            .iter()
            .filter(|c| matches!(c, OverlayCommand::StrokeRect { .. }))
            .count();
        assert_eq!(fills, 1);
        assert_eq!(strokes, 2);
    }

    #[test]
    fn test_disabled_overlay_is_inert() {
        let mut overlay = AnnotationOverlay::disabled();
        overlay.set_boxes(vec![BoundingBox::new(0.0, 0.0, 500.0, 500.0)]);
        assert_eq!(overlay.hit_test(260.0, 210.0, &transform(1.0, 0.0, 0.0), IMAGE, CONTAINER), 0);
        assert_eq!(overlay.draw_list(), vec![OverlayCommand::Clear]);
    }
}
