//! Bounding-box annotation data.

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in untransformed image-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Whether the pointer is currently over this box
    #[serde(default, skip_serializing_if = "core::ops::Not::not")]
    pub hovered: bool,
}

impl BoundingBox {
    /// Create a new box with the hover flag cleared.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            hovered: false,
        }
    }

    /// Check whether an image-space point lies inside this box.
    /// Bounds are inclusive on all four edges.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// The set of bounding boxes currently displayed.
///
/// The collection is replaced wholesale when new annotation data
/// arrives; only the `hovered` flags mutate in between.
#[derive(Debug, Clone, Default)]
pub struct BoxStore {
    boxes: Vec<BoundingBox>,
}

impl BoxStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The development sample set: two boxes matching the seed data
    /// the component ships with before a host provides annotations.
    pub fn sample() -> Self {
        Self {
            boxes: vec![
                BoundingBox::new(50.0, 50.0, 100.0, 100.0),
                BoundingBox::new(200.0, 200.0, 150.0, 150.0),
            ],
        }
    }

    /// Replace the whole annotation set. Hover flags reset.
    pub fn set_boxes(&mut self, boxes: Vec<BoundingBox>) {
        self.boxes = boxes;
        self.clear_hover();
    }

    /// Clear all hover flags.
    pub fn clear_hover(&mut self) {
        for b in &mut self.boxes {
            b.hovered = false;
        }
    }

    /// Re-evaluate hover flags against an image-space point.
    ///
    /// Every box containing the point is flagged independently, so
    /// overlapping boxes are all highlighted at once. Returns the
    /// number of hovered boxes.
    pub fn hover_at(&mut self, x: f32, y: f32) -> usize {
        let mut hovered = 0;
        for b in &mut self.boxes {
            b.hovered = b.contains(x, y);
            if b.hovered {
                hovered += 1;
            }
        }
        hovered
    }

    pub fn boxes(&self) -> &[BoundingBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
