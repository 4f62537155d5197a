//! Domain model types.

mod bbox;

pub use bbox::{BoundingBox, BoxStore};
