//! Models module for the Automatic Diary WASM module
//!
//! Values exchanged through SVG attributes: polyline point lists and the
//! viewBox rectangle.

pub mod points;
pub mod view_box;

// Re-export commonly used types
pub use points::{format_points, parse_points, Point, PointList};
pub use view_box::ViewBox;
