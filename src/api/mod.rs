//! Automatic Diary WASM API
//!
//! JavaScript-facing functions. Everything here is a thin wrapper: options
//! come in as JS objects, the work happens in `crate::align`, and errors go
//! back as strings after being logged to the console.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization, option and error conversion
//! - `types`: report structs returned to JavaScript
//! - `align`: the exported functions

pub mod helpers;
pub mod types;
pub mod align;

pub use align::{align_polyline, align_svg_markup, format_points, parse_points};
pub use types::AlignReport;
