//! Utility modules for the Automatic Diary WASM module

pub mod js_number;
pub mod random;

// Re-export commonly used items
pub use js_number::{number_to_string, parse_float};
pub use random::*;
