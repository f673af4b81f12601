//! Automatic Diary WASM Module
//!
//! Keeps the SVG polyline drawn next to the diary calendar in step with the
//! table rows it traces. The page loads the module and calls `alignPolyline`
//! once; everything below the `api` layer is plain Rust and runs natively too.

pub mod align;
pub mod api;
pub mod config;
pub mod dom;
pub mod markup;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use align::{align, apply, plan, AlignError, Alignment, AttributeTarget, ElementKind, LayoutRow, Viewport};
pub use config::{AlignConfig, AlignMode};
pub use models::{Point, PointList, ViewBox};
pub use utils::random::{MathRandom, RandomSource, SplitMix64};

use wasm_bindgen::prelude::*;

// Runs once when the page instantiates the module.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[WASM] logger already initialized: {}", e).into());
    }

    log::info!("Automatic Diary WASM module initialized");
}
