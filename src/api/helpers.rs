//! Shared helpers for WASM API operations
//!
//! Console logging, serialization to and from JS values, and conversion of
//! alignment errors into the string errors JavaScript callers receive.

use crate::align::AlignError;
use crate::config::AlignConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Options and Errors
// ============================================================================

/// Read alignment options; `undefined` and `null` mean all defaults
pub fn read_config(options: JsValue) -> Result<AlignConfig, JsValue> {
    let config = if options.is_undefined() || options.is_null() {
        AlignConfig::default()
    } else {
        deserialize(options, "Invalid alignment options")?
    };
    config.validate().map_err(align_error)?;
    Ok(config)
}

/// Convert an alignment error to a JsValue, logging it on the way out
pub fn align_error(err: AlignError) -> JsValue {
    let msg = err.to_string();
    log_error(&msg);
    JsValue::from_str(&msg)
}

/// Error for a missing browser global (`window`, `document`)
pub fn missing_global(name: &str) -> JsValue {
    let msg = format!("No global `{}` available", name);
    log_error(&msg);
    JsValue::from_str(&msg)
}
