//! WASM bindings for deepmerge-core.
//!
//! Exposes `merge` and `mergeAll` as `#[wasm_bindgen]` functions over JSON
//! strings. Built with `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p deepmerge-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/deepmerge-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/deepmerge_wasm.wasm
//! ```

use serde_json::Value;
use wasm_bindgen::prelude::*;

/// Deep merge two JSON object strings, returning compact JSON.
///
/// Throws a JS error if either input is not valid JSON, is not an object, or
/// the documents have a type conflict.
#[wasm_bindgen]
pub fn merge(original: &str, update: &str) -> std::result::Result<String, JsValue> {
    deepmerge_core::merge_json(original, update).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Deep merge a JSON array of object layers, left to right.
///
/// `mergeAll('[{"a":[1]},{"a":[2]}]')` returns `{"a":[1,2]}`.
#[wasm_bindgen(js_name = mergeAll)]
pub fn merge_all(layers: &str) -> std::result::Result<String, JsValue> {
    merge_layers(layers).map_err(|e| JsValue::from_str(&e))
}

fn merge_layers(layers: &str) -> std::result::Result<String, String> {
    let layers: Vec<Value> = serde_json::from_str(layers).map_err(|e| e.to_string())?;
    let merged = deepmerge_core::merge_all(&layers).map_err(|e| e.to_string())?;
    serde_json::to_string(&merged).map_err(|e| e.to_string())
}
