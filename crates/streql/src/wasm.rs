//! WASM bindings for constant-time comparison.

use wasm_bindgen::prelude::*;

/// Constant-time comparison of two byte arrays.
///
/// # Arguments
/// * `x` - First value as Uint8Array
/// * `y` - Second value as Uint8Array
///
/// # Returns
/// true if both hold the same bytes, false otherwise
#[wasm_bindgen(js_name = equalsBytes)]
pub fn equals_bytes(x: &[u8], y: &[u8]) -> bool {
    crate::equals(x, y)
}

/// Constant-time comparison of two strings by their UTF-8 bytes.
///
/// wasm-bindgen hands JavaScript strings over as UTF-8, replacing lone surrogates
/// with U+FFFD on the way in.
#[wasm_bindgen(js_name = equalsText)]
pub fn equals_text(x: &str, y: &str) -> bool {
    crate::equals_str(x, y)
}
