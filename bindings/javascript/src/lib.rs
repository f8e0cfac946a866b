//! JavaScript/TypeScript bindings for the palindrome checker
//!
//! Thin wrapper around `palindrome-core` compiled to WebAssembly.
//! ZERO logic here — all behavior from the canonical Rust implementation.

use palindrome_core::CharClass;
use wasm_bindgen::prelude::*;

fn char_class(ascii: Option<bool>) -> CharClass {
    if ascii.unwrap_or(false) {
        CharClass::Ascii
    } else {
        CharClass::Unicode
    }
}

/// Check whether text is a palindrome, ignoring case and non-alphanumerics.
///
/// @param text - any string, including ""
/// @param ascii - only count ASCII letters and digits (default false)
/// @returns true for a palindrome; "" and symbol-only strings are palindromes
#[wasm_bindgen(js_name = "isPalindrome")]
pub fn is_palindrome(text: &str, ascii: Option<bool>) -> bool {
    palindrome_core::is_palindrome_with(text, char_class(ascii))
}

/// Return the normalized form the palindrome check compares.
///
/// @param text - any string
/// @param ascii - only keep ASCII letters and digits (default false)
/// @returns lowercase letters and digits of text, in order
#[wasm_bindgen]
pub fn normalize(text: &str, ascii: Option<bool>) -> String {
    palindrome_core::normalize_with(text, char_class(ascii))
}

/// Check text and return a JSON report.
///
/// @param text - any string
/// @param ascii - only count ASCII letters and digits (default false)
/// @returns JSON string `{ input, normalized, palindrome, char_class }`
/// @throws Error if the report cannot be serialized
#[wasm_bindgen]
pub fn check(text: &str, ascii: Option<bool>) -> Result<String, JsError> {
    let report = palindrome_core::check(text, char_class(ascii));
    serde_json::to_string(&report)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
