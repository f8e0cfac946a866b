//! Python bindings for the palindrome checker
//!
//! Thin wrapper around `palindrome-core` — ZERO logic here.
//! All behavior comes from the canonical Rust implementation.

use palindrome_core::CharClass;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn char_class(ascii: bool) -> CharClass {
    if ascii {
        CharClass::Ascii
    } else {
        CharClass::Unicode
    }
}

/// Return True if `text` reads the same forwards and backwards,
/// ignoring case and non-alphanumeric characters.
///
/// Args:
///     text: any string, including ""
///     ascii: only count ASCII letters and digits
///
/// Returns:
///     bool; "" and strings without letters or digits are palindromes
#[pyfunction]
#[pyo3(signature = (text, ascii = false))]
fn is_palindrome(text: &str, ascii: bool) -> bool {
    palindrome_core::is_palindrome_with(text, char_class(ascii))
}

/// Return the normalized form the palindrome check compares.
///
/// Args:
///     text: any string
///     ascii: only keep ASCII letters and digits
///
/// Returns:
///     Lowercase letters and digits of `text`, in order
#[pyfunction]
#[pyo3(signature = (text, ascii = false))]
fn normalize(text: &str, ascii: bool) -> String {
    palindrome_core::normalize_with(text, char_class(ascii))
}

/// Check `text` and return a JSON report.
///
/// Returns:
///     JSON string:
///     {
///         "input": str,
///         "normalized": str,
///         "palindrome": bool,
///         "char_class": "unicode" | "ascii"
///     }
///
/// Raises:
///     ValueError: If the report cannot be serialized
#[pyfunction]
#[pyo3(signature = (text, ascii = false))]
fn check(text: &str, ascii: bool) -> PyResult<String> {
    let report = palindrome_core::check(text, char_class(ascii));
    serde_json::to_string_pretty(&report)
        .map_err(|e| PyValueError::new_err(format!("Serialization error: {}", e)))
}

/// Palindrome Python module
#[pymodule]
fn palindrome(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_palindrome, m)?)?;
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(check, m)?)?;
    Ok(())
}
