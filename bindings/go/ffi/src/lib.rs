//! C-FFI layer for the palindrome checker — used by Go (cgo) and other FFI consumers.
//!
//! ZERO logic here. All calls delegate to `palindrome-core`.
//!
//! # Input Contract
//!
//! A null `text` pointer is treated as the empty string.
//! Non-UTF-8 input is the only error.
//!
//! # Memory Contract
//!
//! All functions that return `*mut c_char` allocate via `CString`.
//! The caller MUST free the returned string by calling `palindrome_free_string()`.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};

use palindrome_core::CharClass;

/// Result from a palindrome FFI call.
/// If `error` is null, the call succeeded and `result` contains the output.
/// If `error` is non-null, the call failed and `error` contains the error message.
/// The caller MUST free both `result` and `error` with `palindrome_free_string()`.
#[repr(C)]
pub struct PalindromeResult {
    pub result: *mut c_char,
    pub error: *mut c_char,
}

impl PalindromeResult {
    fn ok(value: String) -> Self {
        PalindromeResult {
            result: to_c_string(value).into_raw(),
            error: std::ptr::null_mut(),
        }
    }

    fn err(msg: String) -> Self {
        PalindromeResult {
            result: std::ptr::null_mut(),
            error: to_c_string(msg).into_raw(),
        }
    }
}

/// Interior NULs cannot cross the C boundary; they are dropped.
fn to_c_string(s: String) -> CString {
    CString::new(s).unwrap_or_else(|e| {
        let mut bytes = e.into_vec();
        bytes.retain(|&b| b != 0);
        CString::new(bytes).unwrap_or_default()
    })
}

/// Helper: view a C string pointer as bytes. Null reads as empty.
unsafe fn cstr_bytes<'a>(ptr: *const c_char) -> &'a [u8] {
    if ptr.is_null() {
        return &[];
    }
    CStr::from_ptr(ptr).to_bytes()
}

fn char_class(ascii: bool) -> CharClass {
    if ascii {
        CharClass::Ascii
    } else {
        CharClass::Unicode
    }
}

/// Check whether `text` is a palindrome.
/// Returns 1 for a palindrome, 0 otherwise, and -1 if `text` is not valid UTF-8.
///
/// # Safety
/// `text` must be null or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn palindrome_is_palindrome(text: *const c_char) -> c_int {
    match palindrome_core::check_bytes(cstr_bytes(text), CharClass::Unicode) {
        Ok(report) => c_int::from(report.palindrome),
        Err(_) => -1,
    }
}

/// Check `text` and return a JSON report:
/// `{ "input": ..., "normalized": ..., "palindrome": bool, "char_class": ... }`
///
/// # Safety
/// `text` must be null or a valid null-terminated C string.
/// The caller must free the returned strings with `palindrome_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn palindrome_check(text: *const c_char, ascii: bool) -> PalindromeResult {
    let report = match palindrome_core::check_bytes(cstr_bytes(text), char_class(ascii)) {
        Ok(report) => report,
        Err(e) => return PalindromeResult::err(e.to_string()),
    };

    match serde_json::to_string(&report) {
        Ok(json) => PalindromeResult::ok(json),
        Err(e) => PalindromeResult::err(format!("Serialization error: {}", e)),
    }
}

/// Free a string previously returned by a palindrome FFI function.
///
/// # Safety
/// `ptr` must be a pointer previously returned by a palindrome FFI function,
/// or null (in which case this is a no-op).
#[no_mangle]
pub unsafe extern "C" fn palindrome_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
