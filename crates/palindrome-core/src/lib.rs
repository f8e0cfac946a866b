//! Palindrome Core - canonical implementation of the palindrome check
//!
//! This is the single source of truth for palindrome semantics.
//! The CLI and every language binding (Python, JavaScript, Go) call this same core.
//!
//! # Architecture
//!
//! ```text
//! Text → Normalizer → normalized form → Checker → bool / CheckReport
//! ```
//!
//! # Guarantees
//!
//! - **Total**: every `&str` has an answer; the predicate never fails
//! - **Deterministic**: same input always produces identical output
//! - **Pure**: no shared state, safe to call from any thread

pub mod checker;
pub mod error;
pub mod normalizer;

pub use checker::{
    check, check_bytes, check_lines, is_palindrome, is_palindrome_with, CheckLines, CheckReport,
};
pub use error::{Error, Result};
pub use normalizer::{normalize, normalize_with, CharClass};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
