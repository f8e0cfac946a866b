//! Normalizer — reduces text to the form the palindrome check compares
//!
//! The normalized form keeps only alphanumeric characters, each folded to
//! lowercase. Everything else (whitespace, punctuation, symbols) is dropped.
//!
//! # Guarantees
//!
//! - **Idempotent**: `normalize(normalize(x)) == normalize(x)`
//! - **Deterministic**: same input always produces same output
//! - **Total**: every `&str` has a normalized form, possibly empty

use serde::{Deserialize, Serialize};

// ── Character Classification ──────────────────────────────

/// Which rules decide what counts as alphanumeric and how case is folded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// `char::is_alphanumeric` + `char::to_lowercase` (Unicode Alphabetic/Numeric)
    ///
    /// Folding is lowercase mapping, not full case folding: `ß` stays `ß`
    /// while `SS` becomes `ss`, so `"ßs"` is not a palindrome and `"SSS"` is.
    #[default]
    Unicode,
    /// `char::is_ascii_alphanumeric` + `to_ascii_lowercase`; non-ASCII is dropped
    Ascii,
}

impl CharClass {
    /// Append the folded form of `c` to `out`, or nothing if `c` is filtered out
    fn fold_into(self, c: char, out: &mut String) {
        match self {
            CharClass::Unicode => {
                if c.is_alphanumeric() {
                    // Lowercasing can expand into combining marks (İ → i + U+0307);
                    // only the alphanumeric part is kept.
                    out.extend(c.to_lowercase().filter(|l| l.is_alphanumeric()));
                }
            }
            CharClass::Ascii => {
                if c.is_ascii_alphanumeric() {
                    out.push(c.to_ascii_lowercase());
                }
            }
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharClass::Unicode => write!(f, "unicode"),
            CharClass::Ascii => write!(f, "ascii"),
        }
    }
}

// ── Public API ─────────────────────────────────────────────

/// Normalize text using the default Unicode classification
pub fn normalize(input: &str) -> String {
    normalize_with(input, CharClass::Unicode)
}

/// Normalize text with an explicit classification
pub fn normalize_with(input: &str, class: CharClass) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        class.fold_into(c, &mut out);
    }
    out
}

/// Returns true if `input` is already in normalized form
pub fn is_normalized(input: &str, class: CharClass) -> bool {
    normalize_with(input, class) == input
}

// ── Tests ─────────────────────────────────────────────────
