//! Palindrome checker — the predicate and its reporting entry points
//!
//! `is_palindrome` is pure and total: it reads only its argument, never fails,
//! and may be called concurrently from any number of threads.
//!
//! The byte and reader entry points exist for callers that do not hold a
//! `&str` yet (FFI, stdin). `check_bytes` rejects non-UTF-8 input;
//! `check_lines` decodes lossily and only fails when the reader does.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::normalizer::{normalize_with, CharClass};
use crate::Result;

/// Outcome of a single check, including the normalized form that was compared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub input: String,
    pub normalized: String,
    pub palindrome: bool,
    pub char_class: CharClass,
}

// ── Predicate ─────────────────────────────────────────────

/// Returns true if `input` reads the same forwards and backwards,
/// ignoring case and every non-alphanumeric character.
///
/// Empty input, and input with no alphanumeric characters, is a palindrome.
///
/// ```
/// use palindrome_core::is_palindrome;
///
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("hello"));
/// ```
pub fn is_palindrome(input: &str) -> bool {
    is_palindrome_with(input, CharClass::Unicode)
}

/// Same as [`is_palindrome`] with an explicit classification
pub fn is_palindrome_with(input: &str, class: CharClass) -> bool {
    is_symmetric(&normalize_with(input, class))
}

/// Two-pointer comparison of a normalized sequence against its reverse
fn is_symmetric(normalized: &str) -> bool {
    let chars: Vec<char> = normalized.chars().collect();
    let n = chars.len();
    (0..n / 2).all(|i| chars[i] == chars[n - 1 - i])
}

// ── Reports ───────────────────────────────────────────────

/// Check `input` and keep the normalized form alongside the verdict
pub fn check(input: &str, class: CharClass) -> CheckReport {
    let normalized = normalize_with(input, class);
    let palindrome = is_symmetric(&normalized);
    tracing::trace!(
        len = input.len(),
        normalized_len = normalized.len(),
        palindrome,
        %class,
        "checked input"
    );
    CheckReport {
        input: input.to_string(),
        normalized,
        palindrome,
        char_class: class,
    }
}

/// Check raw bytes, which must be valid UTF-8
///
/// # Errors
/// Returns `InvalidUtf8` if `bytes` is not UTF-8.
pub fn check_bytes(bytes: &[u8], class: CharClass) -> Result<CheckReport> {
    let input = std::str::from_utf8(bytes)?;
    Ok(check(input, class))
}

/// Check every line of `reader`, one report per line, as lines are read
///
/// Line terminators (`\n` or `\r\n`) are not part of the checked text.
/// Bytes that are not UTF-8 decode to U+FFFD, which is not alphanumeric,
/// so a malformed line still gets a verdict.
pub fn check_lines<R: BufRead>(reader: R, class: CharClass) -> CheckLines<R> {
    CheckLines {
        lines: reader.split(b'\n'),
        class,
    }
}

/// Iterator returned by [`check_lines`]
///
/// Yields `Err(Io)` only when the underlying reader fails.
#[derive(Debug)]
pub struct CheckLines<R> {
    lines: std::io::Split<R>,
    class: CharClass,
}

impl<R: BufRead> Iterator for CheckLines<R> {
    type Item = Result<CheckReport>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let text = String::from_utf8_lossy(&line);
        if let std::borrow::Cow::Owned(_) = text {
            tracing::debug!(bytes = line.len(), "replaced invalid UTF-8 in line");
        }
        Some(Ok(check(&text, self.class)))
    }
}

// ── Tests ─────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use crate::Error;
    use std::io::Cursor;

    fn reversed(s: &str) -> String {
        s.chars().rev().collect()
    }

    /// Swap the case of every letter with a one-to-one case mapping
    fn toggle_case(s: &str) -> String {
        fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
            match (it.next(), it.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
        s.chars()
            .map(|c| {
                let swapped = if c.is_uppercase() {
                    single(c.to_lowercase())
                } else {
                    single(c.to_uppercase())
                };
                swapped.unwrap_or(c)
            })
            .collect()
    }

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "ab",
        "aa",
        "racecar",
        "hello",
        "121",
        "123",
        "!!!",
        "A man, a plan, a canal: Panama",
        "Was it a car or a cat I saw?",
        "No 'x' in Nixon",
        "Step on no pets",
        "Never odd or even.",
        "palindrome",
        "0P",
        "Ésope reste ici et se repose",
        "été",
        "Αννα",
        "ΑΒΓ γβα",
        "Ökö",
        "ÅbÅ",
        "Ѣлѣ",
    ];

    #[test]
    fn test_racecar() {
        assert!(is_palindrome("racecar"));
    }

    #[test]
    fn test_panama() {
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
    }

    #[test]
    fn test_hello() {
        assert!(!is_palindrome("hello"));
    }

    #[test]
    fn test_empty_string_is_palindrome() {
        assert!(is_palindrome(""));
    }

    #[test]
    fn test_digits() {
        assert!(is_palindrome("121"));
        assert!(!is_palindrome("123"));
    }

    #[test]
    fn test_no_alphanumerics_is_palindrome() {
        assert!(is_palindrome("!!!"));
        assert!(is_palindrome("  ,.  "));
    }

    #[test]
    fn test_two_distinct_chars() {
        assert!(!is_palindrome("ab"));
        assert!(is_palindrome("a b a"));
    }

    #[test]
    fn test_digit_and_letter_differ() {
        assert!(!is_palindrome("0P"));
    }

    #[test]
    fn test_non_ascii_letters() {
        assert!(is_palindrome("Été"));
        assert!(is_palindrome("Αννα"));
        assert!(!is_palindrome("Ésope reste ici et se repose"));
        assert!(!is_palindrome("Straße"));
    }

    #[test]
    fn test_ascii_class_ignores_non_ascii() {
        // "été" → "t" under ASCII rules
        assert!(is_palindrome_with("été", CharClass::Ascii));
        assert!(is_palindrome_with("été", CharClass::Unicode));
        assert!(is_palindrome_with("aé b ça", CharClass::Ascii));
        assert!(!is_palindrome_with("aé b ça", CharClass::Unicode));
    }

    #[test]
    fn test_equivalent_to_reverse_comparison() {
        for class in [CharClass::Unicode, CharClass::Ascii] {
            for s in SAMPLES {
                let n = normalize_with(s, class);
                assert_eq!(
                    is_palindrome_with(s, class),
                    n == reversed(&n),
                    "mismatch for {:?} ({})",
                    s,
                    class
                );
            }
        }
    }

    #[test]
    fn test_commutes_with_normalization() {
        for s in SAMPLES {
            assert_eq!(is_palindrome(s), is_palindrome(&normalize(s)), "{:?}", s);
        }
    }

    #[test]
    fn test_case_insensitive() {
        for s in SAMPLES {
            assert_eq!(is_palindrome(s), is_palindrome(&toggle_case(s)), "{:?}", s);
        }
    }

    #[test]
    fn test_toggle_case_covers_non_ascii() {
        assert_eq!(toggle_case("Αννα"), "αΝΝΑ");
        assert_eq!(toggle_case("été"), "ÉTÉ");
        // ß uppercases to "SS" and is left alone
        assert_eq!(toggle_case("ßa"), "ßA");
    }

    #[test]
    fn test_multi_char_case_mapping_is_not_folded() {
        // Lowercase folding only; ß is not expanded to "ss"
        assert!(!is_palindrome("ßs"));
        assert!(is_palindrome("SSS"));
    }

    #[test]
    fn test_check_report() {
        let report = check("Race car!", CharClass::Unicode);
        assert_eq!(report.input, "Race car!");
        assert_eq!(report.normalized, "racecar");
        assert!(report.palindrome);
        assert_eq!(report.char_class, CharClass::Unicode);
    }

    #[test]
    fn test_check_report_json() {
        let report = check("ab", CharClass::Ascii);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["palindrome"], false);
        assert_eq!(json["normalized"], "ab");
        assert_eq!(json["char_class"], "ascii");
    }

    #[test]
    fn test_check_bytes_valid() {
        let report = check_bytes("Never odd or even".as_bytes(), CharClass::Unicode).unwrap();
        assert!(report.palindrome);
    }

    #[test]
    fn test_check_bytes_invalid_utf8() {
        let err = check_bytes(&[b'a', b'a', 0xc3], CharClass::Unicode).unwrap_err();
        assert!(matches!(err, Error::InvalidUtf8 { valid_up_to: 2 }));
    }

    #[test]
    fn test_check_lines() {
        let input = Cursor::new("racecar\nhello\r\n\n121\n");
        let reports: Vec<CheckReport> = check_lines(input, CharClass::Unicode)
            .collect::<Result<_>>()
            .unwrap();
        let verdicts: Vec<bool> = reports.iter().map(|r| r.palindrome).collect();
        assert_eq!(verdicts, vec![true, false, true, true]);
        assert_eq!(reports[1].input, "hello");
    }

    #[test]
    fn test_check_lines_last_line_without_newline() {
        let reports: Vec<CheckReport> = check_lines(Cursor::new("ab\naba"), CharClass::Unicode)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(reports.len(), 2);
        assert!(!reports[0].palindrome);
        assert!(reports[1].palindrome);
    }

    #[test]
    fn test_check_lines_invalid_utf8_still_checked() {
        let input = Cursor::new(b"racecar\nhello\n\xff\na\xffb\n".to_vec());
        let reports: Vec<CheckReport> = check_lines(input, CharClass::Unicode)
            .collect::<Result<_>>()
            .unwrap();
        let verdicts: Vec<bool> = reports.iter().map(|r| r.palindrome).collect();
        assert_eq!(verdicts, vec![true, false, true, false]);
        assert_eq!(reports[2].input, "\u{fffd}");
        assert_eq!(reports[3].normalized, "ab");
    }

    #[test]
    fn test_check_lines_reader_failure_is_io_error() {
        struct Failing;
        impl std::io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "device gone"))
            }
        }
        let mut lines = check_lines(std::io::BufReader::new(Failing), CharClass::Unicode);
        assert!(matches!(lines.next(), Some(Err(Error::Io(_)))));
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let input = if i % 2 == 0 { "racecar" } else { "hello" };
                    (i, is_palindrome(input))
                })
            })
            .collect();
        for h in handles {
            let (i, result) = h.join().unwrap();
            assert_eq!(result, i % 2 == 0);
        }
    }

    #[test]
    fn test_determinism_100_iterations() {
        let input = "Was it a car or a cat I saw?";
        let first = check(input, CharClass::Unicode);
        for i in 0..100 {
            assert_eq!(
                first,
                check(input, CharClass::Unicode),
                "Non-determinism at iteration {}",
                i
            );
        }
    }
}
