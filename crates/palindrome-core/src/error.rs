//! Error types for the palindrome runtime
//!
//! The predicate itself is total and never returns an error.
//! These cover the entry points that take bytes or readers instead of `&str`.

use thiserror::Error;

/// Errors raised outside the palindrome predicate
#[derive(Error, Debug)]
pub enum Error {
    /// Byte input was not valid UTF-8
    #[error("Invalid UTF-8: input is valid up to byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },

    /// Reading input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        }
    }
}

/// Result type alias for palindrome operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_utf8_display() {
        let bytes = vec![b'a', b'b', 0xff];
        let err: Error = std::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err.to_string(), "Invalid UTF-8: input is valid up to byte 2");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
