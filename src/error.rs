//! Error definitions
//!
//! This module provides the error type for iter-assert's fallible
//! assertion surface ([`Proxy::check`](crate::Proxy::check) and friends).
//! The panicking macro path does not use it; the library itself never
//! raises during normal operation — a failed assertion is the ordinary
//! `false` reduction, and errors from user mapping functions never pass
//! through this crate.

use thiserror::Error;

/// Main error type for iter-assert
#[derive(Error, Debug)]
pub enum Error {
    /// A reduced comparison or truthiness check came out `false`. The
    /// message is the rendered diagnostic, naming every compared element.
    #[error("assertion failed: {0}")]
    AssertionFailed(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_diagnostic() {
        let err = Error::AssertionFailed("all(0, 1, 2) < 1".to_string());
        assert_eq!(err.to_string(), "assertion failed: all(0, 1, 2) < 1");
    }
}
