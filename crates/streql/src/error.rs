//! Error types for the streql crate.

use thiserror::Error;

/// Result type alias for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;

/// Errors that can occur while comparing.
///
/// Comparing bytes never fails. Only converting a text operand to bytes, or asking
/// [`verify`](crate::verify) to turn inequality into an error, produces one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// A text operand could not be encoded as UTF-8
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Values did not match
    #[error("Value mismatch")]
    Mismatch,
}

/// A text operand that has no UTF-8 representation.
///
/// Messages carry positions and lengths only, never operand contents.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// UTF-16 input contains a surrogate without its pair
    #[error("unpaired UTF-16 surrogate 0x{unit:04X} at index {index}")]
    UnpairedSurrogate {
        /// Index of the offending code unit
        index: usize,
        /// The code unit itself
        unit: u16,
    },

    /// OS string is not valid Unicode
    #[error("OS string of {len} bytes is not valid Unicode")]
    NonUnicodeOsString {
        /// Encoded length of the OS string
        len: usize,
    },
}
