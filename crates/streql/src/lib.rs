//! Constant-time equality for byte strings and text.
//!
//! Comparing a secret (an HMAC tag, an API token) with `==` returns as soon as the
//! first byte differs, and that difference in latency is measurable. This crate
//! compares in time that depends only on the lengths of the operands:
//!
//! - [`equals`] / [`ct_equals`] for raw bytes
//! - [`equals_str`] for UTF-8 text
//! - [`equals_input`] for mixed operands, including UTF-16 and OS strings
//! - [`verify`] for tag checks that should fail with an error
//!
//! Lengths are not hidden. Comparing values of public, fixed width keeps the whole
//! operation constant-time.
//!
//! ```
//! use streql::{equals, verify, CompareError};
//!
//! let expected = [0x5au8; 32];
//! assert!(equals(&expected, &[0x5a; 32]));
//! assert_eq!(verify(&expected, &[0x00; 32]), Err(CompareError::Mismatch));
//! ```

#![warn(missing_docs)]

mod error;
mod input;
mod timing;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{CompareError, EncodingError, Result};
pub use input::{equals_input, Input};
pub use timing::{ct_equals, equals, equals_str, verify, ConstantTimeEquals};

pub use subtle::Choice;
