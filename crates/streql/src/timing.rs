//! Constant-time operations for security.

use core::hint::black_box;

use subtle::{Choice, ConstantTimeEq};

use crate::{CompareError, Result};

/// ORs `x[i] ^ y[i]` over the common prefix into an accumulator seeded with the
/// length mismatch.
///
/// Kept out of line so the caller's zero test can't be hoisted into the loop. The
/// accumulator goes through `black_box` on every step, so the optimizer can't see it
/// saturate and stop early.
#[inline(never)]
fn accumulate_diff(x: &[u8], y: &[u8]) -> u8 {
    let mut acc = u8::from(x.len() != y.len());

    // zip stops at min(len)
    for (a, b) in x.iter().zip(y) {
        acc = black_box(acc | (a ^ b));
    }

    acc // The compare with 0 must happen outside this function.
}

/// Compare two byte slices in constant time, returning a [`Choice`].
///
/// Same algorithm as [`equals`]; useful when the result feeds further
/// constant-time selection instead of a branch.
pub fn ct_equals(x: &[u8], y: &[u8]) -> Choice {
    accumulate_diff(x, y).ct_eq(&0)
}

/// Compare two byte slices in constant time.
///
/// Every byte of the shorter slice is visited whether or not a difference has
/// already been seen, so the running time depends only on the two lengths.
/// Slices of different length are never equal.
///
/// # Arguments
/// * `x` - First byte slice
/// * `y` - Second byte slice
///
/// # Returns
/// true if slices are equal, false otherwise
///
/// # Example
///
/// ```
/// assert!(streql::equals(b"abc", b"abc"));
/// assert!(!streql::equals(b"abc", b"abd"));
/// assert!(!streql::equals(b"abc", b"abcd"));
/// ```
pub fn equals(x: &[u8], y: &[u8]) -> bool {
    ct_equals(x, y).into()
}

/// Compare two strings by their UTF-8 bytes in constant time.
pub fn equals_str(x: &str, y: &str) -> bool {
    equals(x.as_bytes(), y.as_bytes())
}

/// Verify a received value (typically an authentication tag) against the expected one.
///
/// # Arguments
/// * `expected` - The value computed locally
/// * `received` - The value supplied by the peer
///
/// # Returns
/// Ok(()) if values match, Err otherwise
pub fn verify(expected: &[u8], received: &[u8]) -> Result<()> {
    if equals(expected, received) {
        Ok(())
    } else {
        Err(CompareError::Mismatch)
    }
}

/// Constant-time equality against anything viewable as bytes.
pub trait ConstantTimeEquals<Rhs: ?Sized = Self> {
    /// Returns true if both sides hold the same bytes.
    fn ct_eq_bytes(&self, other: &Rhs) -> bool;
}

impl<Rhs: AsRef<[u8]> + ?Sized> ConstantTimeEquals<Rhs> for [u8] {
    fn ct_eq_bytes(&self, other: &Rhs) -> bool {
        equals(self, other.as_ref())
    }
}

impl<Rhs: AsRef<[u8]> + ?Sized> ConstantTimeEquals<Rhs> for str {
    fn ct_eq_bytes(&self, other: &Rhs) -> bool {
        equals(self.as_bytes(), other.as_ref())
    }
}

impl<Rhs: AsRef<[u8]> + ?Sized> ConstantTimeEquals<Rhs> for Vec<u8> {
    fn ct_eq_bytes(&self, other: &Rhs) -> bool {
        equals(self, other.as_ref())
    }
}

impl<Rhs: AsRef<[u8]> + ?Sized> ConstantTimeEquals<Rhs> for String {
    fn ct_eq_bytes(&self, other: &Rhs) -> bool {
        equals(self.as_bytes(), other.as_ref())
    }
}

impl<const N: usize, Rhs: AsRef<[u8]> + ?Sized> ConstantTimeEquals<Rhs> for [u8; N] {
    fn ct_eq_bytes(&self, other: &Rhs) -> bool {
        equals(self, other.as_ref())
    }
}
