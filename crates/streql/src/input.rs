//! Operand representations accepted by [`equals_input`].
//!
//! Raw bytes are compared as they are. Text is compared by its UTF-8 encoding;
//! turning text into bytes is not constant-time, since text length and encoding
//! are not secret.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::{equals, EncodingError, Result};

/// A borrowed operand: raw bytes or text in one of the supported encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// Raw bytes
    Bytes(&'a [u8]),
    /// UTF-8 text
    Text(&'a str),
    /// UTF-16 code units, as handed over by JavaScript or Windows APIs
    Utf16(&'a [u16]),
    /// Platform string, which must be valid Unicode
    Os(&'a OsStr),
}

impl<'a> Input<'a> {
    /// Wrap UTF-16 code units.
    ///
    /// There is no `From<&[u16]>` so that wide text is never picked up by accident.
    pub fn utf16(units: &'a [u16]) -> Self {
        Input::Utf16(units)
    }

    /// Produce the bytes that get compared.
    ///
    /// Borrows unless the operand has to be re-encoded.
    pub fn to_bytes(&self) -> std::result::Result<Cow<'a, [u8]>, EncodingError> {
        match *self {
            Input::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
            Input::Text(text) => Ok(Cow::Borrowed(text.as_bytes())),
            Input::Utf16(units) => decode_utf16(units).map(|s| Cow::Owned(s.into_bytes())),
            Input::Os(os) => os
                .to_str()
                .map(|s| Cow::Borrowed(s.as_bytes()))
                .ok_or(EncodingError::NonUnicodeOsString {
                    len: os.as_encoded_bytes().len(),
                }),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Input::Bytes(_) => "bytes",
            Input::Text(_) => "text",
            Input::Utf16(_) => "utf16",
            Input::Os(_) => "os",
        }
    }
}

fn decode_utf16(units: &[u16]) -> std::result::Result<String, EncodingError> {
    let mut out = String::with_capacity(units.len());
    let mut index = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                index += c.len_utf16();
                out.push(c);
            }
            Err(e) => {
                return Err(EncodingError::UnpairedSurrogate {
                    index,
                    unit: e.unpaired_surrogate(),
                });
            }
        }
    }
    Ok(out)
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a OsStr> for Input<'a> {
    fn from(os: &'a OsStr) -> Self {
        Input::Os(os)
    }
}

impl<'a> From<&'a OsString> for Input<'a> {
    fn from(os: &'a OsString) -> Self {
        Input::Os(os)
    }
}

impl<'a> From<&'a Path> for Input<'a> {
    fn from(path: &'a Path) -> Self {
        Input::Os(path.as_os_str())
    }
}

/// Compare two operands of any supported representation in constant time.
///
/// Both operands are converted to bytes first; a conversion failure is
/// returned before any comparison happens.
///
/// # Example
///
/// ```
/// use streql::{equals_input, Input};
///
/// assert!(equals_input("héllo", "héllo".as_bytes()).unwrap());
///
/// let wide: Vec<u16> = "héllo".encode_utf16().collect();
/// assert!(equals_input(Input::utf16(&wide), "héllo").unwrap());
///
/// let lone = [0xD800u16];
/// assert!(equals_input(Input::utf16(&lone), "").is_err());
/// ```
pub fn equals_input<'x, 'y>(x: impl Into<Input<'x>>, y: impl Into<Input<'y>>) -> Result<bool> {
    let (x, y) = (x.into(), y.into());
    let x_bytes = encode(&x, "x")?;
    let y_bytes = encode(&y, "y")?;
    Ok(equals(&x_bytes, &y_bytes))
}

fn encode<'a>(input: &Input<'a>, side: &'static str) -> Result<Cow<'a, [u8]>> {
    input.to_bytes().map_err(|e| {
        tracing::debug!(side, kind = input.kind(), error = %e, "Operand has no UTF-8 encoding");
        e.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompareError;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_text_borrows() {
        let bytes = Input::from("héllo").to_bytes().unwrap();
        assert!(matches!(bytes, Cow::Borrowed(_)));
        assert_eq!(&*bytes, "héllo".as_bytes());
    }

    #[test]
    fn test_text_inputs() {
        assert_eq!(equals_input("héllo", "héllo"), Ok(true));
        assert_eq!(equals_input("héllo", "hello"), Ok(false));
    }

    #[test]
    fn test_mixed_text_and_bytes() {
        assert_eq!(equals_input("abc", b"abc"), Ok(true));
        assert_eq!(equals_input(&b"abc".to_vec(), &String::from("abd")), Ok(false));
    }

    #[test]
    fn test_utf16_with_surrogate_pair() {
        let wide = utf16("key-\u{1F511}");
        assert_eq!(equals_input(Input::utf16(&wide), "key-\u{1F511}"), Ok(true));
    }

    #[test]
    fn test_unpaired_surrogate_reports_index() {
        // 'a', 'b' then a lone high surrogate followed by 'c'
        let wide = [0x61, 0x62, 0xD83D, 0x63];
        assert_eq!(
            equals_input(Input::utf16(&wide), "ab"),
            Err(CompareError::Encoding(EncodingError::UnpairedSurrogate {
                index: 2,
                unit: 0xD83D
            }))
        );
    }

    #[test]
    fn test_index_counts_code_units() {
        let mut wide = utf16("\u{1F511}");
        wide.push(0xDC00);
        assert_eq!(
            Input::utf16(&wide).to_bytes(),
            Err(EncodingError::UnpairedSurrogate { index: 2, unit: 0xDC00 })
        );
    }

    #[test]
    fn test_encoding_error_on_either_side() {
        let lone = [0xDFFFu16];
        assert!(equals_input("x", Input::utf16(&lone)).is_err());
        assert!(equals_input(Input::utf16(&lone), "x").is_err());
    }

    #[test]
    fn test_os_and_path() {
        let os = OsString::from("héllo");
        assert_eq!(equals_input(&os, "héllo"), Ok(true));
        assert_eq!(equals_input(Path::new("a/b"), "a/b"), Ok(true));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_os_string() {
        use std::os::unix::ffi::OsStrExt;

        let os = OsStr::from_bytes(&[0x66, 0x6f, 0x80]);
        assert_eq!(
            equals_input(os, "fo"),
            Err(CompareError::Encoding(EncodingError::NonUnicodeOsString { len: 3 }))
        );
    }

    #[test]
    fn test_empty_operands() {
        assert_eq!(equals_input("", b""), Ok(true));
        assert_eq!(equals_input(Input::utf16(&[]), ""), Ok(true));
    }
}
