//! Unicode normalization of labels.
//!
//! This is a private module. Its public functions are re-exported by the
//! parent module.

use super::error::EncodingError;
use alloc::borrow::Cow;
use alloc::string::String;
use unicode_normalization::{is_nfc, is_nfc_quick, IsNormalized};
use unicode_normalization::UnicodeNormalization;

/// Returns the normalization form C of `text`.
///
/// The text is only copied if it actually changes. Normalization is
/// idempotent.
pub fn normalize(text: &str) -> Cow<str> {
    if is_nfc_quick(text.chars()) == IsNormalized::Yes {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

/// Returns whether `text` is in normalization form C.
pub fn is_normalized(text: &str) -> bool {
    is_nfc(text)
}

/// Normalizes a sequence of raw code points.
///
/// Each value must be a Unicode scalar value. Surrogates and values beyond
/// U+10FFFF are rejected with the offset of the first offending value.
pub fn normalize_codepoints(
    codepoints: &[u32],
) -> Result<String, EncodingError> {
    let mut text = String::with_capacity(codepoints.len());
    for (offset, &value) in codepoints.iter().enumerate() {
        match char::from_u32(value) {
            Some(ch) => text.push(ch),
            None if (0xD800..=0xDFFF).contains(&value) => {
                return Err(EncodingError::Surrogate { offset, value })
            }
            None => return Err(EncodingError::OutOfRange { offset, value }),
        }
    }
    Ok(normalize(&text).into_owned())
}

/// Checks that `octets` are valid UTF-8.
pub fn decode_utf8(octets: &[u8]) -> Result<&str, EncodingError> {
    core::str::from_utf8(octets).map_err(|err| EncodingError::InvalidUtf8 {
        offset: err.valid_up_to(),
    })
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compose() {
        assert_eq!(normalize("bu\u{308}cher"), "b\u{fc}cher");
        assert!(matches!(normalize("bücher"), Cow::Borrowed(_)));
        assert_eq!(normalize("\u{212B}"), "\u{C5}");
    }

    #[test]
    fn idempotent() {
        for s in ["a\u{301}\u{327}", "\u{1E9B}\u{323}", "\u{AC00}\u{11A8}"] {
            let once = normalize(s).into_owned();
            assert_eq!(normalize(&once), once);
            assert!(is_normalized(&once));
        }
    }

    #[test]
    fn codepoints() {
        assert_eq!(
            normalize_codepoints(&[0x62, 0x75, 0x308]).unwrap(),
            "b\u{fc}"
        );
        assert_eq!(
            normalize_codepoints(&[0x61, 0xD800]),
            Err(EncodingError::Surrogate {
                offset: 1,
                value: 0xD800
            })
        );
        assert_eq!(
            normalize_codepoints(&[0x110000]),
            Err(EncodingError::OutOfRange {
                offset: 0,
                value: 0x110000
            })
        );
    }

    #[test]
    fn utf8() {
        assert_eq!(decode_utf8(b"abc").unwrap(), "abc");
        assert_eq!(
            decode_utf8(b"ab\xFFc"),
            Err(EncodingError::InvalidUtf8 { offset: 2 })
        );
    }
}
