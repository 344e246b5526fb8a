//! Conversion of entire domain names.
//!
//! This is a private module. Its public functions are re-exported by the
//! parent module.

use super::config::Options;
use super::error::{EncodingError, IdnaError, LabelError};
use super::label::{label_is_bidi, to_ascii_label, to_unicode_label};
use super::normalize::{decode_utf8, normalize_codepoints};
use super::validate::LabelContext;
use alloc::string::String;
use alloc::vec::Vec;
use tracing::{debug, trace};

/// The maximum length of a domain name in octets.
///
/// This excludes the trailing dot of an absolute name.
pub const MAX_DOMAIN_LEN: usize = 253;

/// The maximum number of labels in a domain name.
///
/// This excludes the empty root label of an absolute name.
pub const MAX_LABELS: usize = 127;

//------------ to_ascii ------------------------------------------------------

/// Converts a domain name into its ASCII form.
///
/// Each label is mapped, normalized, validated and, if it contains
/// non-ASCII characters, encoded as an A-label. Labels are separated by a
/// full stop or any of the ideographic full stops U+3002, U+FF0E, and
/// U+FF61. The labels of the result are always separated by a plain full
/// stop. A single trailing dot is kept.
///
/// The conversion stops at the first label that fails.
///
/// ```
/// use domain_idna::{to_ascii, Options};
///
/// assert_eq!(
///     to_ascii("Bücher.example", Options::default()).unwrap(),
///     "xn--bcher-kva.example"
/// );
/// ```
pub fn to_ascii(domain: &str, options: Options) -> Result<String, IdnaError> {
    let labels: Vec<&str> = split_labels(domain).collect();
    if label_count(&labels) > MAX_LABELS {
        debug!("Domain name with {} labels", labels.len());
        return Err(IdnaError::TooManyLabels);
    }
    let bidi_domain = labels.iter().any(|label| label_is_bidi(label));

    let mut res = String::with_capacity(domain.len());
    for (index, label) in labels.iter().enumerate() {
        let context = label_context(&labels, index, bidi_domain);
        match to_ascii_label(label, context, options) {
            Ok(label) => {
                if index > 0 {
                    res.push('.');
                }
                res.push_str(&label);
            }
            Err(error) => {
                debug!("Rejected label {} '{}': {}", index, label, error);
                return Err(IdnaError::Label { index, error });
            }
        }
    }

    if options.verifies_dns_length() {
        let len = res.strip_suffix('.').unwrap_or(&res).len();
        if len > MAX_DOMAIN_LEN {
            debug!("Domain name of {} octets", len);
            return Err(IdnaError::DomainTooLong);
        }
    }
    trace!("Converted '{}' to '{}'", domain, res);
    Ok(res)
}

/// Converts a domain name given as a sequence of code points.
///
/// The code points are checked and normalized before conversion.
pub fn to_ascii_ucs4(
    domain: &[u32],
    options: Options,
) -> Result<String, IdnaError> {
    let domain = normalize_codepoints(domain)?;
    to_ascii(&domain, options)
}

/// Converts a domain name given as UTF-8 encoded octets.
pub fn to_ascii_utf8(
    domain: &[u8],
    options: Options,
) -> Result<String, IdnaError> {
    to_ascii(decode_utf8(domain)?, options)
}

//------------ to_unicode ----------------------------------------------------

/// Converts a domain name into its Unicode form.
///
/// A-labels are decoded and validated. All other labels are mapped and
/// normalized.
///
/// The conversion never fails as a whole. A label that can’t be converted
/// is kept as it was given and its index is reported together with the
/// error. The errors are ordered by label index.
///
/// ```
/// use domain_idna::{to_unicode, Options};
///
/// let (name, errors) =
///     to_unicode("xn--bcher-kva.example", Options::default());
/// assert_eq!(name, "bücher.example");
/// assert!(errors.is_empty());
/// ```
pub fn to_unicode(
    domain: &str,
    options: Options,
) -> (String, Vec<(usize, LabelError)>) {
    let labels: Vec<&str> = split_labels(domain).collect();
    let bidi_domain = labels.iter().any(|label| label_is_bidi(label));

    let mut res = String::with_capacity(domain.len());
    let mut errors = Vec::new();
    for (index, label) in labels.iter().enumerate() {
        if index > 0 {
            res.push('.');
        }
        let context = label_context(&labels, index, bidi_domain);
        match to_unicode_label(label, context, options) {
            Ok(label) => res.push_str(&label),
            Err(error) => {
                debug!("Keeping label {} '{}': {}", index, label, error);
                res.push_str(label);
                errors.push((index, error));
            }
        }
    }
    (res, errors)
}

/// Converts a domain name given as UTF-8 encoded octets.
///
/// Only the encoding of the input can cause this function to fail.
pub fn to_unicode_utf8(
    domain: &[u8],
    options: Options,
) -> Result<(String, Vec<(usize, LabelError)>), EncodingError> {
    Ok(to_unicode(decode_utf8(domain)?, options))
}

//------------ Helpers -------------------------------------------------------

/// Returns whether a character separates labels.
fn is_dot(ch: char) -> bool {
    matches!(ch, '.' | '\u{3002}' | '\u{FF0E}' | '\u{FF61}')
}

fn split_labels(domain: &str) -> impl Iterator<Item = &str> {
    domain.split(is_dot)
}

/// Returns the number of labels not counting a trailing root label.
fn label_count(labels: &[&str]) -> usize {
    match labels.split_last() {
        Some((last, rest)) if last.is_empty() && !rest.is_empty() => {
            rest.len()
        }
        _ => labels.len(),
    }
}

fn label_context(
    labels: &[&str],
    index: usize,
    bidi_domain: bool,
) -> LabelContext {
    LabelContext {
        trailing: index > 0 && index + 1 == labels.len(),
        bidi_domain,
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split() {
        let labels: Vec<_> =
            split_labels("a.b\u{3002}c\u{FF0E}d\u{FF61}e").collect();
        assert_eq!(labels, ["a", "b", "c", "d", "e"]);
        assert_eq!(label_count(&["a", "b", ""]), 2);
        assert_eq!(label_count(&["a", "", "b"]), 3);
        assert_eq!(label_count(&[""]), 1);
    }

    #[test]
    fn trailing_dot() {
        assert_eq!(
            to_ascii("bücher.example.", Options::default()).unwrap(),
            "xn--bcher-kva.example."
        );
        let (name, errors) = to_unicode("example.", Options::default());
        assert_eq!(name, "example.");
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_labels() {
        let err = to_ascii("a..b", Options::default()).unwrap_err();
        assert_eq!(err.label_index(), Some(1));
        let err = to_ascii(".", Options::default()).unwrap_err();
        assert_eq!(err.label_index(), Some(0));
    }

    #[test]
    fn encodings() {
        assert_eq!(
            to_ascii_utf8("bücher".as_bytes(), Options::default()).unwrap(),
            "xn--bcher-kva"
        );
        assert_eq!(
            to_ascii_utf8(b"b\xFCcher", Options::default()),
            Err(IdnaError::Encoding(EncodingError::InvalidUtf8 {
                offset: 1
            }))
        );
        let domain = [0x62, 0x75, 0x308, 0x2E, 0x64, 0x65];
        assert_eq!(
            to_ascii_ucs4(&domain, Options::default()).unwrap(),
            "xn--b-eha.de"
        );
        assert_eq!(
            to_unicode_utf8(b"\xC3", Options::default()),
            Err(EncodingError::InvalidUtf8 { offset: 0 })
        );
    }
}
