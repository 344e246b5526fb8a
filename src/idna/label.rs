//! Conversion of individual labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::config::Options;
use super::error::{LabelError, ValidationError, ValidationErrorKind};
use super::normalize::{is_normalized, normalize};
use super::tables;
use super::validate::{
    has_ace_prefix, is_bidi_label, validate_label, LabelContext, ACE_PREFIX,
};
use crate::utils::punycode::{self, PunycodeError, MAX_LABEL_LEN};
use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use tracing::trace;

//------------ Direction -----------------------------------------------------

/// The direction of a label conversion.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Convert into an A-label or a plain ASCII label.
    ToAscii,

    /// Convert into a U-label.
    ToUnicode,
}

//------------ process_label -------------------------------------------------

/// Converts a single label.
///
/// The label is converted as if it were a domain name of its own. In
/// particular, it may not be empty and the Bidi rule is applied only if the
/// label itself contains right-to-left characters.
///
/// If the label already is in the requested form, it is returned borrowed.
pub fn process_label(
    label: &str,
    direction: Direction,
    options: Options,
) -> Result<Cow<str>, LabelError> {
    let context = LabelContext {
        trailing: false,
        bidi_domain: label_is_bidi(label),
    };
    let res = match direction {
        Direction::ToAscii => to_ascii_label(label, context, options)?,
        Direction::ToUnicode => to_unicode_label(label, context, options)?,
    };
    if res == label {
        Ok(Cow::Borrowed(label))
    } else {
        Ok(Cow::Owned(res))
    }
}

/// Returns whether a label makes its domain name a Bidi domain name.
///
/// A-labels are looked at in their decoded form.
pub(crate) fn label_is_bidi(label: &str) -> bool {
    if has_ace_prefix(label) {
        let lower = label.to_ascii_lowercase();
        match decode_ace(&lower) {
            Ok(decoded) => is_bidi_label(&decoded),
            Err(_) => false,
        }
    } else {
        is_bidi_label(label)
    }
}

//------------ ToASCII -------------------------------------------------------

/// Converts a label into its ASCII form.
pub(crate) fn to_ascii_label(
    label: &str,
    context: LabelContext,
    options: Options,
) -> Result<String, LabelError> {
    let mapped = map_label(label, options);
    let label = normalize(&mapped);

    if has_ace_prefix(&label) {
        let lower = label.to_ascii_lowercase();
        let decoded = check_ace(&lower, context, options)?;
        let chars: Vec<char> = decoded.chars().collect();
        let encoded = punycode::encode_unbounded(&chars)?;
        if encoded != lower[ACE_PREFIX.len()..] {
            return Err(LabelError::RoundTrip);
        }
        trace!("Accepted A-label '{}'", lower);
        return Ok(lower);
    }

    validate_label(&label, context, options)?;
    if label.is_ascii() {
        check_length(&label, options)?;
        return Ok(label.into_owned());
    }

    let chars: Vec<char> = label.chars().collect();
    let encoded = if options.verifies_dns_length() {
        punycode::encode(&chars)?
    } else {
        punycode::encode_unbounded(&chars)?
    };
    if punycode::decode(&encoded)? != chars {
        return Err(LabelError::RoundTrip);
    }
    let mut res = String::with_capacity(ACE_PREFIX.len() + encoded.len());
    res.push_str(ACE_PREFIX);
    res.push_str(&encoded);
    trace!("Encoded label '{}' as '{}'", label, res);
    Ok(res)
}

//------------ ToUnicode -----------------------------------------------------

/// Converts a label into its Unicode form.
pub(crate) fn to_unicode_label(
    label: &str,
    context: LabelContext,
    options: Options,
) -> Result<String, LabelError> {
    if label.is_ascii() && !has_ace_prefix(label) {
        if label.is_empty() && !context.trailing {
            return Err(ValidationError::new(
                ValidationErrorKind::EmptyLabel,
                0,
                None,
            )
            .into());
        }
        return Ok(label.into());
    }

    let mapped = map_label(label, options);
    let label = normalize(&mapped);

    if has_ace_prefix(&label) {
        let lower = label.to_ascii_lowercase();
        let decoded = check_ace(&lower, context, options)?;
        trace!("Decoded label '{}' as '{}'", lower, decoded);
        return Ok(decoded);
    }

    validate_label(&label, context, options)?;
    Ok(label.into_owned())
}

//------------ Helpers -------------------------------------------------------

/// Applies the character mapping to a label.
fn map_label(label: &str, options: Options) -> Cow<str> {
    let unchanged = label.bytes().all(|ch| {
        ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == b'-'
    });
    if unchanged {
        return Cow::Borrowed(label);
    }
    let mut res = String::with_capacity(label.len());
    for ch in label.chars() {
        tables::map_char(ch, options.is_transitional(), &mut res);
    }
    Cow::Owned(res)
}

/// Decodes an A-label and checks that the result is a valid U-label.
///
/// The label must already be in lower case.
fn check_ace(
    lower: &str,
    context: LabelContext,
    options: Options,
) -> Result<String, LabelError> {
    check_length(lower, options)?;
    let decoded = decode_ace(lower)?;
    if !is_normalized(&decoded) {
        return Err(ValidationError::new(
            ValidationErrorKind::NotNormalized,
            0,
            None,
        )
        .into());
    }
    validate_label(&decoded, context, options)?;
    Ok(decoded)
}

/// Decodes the Punycode part of an A-label.
///
/// An A-label that decodes to nothing or to plain ASCII could never have
/// been produced by the encoder and is rejected.
fn decode_ace(label: &str) -> Result<String, PunycodeError> {
    let decoded = punycode::decode_to_string(&label[ACE_PREFIX.len()..])?;
    if decoded.is_ascii() {
        return Err(PunycodeError::BadInput);
    }
    Ok(decoded)
}

fn check_length(label: &str, options: Options) -> Result<(), PunycodeError> {
    if options.verifies_dns_length() && label.len() > MAX_LABEL_LEN {
        Err(PunycodeError::LabelTooLong)
    } else {
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn ascii(label: &str) -> Result<Cow<str>, LabelError> {
        process_label(label, Direction::ToAscii, Options::default())
    }

    fn unicode(label: &str) -> Result<Cow<str>, LabelError> {
        process_label(label, Direction::ToUnicode, Options::default())
    }

    fn validation_kind(
        res: Result<Cow<str>, LabelError>,
    ) -> Option<ValidationErrorKind> {
        res.err()?.validation().map(ValidationError::kind)
    }

    #[test]
    fn ascii_labels() {
        assert!(matches!(ascii("example"), Ok(Cow::Borrowed("example"))));
        assert_eq!(ascii("Example").unwrap(), "example");
        assert_eq!(ascii("\u{FF21}bc").unwrap(), "abc");
        assert_eq!(ascii("a\u{AD}b").unwrap(), "ab");
    }

    #[test]
    fn encode_labels() {
        assert_eq!(ascii("bücher").unwrap(), "xn--bcher-kva");
        assert_eq!(ascii("Bücher").unwrap(), "xn--bcher-kva");
        assert_eq!(ascii("bu\u{308}cher").unwrap(), "xn--bcher-kva");
        assert_eq!(ascii("faß").unwrap(), "xn--fa-hia");
        assert_eq!(
            process_label(
                "faß",
                Direction::ToAscii,
                Options::default().transitional(true)
            )
            .unwrap(),
            "fass"
        );
    }

    #[test]
    fn ace_labels() {
        assert!(matches!(
            ascii("xn--bcher-kva"),
            Ok(Cow::Borrowed("xn--bcher-kva"))
        ));
        assert_eq!(ascii("XN--BCHER-KVA").unwrap(), "xn--bcher-kva");
        assert_eq!(
            ascii("xn--zz_z").unwrap_err(),
            LabelError::Punycode(PunycodeError::InvalidDigit)
        );
        // Decodes to plain ASCII.
        assert_eq!(
            ascii("xn--abc-").unwrap_err(),
            LabelError::Punycode(PunycodeError::BadInput)
        );
        // Decodes to U+0080.
        assert_eq!(
            validation_kind(ascii("xn--a")),
            Some(ValidationErrorKind::Disallowed)
        );
        // Decomposed “bücher”.
        let decomposed = punycode::encode_str("bu\u{308}cher").unwrap();
        let mut label = String::from(ACE_PREFIX);
        label.push_str(&decomposed);
        assert_eq!(
            validation_kind(ascii(&label)),
            Some(ValidationErrorKind::NotNormalized)
        );
    }

    #[test]
    fn length() {
        let long: String = core::iter::repeat('a').take(64).collect();
        assert_eq!(
            ascii(&long).unwrap_err(),
            LabelError::Punycode(PunycodeError::LabelTooLong)
        );
        assert!(process_label(
            &long,
            Direction::ToAscii,
            Options::default().verify_dns_length(false)
        )
        .is_ok());
        let long: String = core::iter::repeat('ü').take(60).collect();
        assert_eq!(
            ascii(&long).unwrap_err(),
            LabelError::Punycode(PunycodeError::LabelTooLong)
        );
    }

    #[test]
    fn validation() {
        assert_eq!(
            validation_kind(ascii("a-")),
            Some(ValidationErrorKind::TrailingHyphen)
        );
        assert_eq!(
            validation_kind(ascii("a\u{2665}")),
            Some(ValidationErrorKind::Disallowed)
        );
        assert_eq!(
            validation_kind(ascii("")),
            Some(ValidationErrorKind::EmptyLabel)
        );
    }

    #[test]
    fn unicode_labels() {
        assert_eq!(unicode("xn--bcher-kva").unwrap(), "bücher");
        assert_eq!(unicode("XN--BCHER-KVA").unwrap(), "bücher");
        assert!(matches!(unicode("example"), Ok(Cow::Borrowed("example"))));
        assert!(matches!(unicode("EXAMPLE"), Ok(Cow::Borrowed("EXAMPLE"))));
        assert!(matches!(unicode("a_b"), Ok(Cow::Borrowed("a_b"))));
        assert_eq!(unicode("Bücher").unwrap(), "bücher");
        assert_eq!(
            unicode("xn--zz_z").unwrap_err(),
            LabelError::Punycode(PunycodeError::InvalidDigit)
        );
    }

    #[test]
    fn bidi_labels() {
        assert!(label_is_bidi("\u{5D8}\u{5E2}"));
        assert!(label_is_bidi("xn--deba0ad"));
        assert!(!label_is_bidi("xn--bcher-kva"));
        assert!(!label_is_bidi("xn--zz_z"));
        assert_eq!(
            ascii("\u{5D8}\u{5E2}\u{5E1}\u{5D8}").unwrap(),
            "xn--deba0ad"
        );
    }
}
