//! Error types.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use crate::utils::punycode::PunycodeError;
use core::fmt;

//------------ EncodingError -------------------------------------------------

/// The input text was not a valid sequence of Unicode scalar values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodingError {
    /// The code point at `offset` is a surrogate.
    Surrogate { offset: usize, value: u32 },

    /// The code point at `offset` is beyond U+10FFFF.
    OutOfRange { offset: usize, value: u32 },

    /// The octets starting at `offset` are not valid UTF-8.
    InvalidUtf8 { offset: usize },
}

//--- Display and Error

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EncodingError::Surrogate { offset, value } => {
                write!(f, "unpaired surrogate 0x{:04X} at {}", value, offset)
            }
            EncodingError::OutOfRange { offset, value } => {
                write!(f, "invalid code point 0x{:X} at {}", value, offset)
            }
            EncodingError::InvalidUtf8 { offset } => {
                write!(f, "invalid UTF-8 at octet {}", offset)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodingError {}

//------------ ValidationErrorKind -------------------------------------------

/// The rule a label violated.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    /// The label contains a disallowed code point.
    Disallowed,

    /// The label contains a code point that should have been mapped.
    ///
    /// This happens for upper case letters and compatibility characters
    /// in labels that didn’t go through mapping, such as decoded A-labels.
    Unmapped,

    /// The label contains an ASCII character outside letters, digits, and
    /// hyphen while the STD3 rules are in force.
    Std3Disallowed,

    /// A joiner appears without the context it requires.
    ContextJ,

    /// A code point with a contextual rule appears in the wrong context.
    ContextO,

    /// The label starts with a combining mark.
    LeadingCombiningMark,

    /// The label starts with a hyphen.
    LeadingHyphen,

    /// The label ends with a hyphen.
    TrailingHyphen,

    /// The label has hyphens in both the third and fourth position.
    HyphenAt34,

    /// The label is empty but isn’t the trailing root label.
    EmptyLabel,

    /// The label violates the Bidi rule of RFC 5893.
    Bidi,

    /// A decoded label is not in normalization form C.
    NotNormalized,
}

impl ValidationErrorKind {
    fn as_str(self) -> &'static str {
        match self {
            ValidationErrorKind::Disallowed => "disallowed code point",
            ValidationErrorKind::Unmapped => "unmapped code point",
            ValidationErrorKind::Std3Disallowed => {
                "code point disallowed by STD3 rules"
            }
            ValidationErrorKind::ContextJ => "joiner in invalid context",
            ValidationErrorKind::ContextO => {
                "contextual code point in invalid context"
            }
            ValidationErrorKind::LeadingCombiningMark => {
                "label starts with combining mark"
            }
            ValidationErrorKind::LeadingHyphen => "label starts with hyphen",
            ValidationErrorKind::TrailingHyphen => "label ends with hyphen",
            ValidationErrorKind::HyphenAt34 => {
                "hyphens in third and fourth position"
            }
            ValidationErrorKind::EmptyLabel => "empty label",
            ValidationErrorKind::Bidi => "bidi rule violated",
            ValidationErrorKind::NotNormalized => "label is not in NFC",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//------------ ValidationError -----------------------------------------------

/// A label failed validation.
///
/// The error records which rule failed and the offset, counted in code
/// points, at which the violation was detected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    offset: usize,
    codepoint: Option<char>,
}

impl ValidationError {
    pub(crate) fn new(
        kind: ValidationErrorKind,
        offset: usize,
        codepoint: Option<char>,
    ) -> Self {
        ValidationError {
            kind,
            offset,
            codepoint,
        }
    }

    pub(crate) fn at(
        kind: ValidationErrorKind,
        offset: usize,
        codepoint: char,
    ) -> Self {
        Self::new(kind, offset, Some(codepoint))
    }

    /// Returns the rule that was violated.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Returns the code point offset of the violation within the label.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the offending code point if there is one.
    pub fn codepoint(&self) -> Option<char> {
        self.codepoint
    }
}

//--- Display and Error

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.codepoint {
            Some(ch) => write!(
                f,
                "{} U+{:04X} at {}",
                self.kind,
                u32::from(ch),
                self.offset
            ),
            None => write!(f, "{} at {}", self.kind, self.offset),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

//------------ LabelError ----------------------------------------------------

/// Converting a single label failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelError {
    /// The label violates the IDNA rules.
    Validation(ValidationError),

    /// Encoding or decoding Punycode failed.
    Punycode(PunycodeError),

    /// The label didn’t survive a round trip through Punycode.
    ///
    /// For A-labels given as input this means that they are not in the
    /// form the encoder produces.
    RoundTrip,
}

impl LabelError {
    /// Returns the validation error if this is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            LabelError::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the Punycode error if this is one.
    pub fn punycode(&self) -> Option<PunycodeError> {
        match *self {
            LabelError::Punycode(err) => Some(err),
            _ => None,
        }
    }
}

//--- From

impl From<ValidationError> for LabelError {
    fn from(err: ValidationError) -> Self {
        LabelError::Validation(err)
    }
}

impl From<PunycodeError> for LabelError {
    fn from(err: PunycodeError) -> Self {
        LabelError::Punycode(err)
    }
}

//--- Display and Error

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LabelError::Validation(ref err) => err.fmt(f),
            LabelError::Punycode(err) => err.fmt(f),
            LabelError::RoundTrip => {
                f.write_str("label does not survive punycode round trip")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LabelError {}

//------------ ErrorKind -----------------------------------------------------

/// The broad category of an [`IdnaError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    Encoding,
    Validation,
    Punycode,
    DomainTooLong,
    TooManyLabels,
}

//------------ IdnaError -----------------------------------------------------

/// Converting a domain name failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IdnaError {
    /// The input wasn’t valid Unicode.
    Encoding(EncodingError),

    /// The encoded domain name is longer than 253 octets.
    DomainTooLong,

    /// The domain name has more than 127 labels.
    TooManyLabels,

    /// The label at `index` couldn’t be converted.
    Label { index: usize, error: LabelError },
}

impl IdnaError {
    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        match *self {
            IdnaError::Encoding(_) => ErrorKind::Encoding,
            IdnaError::DomainTooLong => ErrorKind::DomainTooLong,
            IdnaError::TooManyLabels => ErrorKind::TooManyLabels,
            IdnaError::Label { error, .. } => match error {
                LabelError::Validation(_) => ErrorKind::Validation,
                LabelError::Punycode(_) | LabelError::RoundTrip => {
                    ErrorKind::Punycode
                }
            },
        }
    }

    /// Returns the index of the label that failed, if any.
    pub fn label_index(&self) -> Option<usize> {
        match *self {
            IdnaError::Label { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Returns the label error, if any.
    pub fn label_error(&self) -> Option<&LabelError> {
        match self {
            IdnaError::Label { error, .. } => Some(error),
            _ => None,
        }
    }
}

//--- From

impl From<EncodingError> for IdnaError {
    fn from(err: EncodingError) -> Self {
        IdnaError::Encoding(err)
    }
}

//--- Display and Error

impl fmt::Display for IdnaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            IdnaError::Encoding(ref err) => err.fmt(f),
            IdnaError::DomainTooLong => {
                f.write_str("domain name longer than 253 octets")
            }
            IdnaError::TooManyLabels => {
                f.write_str("domain name with more than 127 labels")
            }
            IdnaError::Label { index, ref error } => {
                write!(f, "label {}: {}", index, error)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IdnaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IdnaError::Encoding(err) => Some(err),
            IdnaError::Label { error, .. } => Some(error),
            _ => None,
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        let err = IdnaError::Label {
            index: 1,
            error: ValidationError::at(
                ValidationErrorKind::TrailingHyphen,
                1,
                '-',
            )
            .into(),
        };
        assert_eq!(
            err.to_string(),
            "label 1: label ends with hyphen U+002D at 1"
        );
        assert_eq!(
            IdnaError::DomainTooLong.to_string(),
            "domain name longer than 253 octets"
        );
    }

    #[test]
    fn accessors() {
        let err = IdnaError::Label {
            index: 3,
            error: PunycodeError::InvalidDigit.into(),
        };
        assert_eq!(err.kind(), ErrorKind::Punycode);
        assert_eq!(err.label_index(), Some(3));
        assert_eq!(
            err.label_error().and_then(LabelError::punycode),
            Some(PunycodeError::InvalidDigit)
        );
        assert_eq!(IdnaError::TooManyLabels.label_index(), None);
    }
}
