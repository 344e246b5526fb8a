//! Internationalized domain names.
//!
//! This module converts domain names between their Unicode form, such as
//! `bücher.example`, and their ASCII-compatible encoding, such as
//! `xn--bcher-kva.example`, following the IDNA2008 protocol of
//! [RFC 5891] with the mapping step of [UTS #46].
//!
//! The two central functions are [`to_ascii`] and [`to_unicode`]. The first
//! one is strict: it fails on the first label that cannot be converted and
//! is intended for producing names that go on the wire. The second one is
//! meant for displaying names and never fails. Instead, labels that cannot
//! be converted are kept as is and an error is reported for each of them
//! next to the result.
//!
//! Both functions take [`Options`] that select the processing profile. The
//! default is the strict IDNA2008 profile.
//!
//! Individual labels can be converted through [`process_label`] and checked
//! through [`validate`]. The Punycode codec used for A-labels lives in
//! [`utils::punycode`][crate::utils::punycode].
//!
//! [RFC 5891]: https://tools.ietf.org/html/rfc5891
//! [UTS #46]: https://www.unicode.org/reports/tr46/

pub use self::config::Options;
pub use self::domain::{
    to_ascii, to_ascii_ucs4, to_ascii_utf8, to_unicode, to_unicode_utf8,
    MAX_DOMAIN_LEN, MAX_LABELS,
};
pub use self::error::{
    EncodingError, ErrorKind, IdnaError, LabelError, ValidationError,
    ValidationErrorKind,
};
pub use self::label::{process_label, Direction};
pub use self::normalize::{
    decode_utf8, is_normalized, normalize, normalize_codepoints,
};
pub use self::tables::{classify, Classification, ContextRule, TABLE_VERSION};
pub use self::validate::validate;

mod config;
mod domain;
mod error;
mod label;
mod normalize;
mod tables;
mod validate;
