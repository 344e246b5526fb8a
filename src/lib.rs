//! Internationalized domain names for Rust.
//!
//! This crate converts domain names between the Unicode form users read and
//! write and the ASCII-compatible encoding that is stored in the DNS. It
//! implements the IDNA2008 protocol defined in [RFC 5890] through
//! [RFC 5893] together with the Punycode encoding of [RFC 3492].
//!
//! ```
//! use domain_idna::{to_ascii, to_unicode, Options};
//!
//! let ascii = to_ascii("bücher.example", Options::default()).unwrap();
//! assert_eq!(ascii, "xn--bcher-kva.example");
//!
//! let (unicode, errors) = to_unicode(&ascii, Options::default());
//! assert_eq!(unicode, "bücher.example");
//! assert!(errors.is_empty());
//! ```
//!
//! # Modules
//!
//! * [idna] contains the conversion of domain names and labels, the
//!   validation rules, and the [`Options`] selecting the processing
//!   profile, and
//! * [utils] contains the Punycode codec.
//!
//! The most important items of [idna] are re-exported at the crate root.
//!
//! # Features
//!
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default. Without it, the crate only needs `alloc`.
//! * `serde`: enables serialization and deserialization of [`Options`] via
//!   [serde](https://serde.rs/), so they can be part of an application’s
//!   configuration.
//!
//! # Logging
//!
//! The crate reports the conversion of labels through the [tracing]
//! crate: rejected labels at debug level, everything else at trace level.
//! No subscriber is installed by the crate itself.
//!
//! [RFC 3492]: https://tools.ietf.org/html/rfc3492
//! [RFC 5890]: https://tools.ietf.org/html/rfc5890
//! [RFC 5893]: https://tools.ietf.org/html/rfc5893
//! [tracing]: https://docs.rs/tracing/

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(any(feature = "std"))]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

pub mod idna;
pub mod utils;

pub use self::idna::{
    process_label, to_ascii, to_unicode, Direction, ErrorKind, IdnaError,
    LabelError, Options,
};
