//! Various utility modules.

pub mod punycode;
