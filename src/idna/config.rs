//! Conversion options.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

//------------ Options -------------------------------------------------------

/// Options for converting domain names.
///
/// The default value selects the strict IDNA2008 profile: STD3 rules are
/// applied, non-transitional processing is used, DNS length limits are
/// verified, and all hyphen, joiner, and Bidi checks are performed.
///
/// Options are changed through consuming setters:
///
/// ```
/// use domain_idna::Options;
///
/// let options = Options::default()
///     .use_std3_ascii_rules(false)
///     .transitional(true);
/// assert!(options.is_transitional());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
pub struct Options {
    /// Reject ASCII characters other than letters, digits, and hyphen.
    use_std3_ascii_rules: bool,

    /// Apply the legacy IDNA2003 mapping for deviation characters.
    transitional: bool,

    /// Enforce the 63 octet label and 253 octet domain name limits.
    verify_dns_length: bool,

    /// Reject labels with leading, trailing, or misplaced hyphens.
    check_hyphens: bool,

    /// Apply the Bidi rule of RFC 5893 to domain names with RTL labels.
    check_bidi: bool,

    /// Apply the contextual rules for ZERO WIDTH (NON-)JOINER.
    check_joiners: bool,
}

impl Options {
    /// Creates the default, strict options.
    pub const fn new() -> Self {
        Options {
            use_std3_ascii_rules: true,
            transitional: false,
            verify_dns_length: true,
            check_hyphens: true,
            check_bidi: true,
            check_joiners: true,
        }
    }

    /// Creates lenient options for displaying names.
    ///
    /// These options are intended for [`to_unicode`][super::to_unicode]
    /// when the result is only shown to a user. They allow all printable
    /// ASCII and skip the DNS length checks.
    pub const fn lenient() -> Self {
        Options {
            use_std3_ascii_rules: false,
            transitional: false,
            verify_dns_length: false,
            check_hyphens: false,
            check_bidi: true,
            check_joiners: true,
        }
    }

    /// Sets whether the STD3 ASCII rules are applied.
    pub fn use_std3_ascii_rules(mut self, value: bool) -> Self {
        self.use_std3_ascii_rules = value;
        self
    }

    /// Sets whether the deviation characters get their IDNA2003 mapping.
    pub fn transitional(mut self, value: bool) -> Self {
        self.transitional = value;
        self
    }

    /// Sets whether label and domain name lengths are checked.
    pub fn verify_dns_length(mut self, value: bool) -> Self {
        self.verify_dns_length = value;
        self
    }

    /// Sets whether the hyphen placement rules are applied.
    pub fn check_hyphens(mut self, value: bool) -> Self {
        self.check_hyphens = value;
        self
    }

    /// Sets whether the Bidi rule is applied.
    pub fn check_bidi(mut self, value: bool) -> Self {
        self.check_bidi = value;
        self
    }

    /// Sets whether the CONTEXTJ rules are applied.
    pub fn check_joiners(mut self, value: bool) -> Self {
        self.check_joiners = value;
        self
    }

    /// Returns whether the STD3 ASCII rules are applied.
    pub fn uses_std3_ascii_rules(self) -> bool {
        self.use_std3_ascii_rules
    }

    /// Returns whether transitional processing is used.
    pub fn is_transitional(self) -> bool {
        self.transitional
    }

    /// Returns whether the DNS length limits are enforced.
    pub fn verifies_dns_length(self) -> bool {
        self.verify_dns_length
    }

    /// Returns whether hyphen placement is checked.
    pub fn checks_hyphens(self) -> bool {
        self.check_hyphens
    }

    /// Returns whether the Bidi rule is checked.
    pub fn checks_bidi(self) -> bool {
        self.check_bidi
    }

    /// Returns whether the joiner context rules are checked.
    pub fn checks_joiners(self) -> bool {
        self.check_joiners
    }
}

//--- Default

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_strict() {
        let options = Options::default();
        assert!(options.uses_std3_ascii_rules());
        assert!(!options.is_transitional());
        assert!(options.verifies_dns_length());
        assert!(options.checks_hyphens());
        assert!(options.checks_bidi());
        assert!(options.checks_joiners());
    }

    #[test]
    fn setters() {
        let options = Options::new()
            .verify_dns_length(false)
            .check_hyphens(false);
        assert!(!options.verifies_dns_length());
        assert!(!options.checks_hyphens());
        assert!(options.uses_std3_ascii_rules());

        let options = Options::new()
            .use_std3_ascii_rules(false)
            .transitional(true)
            .check_bidi(false)
            .check_joiners(false);
        assert!(!options.uses_std3_ascii_rules());
        assert!(options.is_transitional());
        assert!(!options.checks_bidi());
        assert!(!options.checks_joiners());
        assert!(options.verifies_dns_length());
        assert!(options.checks_hyphens());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserialize_partial() {
        let options: Options = serde_json::from_str(
            r#"{ "transitional": true, "use-std3-ascii-rules": false }"#,
        )
        .unwrap();
        assert_eq!(
            options,
            Options::new().transitional(true).use_std3_ascii_rules(false)
        );
    }
}
