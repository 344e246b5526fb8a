//! Validation of labels.
//!
//! This is a private module. Its public functions are re-exported by the
//! parent module.
//!
//! Validation applies the rules of [RFC 5891], section 4.2.3, and
//! [RFC 5892], appendix A, to a label in Unicode form. If the domain name
//! the label is part of contains right-to-left labels, the Bidi rule of
//! [RFC 5893] is checked as well.
//!
//! [RFC 5891]: https://tools.ietf.org/html/rfc5891
//! [RFC 5892]: https://tools.ietf.org/html/rfc5892
//! [RFC 5893]: https://tools.ietf.org/html/rfc5893

use super::config::Options;
use super::error::{ValidationError, ValidationErrorKind};
use super::tables::{self, Classification, ContextRule, JoiningType};
use alloc::vec::Vec;
use unicode_bidi::{bidi_class, BidiClass};
use unicode_normalization::char::is_combining_mark;

/// The ACE prefix that marks an A-label.
pub(crate) const ACE_PREFIX: &str = "xn--";

//------------ LabelContext --------------------------------------------------

/// Where a label sits within its domain name.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LabelContext {
    /// The label is the last of several labels.
    ///
    /// An empty label is allowed only here, where it stands for the root.
    pub trailing: bool,

    /// The domain name contains right-to-left labels.
    pub bidi_domain: bool,
}

//------------ validate ------------------------------------------------------

/// Validates a single label on its own.
///
/// The label is treated as a domain name of its own: it may not be empty
/// and it is subject to the Bidi rule only if it contains right-to-left
/// characters itself.
pub fn validate(label: &str, options: Options) -> Result<(), ValidationError> {
    let context = LabelContext {
        trailing: false,
        bidi_domain: is_bidi_label(label),
    };
    validate_label(label, context, options)
}

/// Validates a label in the context of its domain name.
pub(crate) fn validate_label(
    label: &str,
    context: LabelContext,
    options: Options,
) -> Result<(), ValidationError> {
    let chars: Vec<char> = label.chars().collect();
    check_codepoints(&chars, options)?;
    check_context(&chars, options)?;
    if options.checks_hyphens() {
        check_hyphens(label, &chars)?;
    } else if has_ace_prefix(label) {
        // A label looking like an A-label is never a valid U-label.
        return Err(ValidationError::at(
            ValidationErrorKind::HyphenAt34,
            2,
            '-',
        ));
    }
    if chars.is_empty() && !context.trailing {
        return Err(ValidationError::new(
            ValidationErrorKind::EmptyLabel,
            0,
            None,
        ));
    }
    if context.bidi_domain && options.checks_bidi() {
        check_bidi(&chars)?;
    }
    Ok(())
}

/// Returns whether the label starts with the ACE prefix in any case.
pub(crate) fn has_ace_prefix(label: &str) -> bool {
    label
        .as_bytes()
        .get(..ACE_PREFIX.len())
        .map_or(false, |prefix| {
            prefix.eq_ignore_ascii_case(ACE_PREFIX.as_bytes())
        })
}

/// Returns whether the label contains right-to-left characters.
pub(crate) fn is_bidi_label(label: &str) -> bool {
    label.chars().any(|ch| {
        !ch.is_ascii()
            && matches!(
                bidi_class(ch),
                BidiClass::R | BidiClass::AL | BidiClass::AN
            )
    })
}

//------------ Code Points ---------------------------------------------------

/// Rule 1: checks that all code points are allowed.
fn check_codepoints(
    chars: &[char],
    options: Options,
) -> Result<(), ValidationError> {
    for (offset, &ch) in chars.iter().enumerate() {
        let kind = if ch.is_ascii() {
            match check_ascii(ch, options) {
                Some(kind) => kind,
                None => continue,
            }
        } else {
            match tables::classify(ch) {
                Classification::Valid
                | Classification::ContextualRequired(_) => continue,
                Classification::Disallowed => ValidationErrorKind::Disallowed,
                Classification::Mapped => ValidationErrorKind::Unmapped,
            }
        };
        return Err(ValidationError::at(kind, offset, ch));
    }
    Ok(())
}

/// Checks an ASCII character.
///
/// Without the STD3 rules, all printable ASCII except the full stop is
/// allowed.
fn check_ascii(ch: char, options: Options) -> Option<ValidationErrorKind> {
    match ch {
        'a'..='z' | '0'..='9' | '-' => None,
        'A'..='Z' => Some(ValidationErrorKind::Unmapped),
        '.' => Some(ValidationErrorKind::Disallowed),
        ' '..='~' if options.uses_std3_ascii_rules() => {
            Some(ValidationErrorKind::Std3Disallowed)
        }
        ' '..='~' => None,
        _ => Some(ValidationErrorKind::Disallowed),
    }
}

//------------ Context Rules -------------------------------------------------

/// Rule 2: checks combining marks and contextual code points.
fn check_context(
    chars: &[char],
    options: Options,
) -> Result<(), ValidationError> {
    if let Some(&first) = chars.first() {
        if is_combining_mark(first) {
            return Err(ValidationError::at(
                ValidationErrorKind::LeadingCombiningMark,
                0,
                first,
            ));
        }
    }
    for (offset, &ch) in chars.iter().enumerate() {
        let rule = match tables::classify(ch) {
            Classification::ContextualRequired(rule) => rule,
            _ => continue,
        };
        if rule.is_joiner() && !options.checks_joiners() {
            continue;
        }
        if !context_holds(rule, chars, offset) {
            let kind = if rule.is_joiner() {
                ValidationErrorKind::ContextJ
            } else {
                ValidationErrorKind::ContextO
            };
            return Err(ValidationError::at(kind, offset, ch));
        }
    }
    Ok(())
}

/// Evaluates the rule for the code point at `pos`.
fn context_holds(rule: ContextRule, chars: &[char], pos: usize) -> bool {
    let before = pos.checked_sub(1).map(|idx| chars[idx]);
    let after = chars.get(pos + 1).copied();
    match rule {
        ContextRule::ZeroWidthNonJoiner => {
            before.map_or(false, tables::is_virama)
                || joins_around(chars, pos)
        }
        ContextRule::ZeroWidthJoiner => {
            before.map_or(false, tables::is_virama)
        }
        ContextRule::MiddleDot => before == Some('l') && after == Some('l'),
        ContextRule::GreekKeraia => after.map_or(false, tables::is_greek),
        ContextRule::HebrewPunctuation => {
            before.map_or(false, tables::is_hebrew)
        }
        ContextRule::KatakanaMiddleDot => {
            chars.iter().copied().any(tables::is_hiragana_katakana_han)
        }
        ContextRule::ArabicIndicDigit => {
            !chars.iter().any(|ch| ('\u{6F0}'..='\u{6F9}').contains(ch))
        }
        ContextRule::ExtendedArabicIndicDigit => {
            !chars.iter().any(|ch| ('\u{660}'..='\u{669}').contains(ch))
        }
    }
}

/// Checks the joining type context of a ZERO WIDTH NON-JOINER.
///
/// The non-joiner must be preceded by a left or dual joining character and
/// followed by a right or dual joining character, skipping transparent
/// characters on either side.
fn joins_around(chars: &[char], pos: usize) -> bool {
    let left = chars[..pos]
        .iter()
        .rev()
        .map(|&ch| tables::joining_type(ch))
        .find(|&jt| jt != JoiningType::Transparent);
    let right = chars[pos + 1..]
        .iter()
        .map(|&ch| tables::joining_type(ch))
        .find(|&jt| jt != JoiningType::Transparent);
    matches!(left, Some(JoiningType::Left | JoiningType::Dual))
        && matches!(right, Some(JoiningType::Right | JoiningType::Dual))
}

//------------ Hyphens -------------------------------------------------------

/// Rule 3: checks the placement of hyphens.
fn check_hyphens(label: &str, chars: &[char]) -> Result<(), ValidationError> {
    if chars.first() == Some(&'-') {
        return Err(ValidationError::at(
            ValidationErrorKind::LeadingHyphen,
            0,
            '-',
        ));
    }
    if chars.last() == Some(&'-') {
        return Err(ValidationError::at(
            ValidationErrorKind::TrailingHyphen,
            chars.len() - 1,
            '-',
        ));
    }
    if chars.get(2) == Some(&'-')
        && chars.get(3) == Some(&'-')
        && !has_ace_prefix(label)
    {
        return Err(ValidationError::at(
            ValidationErrorKind::HyphenAt34,
            2,
            '-',
        ));
    }
    Ok(())
}

//------------ Bidi Rule -----------------------------------------------------

/// Rule 5: checks the Bidi rule of RFC 5893, section 2.
fn check_bidi(chars: &[char]) -> Result<(), ValidationError> {
    let first = match chars.first() {
        Some(&first) => first,
        None => return Ok(()),
    };
    let rtl = match bidi_class(first) {
        BidiClass::L => false,
        BidiClass::R | BidiClass::AL => true,
        _ => return Err(bidi_error(0, first)),
    };

    let mut has_en = false;
    let mut has_an = false;
    for (offset, &ch) in chars.iter().enumerate() {
        let class = bidi_class(ch);
        let allowed = if rtl {
            has_en |= class == BidiClass::EN;
            has_an |= class == BidiClass::AN;
            matches!(
                class,
                BidiClass::R
                    | BidiClass::AL
                    | BidiClass::AN
                    | BidiClass::EN
                    | BidiClass::ES
                    | BidiClass::CS
                    | BidiClass::ET
                    | BidiClass::ON
                    | BidiClass::BN
                    | BidiClass::NSM
            )
        } else {
            matches!(
                class,
                BidiClass::L
                    | BidiClass::EN
                    | BidiClass::ES
                    | BidiClass::CS
                    | BidiClass::ET
                    | BidiClass::ON
                    | BidiClass::BN
                    | BidiClass::NSM
            )
        };
        if !allowed {
            return Err(bidi_error(offset, ch));
        }
        if has_en && has_an {
            return Err(bidi_error(offset, ch));
        }
    }

    // The last character that isn’t a non-spacing mark decides the end.
    let (offset, &last) = match chars
        .iter()
        .enumerate()
        .rev()
        .find(|&(_, &ch)| bidi_class(ch) != BidiClass::NSM)
    {
        Some(last) => last,
        None => return Ok(()),
    };
    let end_ok = if rtl {
        matches!(
            bidi_class(last),
            BidiClass::R | BidiClass::AL | BidiClass::EN | BidiClass::AN
        )
    } else {
        matches!(bidi_class(last), BidiClass::L | BidiClass::EN)
    };
    if end_ok {
        Ok(())
    } else {
        Err(bidi_error(offset, last))
    }
}

fn bidi_error(offset: usize, ch: char) -> ValidationError {
    ValidationError::at(ValidationErrorKind::Bidi, offset, ch)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn kind(label: &str) -> Option<ValidationErrorKind> {
        validate(label, Options::default()).err().map(|err| err.kind())
    }

    #[test]
    fn valid_labels() {
        assert_eq!(kind("example"), None);
        assert_eq!(kind("bücher"), None);
        assert_eq!(kind("xn--bcher-kva"), None);
        assert_eq!(kind("テスト"), None);
        assert_eq!(kind("a-b"), None);
    }

    #[test]
    fn codepoints() {
        let err = validate("a\u{2665}b", Options::default()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::Disallowed);
        assert_eq!(err.offset(), 1);
        assert_eq!(err.codepoint(), Some('\u{2665}'));

        assert_eq!(kind("Bücher"), Some(ValidationErrorKind::Unmapped));
        assert_eq!(kind("a_b"), Some(ValidationErrorKind::Std3Disallowed));
        assert_eq!(
            validate("a_b", Options::default().use_std3_ascii_rules(false)),
            Ok(())
        );
        assert_eq!(kind("a\tb"), Some(ValidationErrorKind::Disallowed));
        // Nl, No and Me code points.
        for label in ["a\u{16EE}", "a\u{10A40}", "a\u{20DD}"] {
            assert_eq!(kind(label), Some(ValidationErrorKind::Disallowed));
        }
    }

    #[test]
    fn hyphens() {
        assert_eq!(kind("-ab"), Some(ValidationErrorKind::LeadingHyphen));
        assert_eq!(kind("ab-"), Some(ValidationErrorKind::TrailingHyphen));
        assert_eq!(kind("ab--c"), Some(ValidationErrorKind::HyphenAt34));
        assert_eq!(kind("a--bc"), None);
        let lax = Options::default().check_hyphens(false);
        assert_eq!(validate("-ab-", lax), Ok(()));
        assert_eq!(validate("ab--c", lax), Ok(()));
    }

    #[test]
    fn empty() {
        assert_eq!(kind(""), Some(ValidationErrorKind::EmptyLabel));
        let trailing = LabelContext {
            trailing: true,
            bidi_domain: false,
        };
        assert_eq!(validate_label("", trailing, Options::default()), Ok(()));
    }

    #[test]
    fn combining_mark() {
        assert_eq!(
            kind("\u{301}a"),
            Some(ValidationErrorKind::LeadingCombiningMark)
        );
        assert_eq!(kind("a\u{301}"), None);
    }

    #[test]
    fn context_j() {
        assert_eq!(kind("a\u{200D}b"), Some(ValidationErrorKind::ContextJ));
        assert_eq!(kind("a\u{200C}b"), Some(ValidationErrorKind::ContextJ));
        // After a virama.
        assert_eq!(kind("\u{915}\u{94D}\u{200D}\u{937}"), None);
        assert_eq!(kind("\u{915}\u{94D}\u{200C}\u{937}"), None);
        // Between dual joining Arabic letters.
        assert_eq!(kind("\u{628}\u{200C}\u{628}"), None);
        // Other joining scripts and transparent marks in between.
        assert_eq!(kind("\u{712}\u{200C}\u{712}"), None);
        assert_eq!(kind("\u{7CA}\u{200C}\u{7CA}"), None);
        assert_eq!(kind("\u{1820}\u{200C}\u{1820}"), None);
        assert_eq!(kind("\u{8A0}\u{200C}\u{6EE}\u{6FA}"), None);
        assert_eq!(kind("\u{628}\u{64E}\u{200C}\u{64E}\u{628}"), None);
        // A right joining letter cannot join to the left.
        assert_eq!(
            kind("\u{627}\u{200C}\u{628}"),
            Some(ValidationErrorKind::ContextJ)
        );
        let lax = Options::default().check_joiners(false);
        assert_eq!(validate("a\u{200D}b", lax), Ok(()));
    }

    #[test]
    fn context_o() {
        assert_eq!(kind("l\u{B7}l"), None);
        assert_eq!(kind("a\u{B7}b"), Some(ValidationErrorKind::ContextO));
        assert_eq!(kind("\u{375}\u{3B1}"), None);
        assert_eq!(kind("a\u{375}b"), Some(ValidationErrorKind::ContextO));
        assert_eq!(kind("\u{5D0}\u{5F3}"), None);
        assert_eq!(kind("a\u{5F3}"), Some(ValidationErrorKind::ContextO));
        assert_eq!(kind("テ\u{30FB}スト"), None);
        assert_eq!(kind("a\u{30FB}b"), Some(ValidationErrorKind::ContextO));
        assert_eq!(
            kind("\u{661}\u{6F1}"),
            Some(ValidationErrorKind::ContextO)
        );
    }

    #[test]
    fn bidi() {
        assert_eq!(kind("\u{5D0}\u{5D1}"), None);
        assert_eq!(kind("\u{627}\u{644}1"), None);
        // Right-to-left label starting with a digit.
        assert_eq!(kind("1\u{5D0}"), Some(ValidationErrorKind::Bidi));
        // Left-to-right character in a right-to-left label.
        assert_eq!(kind("\u{5D0}a"), Some(ValidationErrorKind::Bidi));
        // Plain labels are checked when part of a Bidi domain.
        let context = LabelContext {
            trailing: false,
            bidi_domain: true,
        };
        assert_eq!(
            validate_label("1a", context, Options::default()),
            Err(ValidationError::at(ValidationErrorKind::Bidi, 0, '1'))
        );
        assert_eq!(validate_label("a1", context, Options::default()), Ok(()));
    }

    #[test]
    fn ace_prefix() {
        assert!(has_ace_prefix("xn--abc"));
        assert!(has_ace_prefix("XN--abc"));
        assert!(!has_ace_prefix("xn-"));
        assert!(!has_ace_prefix("ü-xn--"));
    }
}
