//! Code point classification.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.
//!
//! The classification follows the derived properties of [RFC 5892]. The
//! data lives in static range tables generated from the IDNA2008 and
//! [UTS #46] data of a fixed Unicode version by `tools/idna-data.py`. The
//! rules of appendix A of the RFC are kept here by hand. All of these are
//! immutable data compiled into the binary, so classification needs neither
//! initialization nor synchronization.
//!
//! All range tables are sorted and non-overlapping and are searched with a
//! binary search.
//!
//! [RFC 5892]: https://tools.ietf.org/html/rfc5892
//! [UTS #46]: https://www.unicode.org/reports/tr46/

use alloc::string::String;
use core::cmp::Ordering;
use core::iter;
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

//------------ Classification ------------------------------------------------

/// The IDNA class of a code point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Classification {
    /// The code point may appear in a label.
    Valid,

    /// The code point must never appear in a label.
    Disallowed,

    /// The code point may appear only if its context rule is satisfied.
    ContextualRequired(ContextRule),

    /// The code point is replaced by other code points before validation.
    ///
    /// The replacement may be empty, in which case the code point is
    /// simply dropped.
    Mapped,
}

//------------ ContextRule ---------------------------------------------------

/// The rule for a contextual code point.
///
/// These are the rules of appendix A of RFC 5892.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ContextRule {
    /// U+200C ZERO WIDTH NON-JOINER.
    ZeroWidthNonJoiner,

    /// U+200D ZERO WIDTH JOINER.
    ZeroWidthJoiner,

    /// U+00B7 MIDDLE DOT, only between two ‘l’.
    MiddleDot,

    /// U+0375 GREEK LOWER NUMERAL SIGN, only before a Greek character.
    GreekKeraia,

    /// U+05F3 and U+05F4, only after a Hebrew character.
    HebrewPunctuation,

    /// U+30FB KATAKANA MIDDLE DOT, only with Hiragana, Katakana, or Han.
    KatakanaMiddleDot,

    /// U+0660 to U+0669, not together with extended Arabic-Indic digits.
    ArabicIndicDigit,

    /// U+06F0 to U+06F9, not together with Arabic-Indic digits.
    ExtendedArabicIndicDigit,
}

impl ContextRule {
    /// Returns whether this is one of the CONTEXTJ rules for the joiners.
    pub fn is_joiner(self) -> bool {
        matches!(
            self,
            ContextRule::ZeroWidthNonJoiner | ContextRule::ZeroWidthJoiner
        )
    }
}

//------------ classify ------------------------------------------------------

/// Returns the class of a code point.
pub fn classify(ch: char) -> Classification {
    if let 'a'..='z' | '0'..='9' | '-' = ch {
        return Classification::Valid;
    }
    let cp = u32::from(ch);
    match lookup(DERIVED, cp) {
        Some(Derived::Valid) => Classification::Valid,
        Some(Derived::Contextual) => match lookup(CONTEXT_RULES, cp) {
            Some(rule) => Classification::ContextualRequired(rule),
            None => Classification::Disallowed,
        },
        Some(Derived::Mapped) | Some(Derived::Ignored) => {
            Classification::Mapped
        }
        None => Classification::Disallowed,
    }
}

/// Appends the mapping of a code point to `target`.
///
/// Code points that aren’t mapped are appended unchanged. Disallowed code
/// points are kept so that validation can report them.
///
/// With transitional processing, the deviation characters get their
/// IDNA2003 treatment: ß becomes “ss”, final sigma becomes sigma, and the
/// joiners are dropped.
pub(crate) fn map_char(ch: char, transitional: bool, target: &mut String) {
    if transitional {
        match ch {
            '\u{DF}' => {
                target.push_str("ss");
                return;
            }
            '\u{3C2}' => {
                target.push('\u{3C3}');
                return;
            }
            '\u{200C}' | '\u{200D}' => return,
            _ => {}
        }
    }
    match lookup(DERIVED, u32::from(ch)) {
        Some(Derived::Mapped) => target.extend(
            iter::once(ch).nfkc().flat_map(char::to_lowercase).nfkc(),
        ),
        Some(Derived::Ignored) => {}
        _ => target.push(ch),
    }
}

//------------ Derived -------------------------------------------------------

/// The derived property of a code point as kept in the tables.
///
/// Code points missing from the tables are disallowed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Derived {
    /// PVALID.
    Valid,

    /// CONTEXTJ or CONTEXTO.
    Contextual,

    /// Disallowed but mapped to something else.
    Mapped,

    /// Disallowed but mapped to nothing.
    Ignored,
}

//------------ Script and Joining Data ---------------------------------------

/// The joining type of a code point as used by the CONTEXTJ rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JoiningType {
    Dual,
    Right,
    Left,
    Causing,
    Transparent,
    NonJoining,
}

/// Returns the joining type of a code point.
pub(crate) fn joining_type(ch: char) -> JoiningType {
    lookup(JOINING_TYPES, u32::from(ch)).unwrap_or(JoiningType::NonJoining)
}

/// Returns whether a code point is a virama.
pub(crate) fn is_virama(ch: char) -> bool {
    canonical_combining_class(ch) == 9
}

pub(crate) fn is_greek(ch: char) -> bool {
    contains(GREEK, u32::from(ch))
}

pub(crate) fn is_hebrew(ch: char) -> bool {
    contains(HEBREW, u32::from(ch))
}

/// Returns whether a code point belongs to Hiragana, Katakana, or Han.
pub(crate) fn is_hiragana_katakana_han(ch: char) -> bool {
    contains(HIRAGANA_KATAKANA_HAN, u32::from(ch))
}

//------------ Helpers -------------------------------------------------------

fn search<T>(table: &[(u32, u32, T)], cp: u32) -> Result<usize, usize> {
    table.binary_search_by(|&(first, last, _)| {
        if cp < first {
            Ordering::Greater
        } else if cp > last {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
}

fn lookup<T: Copy>(table: &[(u32, u32, T)], cp: u32) -> Option<T> {
    search(table, cp).ok().map(|idx| table[idx].2)
}

fn contains(table: &[(u32, u32, ())], cp: u32) -> bool {
    search(table, cp).is_ok()
}

//============ Tables ========================================================

/// The rules of the contextual code points.
static CONTEXT_RULES: &[(u32, u32, ContextRule)] = &[
    (0x00B7, 0x00B7, ContextRule::MiddleDot),
    (0x0375, 0x0375, ContextRule::GreekKeraia),
    (0x05F3, 0x05F4, ContextRule::HebrewPunctuation),
    (0x0660, 0x0669, ContextRule::ArabicIndicDigit),
    (0x06F0, 0x06F9, ContextRule::ExtendedArabicIndicDigit),
    (0x200C, 0x200C, ContextRule::ZeroWidthNonJoiner),
    (0x200D, 0x200D, ContextRule::ZeroWidthJoiner),
    (0x30FB, 0x30FB, ContextRule::KatakanaMiddleDot),
];

include!("idna_table.rs");

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[test]
    fn tables_are_sorted() {
        fn check<T>(table: &[(u32, u32, T)]) {
            for window in table.windows(2) {
                assert!(window[0].0 <= window[0].1);
                assert!(window[0].1 < window[1].0);
            }
        }
        check(DERIVED);
        check(CONTEXT_RULES);
        check(JOINING_TYPES);
        check(GREEK);
        check(HEBREW);
        check(HIRAGANA_KATAKANA_HAN);
    }

    #[test]
    fn contextual_code_points_have_rules() {
        for &(first, last, derived) in DERIVED {
            if derived != Derived::Contextual {
                continue;
            }
            for cp in first..=last {
                assert!(lookup(CONTEXT_RULES, cp).is_some(), "{:04X}", cp);
            }
        }
    }

    #[test]
    fn ascii() {
        assert_eq!(classify('a'), Classification::Valid);
        assert_eq!(classify('7'), Classification::Valid);
        assert_eq!(classify('-'), Classification::Valid);
        assert_eq!(classify('A'), Classification::Mapped);
        assert_eq!(classify('_'), Classification::Disallowed);
        assert_eq!(classify(' '), Classification::Disallowed);
        assert_eq!(classify('.'), Classification::Disallowed);
        assert_eq!(classify('\0'), Classification::Disallowed);
    }

    #[rstest]
    #[case::latin_small('\u{FC}', Classification::Valid)]
    #[case::sharp_s('\u{DF}', Classification::Valid)]
    #[case::final_sigma('\u{3C2}', Classification::Valid)]
    #[case::katakana('\u{30C6}', Classification::Valid)]
    #[case::nonspacing_mark('\u{301}', Classification::Valid)]
    #[case::spacing_mark('\u{93E}', Classification::Valid)]
    #[case::modifier_letter('\u{2B0}', Classification::Mapped)]
    #[case::arabic_exception('\u{6FD}', Classification::Valid)]
    #[case::tibetan_exception('\u{F0B}', Classification::Valid)]
    #[case::ideographic_zero('\u{3007}', Classification::Valid)]
    #[case::han_ext_b('\u{20000}', Classification::Valid)]
    #[case::latin_capital('\u{DC}', Classification::Mapped)]
    #[case::fullwidth('\u{FF41}', Classification::Mapped)]
    #[case::roman_numeral('\u{2160}', Classification::Mapped)]
    #[case::no_break_space('\u{A0}', Classification::Mapped)]
    #[case::soft_hyphen('\u{AD}', Classification::Mapped)]
    #[case::variation_selector('\u{FE0F}', Classification::Mapped)]
    fn derived_properties(#[case] ch: char, #[case] class: Classification) {
        assert_eq!(classify(ch), class);
    }

    #[rstest]
    #[case::squared_latin_letter('\u{1F150}')]
    #[case::runic_letter_number('\u{16EE}')]
    #[case::enclosing_circle('\u{20DD}')]
    #[case::cuneiform_numeric_sign('\u{12400}')]
    #[case::hangzhou_numeral('\u{3021}')]
    #[case::kharoshthi_digit('\u{10A40}')]
    #[case::dingbat_digit('\u{2776}')]
    #[case::bengali_currency_numerator('\u{9F4}')]
    #[case::symbol('\u{2665}')]
    #[case::private_use('\u{E000}')]
    #[case::noncharacter('\u{FDD0}')]
    #[case::unassigned('\u{E0080}')]
    #[case::tatweel('\u{640}')]
    #[case::nko_lajanyalan('\u{7FA}')]
    #[case::hangul_tone_mark('\u{302E}')]
    #[case::old_hangul_jamo('\u{1100}')]
    #[case::combining_ignorable_block('\u{20D0}')]
    fn disallowed(#[case] ch: char) {
        assert_eq!(classify(ch), Classification::Disallowed);
    }

    #[test]
    fn contextual() {
        assert_eq!(
            classify('\u{200C}'),
            Classification::ContextualRequired(
                ContextRule::ZeroWidthNonJoiner
            )
        );
        assert_eq!(
            classify('\u{00B7}'),
            Classification::ContextualRequired(ContextRule::MiddleDot)
        );
        assert_eq!(
            classify('\u{0665}'),
            Classification::ContextualRequired(
                ContextRule::ArabicIndicDigit
            )
        );
    }

    #[test]
    fn mapping() {
        fn map(s: &str, transitional: bool) -> String {
            let mut res = String::new();
            for ch in s.chars() {
                map_char(ch, transitional, &mut res);
            }
            res
        }

        assert_eq!(map("Bücher", false), "bücher");
        assert_eq!(map("\u{FF42}\u{FF55}", false), "bu");
        assert_eq!(map("ＡＢＣ", false), "abc");
        assert_eq!(map("a\u{00AD}b", false), "ab");
        assert_eq!(map("a\u{FE0F}b", false), "ab");
        assert_eq!(map("\u{2160}", false), "i");
        assert_eq!(map("a\u{1F150}", false), "a\u{1F150}");
        assert_eq!(map("faß", false), "faß");
        assert_eq!(map("faß", true), "fass");
        assert_eq!(map("a\u{200D}b", true), "ab");
        assert_eq!(map("\u{3C2}", true), "\u{3C3}");
    }

    #[rstest]
    #[case::arabic_beh('\u{628}', JoiningType::Dual)]
    #[case::arabic_alef('\u{627}', JoiningType::Right)]
    #[case::arabic_fatha('\u{64E}', JoiningType::Transparent)]
    #[case::arabic_supplement('\u{750}', JoiningType::Dual)]
    #[case::arabic_extended_a('\u{8A0}', JoiningType::Dual)]
    #[case::syriac_beth('\u{712}', JoiningType::Dual)]
    #[case::syriac_alaph('\u{710}', JoiningType::Right)]
    #[case::nko_a('\u{7CA}', JoiningType::Dual)]
    #[case::mongolian_a('\u{1820}', JoiningType::Dual)]
    #[case::phags_pa_superfixed_ya('\u{A872}', JoiningType::Left)]
    #[case::zero_width_joiner('\u{200D}', JoiningType::Causing)]
    #[case::tatweel('\u{640}', JoiningType::Causing)]
    #[case::latin('a', JoiningType::NonJoining)]
    fn joining_types(#[case] ch: char, #[case] jt: JoiningType) {
        assert_eq!(joining_type(ch), jt);
    }

    #[test]
    fn virama() {
        assert!(is_virama('\u{094D}'));
        assert!(!is_virama('a'));
    }

    #[test]
    fn scripts() {
        assert!(is_greek('\u{3B1}'));
        assert!(!is_greek('a'));
        assert!(is_hebrew('\u{5D0}'));
        assert!(is_hiragana_katakana_han('\u{3042}'));
        assert!(is_hiragana_katakana_han('\u{30C6}'));
        assert!(is_hiragana_katakana_han('\u{4E00}'));
        assert!(!is_hiragana_katakana_han('\u{30FB}'));
    }
}
