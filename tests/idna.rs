//! Conversion of domain names.

mod common;

use std::thread;

use common::{init_logging, load_vectors, str_field};
use domain_idna::idna::{
    to_ascii_ucs4, EncodingError, ValidationError, ValidationErrorKind,
};
use domain_idna::utils::punycode::PunycodeError;
use domain_idna::{
    process_label, to_ascii, to_unicode, Direction, ErrorKind, IdnaError,
    LabelError, Options,
};
use rstest::rstest;

fn strict() -> Options {
    Options::default()
}

fn validation_kind(err: &IdnaError) -> Option<ValidationErrorKind> {
    err.label_error()
        .and_then(LabelError::validation)
        .map(ValidationError::kind)
}

//------------ to_ascii ------------------------------------------------------

#[rstest]
#[case("bücher.example", "xn--bcher-kva.example")]
#[case("xn--bcher-kva.example", "xn--bcher-kva.example")]
#[case("XN--BCHER-KVA.example", "xn--bcher-kva.example")]
#[case("Bücher.Example", "xn--bcher-kva.example")]
#[case("ｂｕｃｈｅｒ.example", "bucher.example")]
#[case("bücher\u{3002}example", "xn--bcher-kva.example")]
#[case("bücher\u{FF0E}example\u{FF61}", "xn--bcher-kva.example.")]
#[case("faß.de", "xn--fa-hia.de")]
#[case("col\u{B7}legi.cat", "xn--collegi-xma.cat")]
#[case("テ\u{30FB}スト.jp", "xn--zckzah6r.jp")]
#[case("\u{915}\u{94D}\u{200D}\u{937}.in", "xn--11b2ezcw70k.in")]
#[case("example.com.", "example.com.")]
fn to_ascii_valid(#[case] input: &str, #[case] expected: &str) {
    init_logging();
    assert_eq!(to_ascii(input, strict()).unwrap(), expected);
}

#[rstest]
#[case::syriac("\u{712}\u{200C}\u{712}", "xn--cnba592q")]
#[case::nko("\u{7CA}\u{200C}\u{7CA}", "xn--lsba347p")]
#[case::mongolian("\u{1820}\u{200C}\u{1820}", "xn--26ea791d")]
#[case::arabic_supplement("\u{750}\u{200C}\u{750}", "xn--3oba901q")]
#[case::transparent_mark("\u{628}\u{64E}\u{200C}\u{628}", "xn--ngba7iz95i")]
fn to_ascii_joining_scripts(#[case] input: &str, #[case] expected: &str) {
    init_logging();
    assert_eq!(to_ascii(input, strict()).unwrap(), expected);
}

#[rstest]
#[case::squared_latin_letter("a\u{1F150}")]
#[case::runic_letter_number("a\u{16EE}")]
#[case::enclosing_circle("a\u{20DD}")]
#[case::cuneiform_numeric_sign("a\u{12400}")]
#[case::hangzhou_numeral("a\u{3021}")]
#[case::kharoshthi_digit("a\u{10A40}")]
fn to_ascii_disallowed_categories(#[case] input: &str) {
    init_logging();
    let err = to_ascii(input, strict()).unwrap_err();
    assert_eq!(err.label_index(), Some(0));
    assert_eq!(
        validation_kind(&err),
        Some(ValidationErrorKind::Disallowed)
    );
}

#[rstest]
#[case("a-.example", 0, ValidationErrorKind::TrailingHyphen)]
#[case("-a.example", 0, ValidationErrorKind::LeadingHyphen)]
#[case("ab--c.example", 0, ValidationErrorKind::HyphenAt34)]
#[case("a_b.example", 0, ValidationErrorKind::Std3Disallowed)]
#[case("example.\u{2665}", 1, ValidationErrorKind::Disallowed)]
#[case("\u{301}a.example", 0, ValidationErrorKind::LeadingCombiningMark)]
#[case("a\u{200D}b.example", 0, ValidationErrorKind::ContextJ)]
#[case("a\u{B7}b.example", 0, ValidationErrorKind::ContextO)]
#[case("\u{661}\u{6F1}.example", 0, ValidationErrorKind::ContextO)]
#[case("", 0, ValidationErrorKind::EmptyLabel)]
#[case("a..example", 1, ValidationErrorKind::EmptyLabel)]
#[case("example.xn--a", 1, ValidationErrorKind::Disallowed)]
#[case("\u{5D0}.1a", 1, ValidationErrorKind::Bidi)]
fn to_ascii_invalid(
    #[case] input: &str,
    #[case] index: usize,
    #[case] kind: ValidationErrorKind,
) {
    init_logging();
    let err = to_ascii(input, strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.label_index(), Some(index));
    assert_eq!(validation_kind(&err), Some(kind));
}

#[rstest]
#[case("xn--zz_z.example", PunycodeError::InvalidDigit)]
#[case("xn--abc-.example", PunycodeError::BadInput)]
#[case("xn--.example", PunycodeError::BadInput)]
fn to_ascii_bad_punycode(
    #[case] input: &str,
    #[case] expected: PunycodeError,
) {
    let err = to_ascii(input, strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Punycode);
    assert_eq!(
        err.label_error().and_then(LabelError::punycode),
        Some(expected)
    );
}

#[test]
fn lenient_options() {
    let lax = Options::lenient();
    assert_eq!(to_ascii("a_b.example", lax).unwrap(), "a_b.example");
    assert_eq!(to_ascii("-a-.example", lax).unwrap(), "-a-.example");
    assert_eq!(
        to_ascii("faß.de", strict().transitional(true)).unwrap(),
        "fass.de"
    );
    assert_eq!(
        to_ascii("a\u{200D}b", strict().check_joiners(false)).unwrap(),
        "xn--ab-m1t"
    );
}

//------------ Length Limits -------------------------------------------------

#[test]
fn label_too_long() {
    let label = "a".repeat(63);
    assert!(to_ascii(&label, strict()).is_ok());

    let label = "a".repeat(64);
    let err = to_ascii(&label, strict()).unwrap_err();
    assert_eq!(
        err.label_error().and_then(LabelError::punycode),
        Some(PunycodeError::LabelTooLong)
    );
    assert!(to_ascii(&label, strict().verify_dns_length(false)).is_ok());
}

#[test]
fn domain_too_long() {
    let label = "a".repeat(63);
    let domain = [label.as_str(); 4].join(".");
    assert_eq!(to_ascii(&domain, strict()), Err(IdnaError::DomainTooLong));
    assert!(to_ascii(&domain, strict().verify_dns_length(false)).is_ok());

    // 253 octets plus the trailing dot are fine.
    let last = "a".repeat(61);
    let domain = format!("{}.{}.{}.{}.", label, label, label, last);
    assert_eq!(domain.len(), 254);
    assert!(to_ascii(&domain, strict()).is_ok());
}

#[test]
fn too_many_labels() {
    let domain = ["a"; 128].join(".");
    assert_eq!(to_ascii(&domain, strict()), Err(IdnaError::TooManyLabels));

    let domain = ["a"; 127].join(".") + ".";
    assert!(to_ascii(&domain, strict()).is_ok());
}

//------------ to_unicode ----------------------------------------------------

#[test]
fn to_unicode_valid() {
    init_logging();
    let (name, errors) = to_unicode("xn--bcher-kva.example", strict());
    assert_eq!(name, "bücher.example");
    assert!(errors.is_empty());

    let (name, errors) = to_unicode("XN--BCHER-KVA.Example.", strict());
    assert_eq!(name, "bücher.Example.");
    assert!(errors.is_empty());

    let (name, errors) = to_unicode("Example.COM", strict());
    assert_eq!(name, "Example.COM");
    assert!(errors.is_empty());
}

#[test]
fn to_unicode_keeps_bad_labels() {
    init_logging();
    let (name, errors) = to_unicode("xn--zz_z.example", strict());
    assert_eq!(name, "xn--zz_z.example");
    assert_eq!(
        errors,
        [(0, LabelError::Punycode(PunycodeError::InvalidDigit))]
    );

    let (name, errors) =
        to_unicode("xn--a.xn--bcher-kva.xn--abc-", strict());
    assert_eq!(name, "xn--a.bücher.xn--abc-");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].0, 0);
    assert_eq!(
        errors[1],
        (2, LabelError::Punycode(PunycodeError::BadInput))
    );
}

#[test]
fn to_unicode_never_fails_on_length() {
    let domain = ["a"; 200].join(".");
    let (name, errors) = to_unicode(&domain, strict());
    assert_eq!(name, domain);
    assert!(errors.is_empty());
}

//------------ Test Vectors --------------------------------------------------

#[test]
fn vectors_to_ascii() {
    init_logging();
    for vector in load_vectors("to_ascii") {
        let unicode = str_field(&vector, "unicode");
        let ascii = str_field(&vector, "ascii");
        assert_eq!(to_ascii(unicode, strict()).unwrap(), ascii);
        assert_eq!(to_ascii(ascii, strict()).unwrap(), ascii);
        let (name, errors) = to_unicode(ascii, strict());
        assert_eq!(name, unicode);
        assert!(errors.is_empty(), "{}: {:?}", ascii, errors);
    }
}

#[test]
fn vectors_invalid() {
    init_logging();
    for vector in load_vectors("invalid") {
        let input = str_field(&vector, "input");
        let err = to_ascii(input, strict()).unwrap_err();
        assert_eq!(
            err.label_index(),
            vector["index"].as_u64().map(|index| index as usize),
            "{}",
            input
        );
        let kind = match str_field(&vector, "kind") {
            "Validation" => ErrorKind::Validation,
            "Punycode" => ErrorKind::Punycode,
            other => panic!("unknown error kind {}", other),
        };
        assert_eq!(err.kind(), kind, "{}", input);
    }
}

//------------ Properties ----------------------------------------------------

#[rstest]
#[case("bücher")]
#[case("пример")]
#[case("中国")]
#[case("ドメイン名例")]
#[case("δοκιμή")]
#[case("bu\u{308}cher")]
fn round_trip(#[case] label: &str) {
    let ascii = to_ascii(label, strict()).unwrap();
    let (unicode, errors) = to_unicode(&ascii, strict());
    assert!(errors.is_empty());
    assert_eq!(unicode, domain_idna::idna::normalize(label));

    // Converting the result again doesn’t change it.
    assert_eq!(to_ascii(&ascii, strict()).unwrap(), ascii);
    assert_eq!(to_ascii(&unicode, strict()).unwrap(), ascii);
}

#[test]
fn deterministic() {
    let input = "Bücher.xn--zz_z.テスト";
    assert_eq!(to_ascii(input, strict()), to_ascii(input, strict()));
    assert_eq!(to_unicode(input, strict()), to_unicode(input, strict()));
}

#[test]
fn concurrent_calls() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..100 {
                    assert_eq!(
                        to_ascii("bücher.example", Options::default())
                            .unwrap(),
                        "xn--bcher-kva.example"
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

//------------ Labels and Encodings ------------------------------------------

#[test]
fn single_labels() {
    assert_eq!(
        process_label("Bücher", Direction::ToAscii, strict()).unwrap(),
        "xn--bcher-kva"
    );
    assert_eq!(
        process_label("xn--bcher-kva", Direction::ToUnicode, strict())
            .unwrap(),
        "bücher"
    );
    assert!(process_label("", Direction::ToAscii, strict()).is_err());
}

#[test]
fn ucs4_input() {
    assert_eq!(
        to_ascii_ucs4(&[0xDFFF], strict()),
        Err(IdnaError::Encoding(EncodingError::Surrogate {
            offset: 0,
            value: 0xDFFF
        }))
    );
    let domain: Vec<u32> = "bücher.example".chars().map(u32::from).collect();
    assert_eq!(
        to_ascii_ucs4(&domain, strict()).unwrap(),
        "xn--bcher-kva.example"
    );
}
