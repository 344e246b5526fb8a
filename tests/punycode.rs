//! Punycode against the sample strings of RFC 3492, section 7.1.

mod common;

use common::{init_logging, load_vectors, str_field};
use domain_idna::utils::punycode;

fn codepoints(vector: &serde_json::Value) -> Vec<char> {
    vector["codepoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|value| {
            let value = u32::try_from(value.as_u64().unwrap()).unwrap();
            char::from_u32(value).unwrap()
        })
        .collect()
}

#[test]
fn encode_samples() {
    init_logging();
    for vector in load_vectors("punycode") {
        let name = str_field(&vector, "name");
        assert_eq!(
            punycode::encode_unbounded(&codepoints(&vector)).unwrap(),
            str_field(&vector, "encoded"),
            "sample {}",
            name
        );
    }
}

#[test]
fn decode_samples() {
    init_logging();
    for vector in load_vectors("punycode") {
        let name = str_field(&vector, "name");
        assert_eq!(
            punycode::decode(str_field(&vector, "encoded")).unwrap(),
            codepoints(&vector),
            "sample {}",
            name
        );
    }
}

#[test]
fn decode_is_case_insensitive() {
    let lower = punycode::decode("ihqwcrb4cv8a8dqg056pqjye").unwrap();
    let upper = punycode::decode("IHQWCRB4CV8A8DQG056PQJYE").unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn display_into_formatter() {
    use std::fmt::Write;

    let mut target = String::from("xn--");
    punycode::display(&['b', 'ü', 'c', 'h', 'e', 'r'], &mut target).unwrap();
    write!(target, ".example").unwrap();
    assert_eq!(target, "xn--bcher-kva.example");
}
