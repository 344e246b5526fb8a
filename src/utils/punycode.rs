//! Decoding and encoding of Punycode.
//!
//! Punycode is defined in [RFC 3492]. It is an instance of the more general
//! *Bootstring* algorithm that represents an arbitrary sequence of Unicode
//! code points using only the letters, digits, and hyphen of ASCII. It is
//! used by IDNA to store internationalized labels in the DNS as so-called
//! A-labels.
//!
//! The encoding copies all *basic* code points, i.e., those below 0x80,
//! literally, followed by a hyphen if there were any, and then appends a
//! sequence of generalized variable-length integers in base 36. Each of
//! these integers describes where to insert the next non-basic code point
//! and which one it is.
//!
//! The module provides the encoding and decoding functions in a few
//! flavours. [`encode`] and [`decode`] are the ones used for domain name
//! labels. They limit the encoded output to what fits into a label together
//! with the `xn--` prefix. [`encode_unbounded`] and [`display`] provide the
//! plain algorithm without that limit.
//!
//! All state of the algorithm, the current code point `n`, the insertion
//! index `i`, and the `bias`, lives in local variables of a single call.
//!
//! [RFC 3492]: https://tools.ietf.org/html/rfc3492

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

//------------ Constants -----------------------------------------------------

/// The Bootstring parameters for Punycode.
const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;

/// The delimiter between the basic code points and the encoded deltas.
const DELIMITER: char = '-';

/// The maximum length of an encoded label, including the ACE prefix.
pub const MAX_LABEL_LEN: usize = 63;

/// The length of the ACE prefix `xn--` that precedes an encoded label.
pub const ACE_PREFIX_LEN: usize = 4;

//------------ Convenience Functions -----------------------------------------

/// Encodes a sequence of code points as a domain name label.
///
/// This is [`encode_unbounded`] with the additional restriction that the
/// result together with the ACE prefix must fit into a label of at most 63
/// octets. If it doesn’t, [`PunycodeError::LabelTooLong`] is returned.
pub fn encode(input: &[char]) -> Result<String, PunycodeError> {
    let res = encode_unbounded(input)?;
    if res.len() + ACE_PREFIX_LEN > MAX_LABEL_LEN {
        return Err(PunycodeError::LabelTooLong);
    }
    Ok(res)
}

/// Encodes a string as a domain name label.
pub fn encode_str(input: &str) -> Result<String, PunycodeError> {
    let input: Vec<char> = input.chars().collect();
    encode(&input)
}

/// Encodes a sequence of code points without any length restrictions.
pub fn encode_unbounded(input: &[char]) -> Result<String, PunycodeError> {
    let mut res = String::with_capacity(input.len() * 2);
    display(input, &mut res)?;
    Ok(res)
}

/// Encodes a sequence of code points and writes it into a format stream.
///
/// Since the encoding can fail for reasons other than the target, the
/// function cannot return a `fmt::Result`. Errors from the target are
/// reported as [`PunycodeError::Write`].
pub fn display<W: fmt::Write>(
    input: &[char],
    target: &mut W,
) -> Result<(), PunycodeError> {
    // Handle the basic code points. They are copied as they are.
    let mut basic_len = 0u32;
    for &ch in input {
        if ch.is_ascii() {
            target.write_char(ch)?;
            basic_len += 1;
        }
    }
    let input_len = u32::try_from(input.len())
        .map_err(|_| PunycodeError::Overflow)?;
    if basic_len > 0 {
        target.write_char(DELIMITER)?;
    }

    let mut n = INITIAL_N;
    let mut delta = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut processed = basic_len;
    while processed < input_len {
        // All code points below n have been handled already. Find the
        // smallest one that is left.
        let min = match input
            .iter()
            .map(|&ch| u32::from(ch))
            .filter(|&ch| ch >= n)
            .min()
        {
            Some(min) => min,
            None => break,
        };

        // Advance the decoder’s state from <n, 0> to <min, 0>.
        delta = (min - n)
            .checked_mul(processed + 1)
            .and_then(|step| delta.checked_add(step))
            .ok_or(PunycodeError::Overflow)?;
        n = min;

        for &ch in input {
            let ch = u32::from(ch);
            if ch < n {
                delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
            }
            if ch == n {
                write_integer(delta, bias, target)?;
                bias = adapt(delta, processed + 1, processed == basic_len);
                delta = 0;
                processed += 1;
            }
        }
        delta = delta.checked_add(1).ok_or(PunycodeError::Overflow)?;
        n += 1;
    }
    Ok(())
}

/// Decodes a Punycode string into a sequence of code points.
///
/// Everything before the last hyphen is taken as basic code points and
/// must be ASCII. Everything after it is decoded as a sequence of deltas.
/// Letters of the delta section are accepted in either case.
pub fn decode(input: &str) -> Result<Vec<char>, PunycodeError> {
    let (basic, digits) = match input.rfind(DELIMITER) {
        Some(0) | None => ("", input),
        Some(pos) => (&input[..pos], &input[pos + 1..]),
    };
    if !basic.is_ascii() {
        return Err(PunycodeError::BadInput);
    }

    let mut output: Vec<char> = basic.chars().collect();
    let mut n = INITIAL_N;
    let mut i = 0u32;
    let mut bias = INITIAL_BIAS;
    let mut digits = digits.bytes();

    while let Some(first) = digits.next() {
        let old_i = i;
        let mut weight = 1u32;
        let mut k = BASE;
        let mut byte = first;

        // Decode one generalized variable-length integer and add it to i.
        loop {
            let digit = digit_value(byte)?;
            i = digit
                .checked_mul(weight)
                .and_then(|step| i.checked_add(step))
                .ok_or(PunycodeError::Overflow)?;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            weight = weight
                .checked_mul(BASE - t)
                .ok_or(PunycodeError::Overflow)?;
            k += BASE;
            byte = match digits.next() {
                Some(byte) => byte,
                None => return Err(PunycodeError::BadInput),
            };
        }

        let len = u32::try_from(output.len() + 1)
            .map_err(|_| PunycodeError::Overflow)?;
        bias = adapt(i - old_i, len, old_i == 0);

        // i wraps around from len to 0, incrementing n each time.
        n = n.checked_add(i / len).ok_or(PunycodeError::Overflow)?;
        i %= len;
        let ch = match char::from_u32(n) {
            Some(ch) => ch,
            None => return Err(PunycodeError::BadInput),
        };
        let pos = i as usize;
        if pos > output.len() {
            return Err(PunycodeError::BadInput);
        }
        output.insert(pos, ch);
        i += 1;
    }
    Ok(output)
}

/// Decodes a Punycode string and returns the result as a string.
pub fn decode_to_string(input: &str) -> Result<String, PunycodeError> {
    decode(input).map(|chars| chars.into_iter().collect())
}

//------------ Helpers -------------------------------------------------------

/// The bias adaptation function of RFC 3492, section 6.1.
fn adapt(delta: u32, num_points: u32, first_time: bool) -> u32 {
    let mut delta = if first_time { delta / DAMP } else { delta / 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (((BASE - T_MIN + 1) * delta) / (delta + SKEW))
}

/// Returns the threshold for the digit at position `k`.
fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

/// Writes `value` as a generalized variable-length integer.
fn write_integer<W: fmt::Write>(
    value: u32,
    bias: u32,
    target: &mut W,
) -> Result<(), PunycodeError> {
    let mut q = value;
    let mut k = BASE;
    loop {
        let t = threshold(k, bias);
        if q < t {
            break;
        }
        target.write_char(digit_char(t + (q - t) % (BASE - t)))?;
        q = (q - t) / (BASE - t);
        k += BASE;
    }
    target.write_char(digit_char(q))?;
    Ok(())
}

/// Returns the character for a digit value between 0 and 35.
fn digit_char(value: u32) -> char {
    ENCODE_ALPHABET[value as usize] as char
}

/// Returns the value of a digit character.
fn digit_value(byte: u8) -> Result<u32, PunycodeError> {
    match DECODE_ALPHABET.get(usize::from(byte)) {
        Some(&value) if value != 0xFF => Ok(u32::from(value)),
        _ => Err(PunycodeError::InvalidDigit),
    }
}

//============ Error Types ===================================================

//------------ PunycodeError -------------------------------------------------

/// An error happened while encoding or decoding Punycode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PunycodeError {
    /// An intermediate value exceeded the range of a 32 bit integer.
    Overflow,

    /// A character in the delta section is not a base 36 digit.
    InvalidDigit,

    /// The input is malformed.
    ///
    /// This happens if the basic code points contain non-ASCII characters,
    /// if the input ends in the middle of an integer, or if a decoded
    /// code point or insertion position is out of range.
    BadInput,

    /// The encoded label would be longer than 63 octets.
    LabelTooLong,

    /// Writing to the output target failed.
    Write,
}

//--- From

impl From<fmt::Error> for PunycodeError {
    fn from(_: fmt::Error) -> Self {
        PunycodeError::Write
    }
}

//--- Display and Error

impl fmt::Display for PunycodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PunycodeError::Overflow => f.write_str("punycode overflow"),
            PunycodeError::InvalidDigit => {
                f.write_str("invalid punycode digit")
            }
            PunycodeError::BadInput => f.write_str("malformed punycode"),
            PunycodeError::LabelTooLong => {
                f.write_str("encoded label longer than 63 octets")
            }
            PunycodeError::Write => f.write_str("failed to write output"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PunycodeError {}

//============ Constants =====================================================

/// The alphabet used by the encoder.
const ENCODE_ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// The alphabet used by the decoder.
///
/// This maps encoding characters into their values. A value of 0xFF stands
/// in for illegal characters. Upper and lower case letters have the same
/// value.
const DECODE_ALPHABET: [u8; 128] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x00 .. 0x07
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x08 .. 0x0F
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x10 .. 0x17
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x18 .. 0x1F
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x20 .. 0x27
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x28 .. 0x2F
    0x1A, 0x1B, 0x1C, 0x1D, 0x1E, 0x1F, 0x20, 0x21, // 0x30 .. 0x37
    0x22, 0x23, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x38 .. 0x3F
    0xFF, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, // 0x40 .. 0x47
    0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, // 0x48 .. 0x4F
    0x0F, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, // 0x50 .. 0x57
    0x17, 0x18, 0x19, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x58 .. 0x5F
    0xFF, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, // 0x60 .. 0x67
    0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, // 0x68 .. 0x6F
    0x0F, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, // 0x70 .. 0x77
    0x17, 0x18, 0x19, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // 0x78 .. 0x7F
];

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn encode_labels() {
        assert_eq!(encode_str("bücher").unwrap(), "bcher-kva");
        assert_eq!(encode_str("münchen").unwrap(), "mnchen-3ya");
        assert_eq!(encode_str("faß").unwrap(), "fa-hia");
        assert_eq!(encode_str("пример").unwrap(), "e1afmkfd");
        assert_eq!(encode_str("テスト").unwrap(), "zckzah");
        assert_eq!(encode_str("例え").unwrap(), "r8jz45g");
        assert_eq!(encode_str("中国").unwrap(), "fiqs8s");
    }

    #[test]
    fn encode_basic_only() {
        assert_eq!(encode_str("").unwrap(), "");
        assert_eq!(encode_str("abc").unwrap(), "abc-");
        assert_eq!(encode_str("-> $1.00 <-").unwrap(), "-> $1.00 <--");
    }

    #[test]
    fn decode_labels() {
        assert_eq!(decode_to_string("bcher-kva").unwrap(), "bücher");
        assert_eq!(decode_to_string("BCHER-KVA").unwrap(), "B\u{fc}CHER");
        assert_eq!(decode_to_string("zckzah").unwrap(), "テスト");
        assert_eq!(decode_to_string("a").unwrap(), "\u{80}");
        assert_eq!(decode_to_string("").unwrap(), "");
    }

    #[test]
    fn decode_errors() {
        assert_eq!(decode("zz_z"), Err(PunycodeError::InvalidDigit));
        assert_eq!(decode("bcher-kv!"), Err(PunycodeError::InvalidDigit));
        assert_eq!(decode("-abc"), Err(PunycodeError::InvalidDigit));
        assert_eq!(decode("b\u{fc}cher-kva"), Err(PunycodeError::BadInput));
        // The input ends in the middle of a delta.
        assert_eq!(decode("9"), Err(PunycodeError::BadInput));
        assert_eq!(decode("99999999999"), Err(PunycodeError::Overflow));
    }

    #[test]
    fn label_too_long() {
        let long = vec!['ü'; 60];
        assert_eq!(encode(&long), Err(PunycodeError::LabelTooLong));
        assert!(encode_unbounded(&long).is_ok());
    }

    #[test]
    fn encode_overflow() {
        let mut input = vec!['a'; 4000];
        input.push('\u{10FFFF}');
        assert_eq!(encode_unbounded(&input), Err(PunycodeError::Overflow));
    }

    #[test]
    fn round_trip() {
        for s in ["bücher", "ドメイン名例", "a-b-ü", "ÀÁÂÃÄÅ", "\u{10FFFF}x"] {
            let encoded = encode_unbounded(&chars(s)).unwrap();
            assert_eq!(decode(&encoded).unwrap(), chars(s));
        }
    }

    #[test]
    fn adapt_first_time() {
        assert_eq!(adapt(31525, 1, true), 25);
        assert_eq!(adapt(0, 1, false), 0);
    }
}
