//! Base58 and base58check encoding with a double Groestl-512 checksum.
//!
//! The checked form is `base58(version ‖ payload ‖ checksum)` where the
//! checksum is the first four bytes of [`double_groestl512`] over
//! `version ‖ payload`. This layer knows nothing about addresses or
//! networks; it is the generic transport the address layer builds on.

use thiserror::Error;

use crate::hash::double_groestl512;

/// The 58 characters in use: digits and letters minus the visually
/// ambiguous `0`, `O`, `I` and `l`.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Bytes of digest appended to the encoded body.
pub const CHECKSUM_LEN: usize = 4;

/// Codec failures. Both malformed-text shapes and checksum disagreement are
/// deterministic validation errors; none is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    /// A character outside the base58 alphabet.
    #[error("invalid base58 character: {0:?}")]
    InvalidCharacter(char),
    /// The decoded data cannot hold a version byte and a checksum.
    #[error("decoded data too short for a checksum: {0} bytes")]
    TooShort(usize),
    /// The recomputed checksum disagrees with the supplied one.
    #[error("checksum mismatch")]
    BadChecksum,
}

/// Encode raw bytes as base58. Each leading zero byte becomes one leading
/// `'1'` in the output.
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // Digits accumulate least-significant first; size 138% covers the
    // base-256 to base-58 expansion.
    let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 138 / 100 + 1);
    for &byte in &input[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut text = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        text.push('1');
    }
    for &digit in digits.iter().rev() {
        text.push(ALPHABET[digit as usize] as char);
    }
    text
}

/// Decode base58 text into raw bytes. Leading `'1'`s become leading zero
/// bytes, so `decode(encode(x)) == x` for all inputs.
pub fn decode(text: &str) -> Result<Vec<u8>, Base58Error> {
    let zeros = text.chars().take_while(|&c| c == '1').count();

    let mut bytes: Vec<u8> = Vec::new();
    for c in text.chars() {
        let index = u8::try_from(c)
            .ok()
            .and_then(|b| ALPHABET.iter().position(|&a| a == b))
            .ok_or(Base58Error::InvalidCharacter(c))? as u32;

        // Multiply the accumulated number by 58 and add the digit.
        let mut carry = index;
        for byte in bytes.iter_mut().rev() {
            let value = (*byte as u32) * 58 + carry;
            *byte = (value & 0xff) as u8;
            carry = value >> 8;
        }
        while carry > 0 {
            bytes.insert(0, (carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut result = vec![0u8; zeros];
    result.extend(bytes);
    Ok(result)
}

/// Encode a version byte and payload with an appended 4-byte checksum.
pub fn encode_check(version: u8, payload: &[u8]) -> String {
    let mut body = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    body.push(version);
    body.extend_from_slice(payload);
    let checksum = double_groestl512(&body);
    body.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&body)
}

/// Decode checked base58 text back into its version byte and payload.
///
/// Fails on characters outside the alphabet, on text too short to carry a
/// version and checksum, and on checksum disagreement.
pub fn decode_check(text: &str) -> Result<(u8, Vec<u8>), Base58Error> {
    let raw = decode(text)?;
    if raw.len() <= CHECKSUM_LEN {
        return Err(Base58Error::TooShort(raw.len()));
    }

    let (body, supplied) = raw.split_at(raw.len() - CHECKSUM_LEN);
    let computed = double_groestl512(body);
    if supplied != &computed[..CHECKSUM_LEN] {
        return Err(Base58Error::BadChecksum);
    }

    Ok((body[0], body[1..].to_vec()))
}
