//! Arbitrary-radix conversion between bytes and alphabet digits.
//!
//! The input bytes are read as one big-endian unsigned integer and rewritten
//! in the alphabet's base. Leading zero bytes carry no positional weight, so
//! each one is written as a run of `leader_width` leader characters instead.

use crate::core::alphabet::CustomAlphabet;

use super::errors::CodecError;

const HEX_LOWER: &str = "0123456789abcdef";
const HEX_UPPER: &str = "0123456789ABCDEF";

pub fn encode(data: &[u8], alphabet: &CustomAlphabet, leader_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let base = alphabet.base();

    // Little-endian digits of the number read so far
    let mut digits: Vec<usize> = vec![0];
    for &byte in data {
        let mut carry = byte as usize;
        for digit in digits.iter_mut() {
            carry += *digit << 8;
            *digit = carry % base;
            carry /= base;
        }
        while carry > 0 {
            digits.push(carry % base);
            carry /= base;
        }
    }

    // An all-zero number is expressed entirely by leaders
    if digits == [0] {
        digits.clear();
    }

    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();
    // Keep multi-character leader groups aligned, e.g. hex byte pairs
    let alignment = (leader_width - digits.len() % leader_width) % leader_width;

    let leader = alphabet.leader();
    let mut result = String::with_capacity(leading_zeros * leader_width + alignment + digits.len());
    for _ in 0..leading_zeros * leader_width + alignment {
        result.push(leader);
    }
    for &digit in digits.iter().rev() {
        result.push(
            alphabet
                .encode_digit(digit)
                .expect("radix digits are below the alphabet base"),
        );
    }

    result
}

pub fn decode(
    encoded: &str,
    alphabet: &CustomAlphabet,
    leader_width: usize,
) -> Result<Vec<u8>, CodecError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let base = alphabet.base();
    let chars: Vec<char> = encoded.chars().collect();

    // Little-endian bytes of the number read so far
    let mut bytes: Vec<u8> = vec![0];
    for (position, &c) in chars.iter().enumerate() {
        let mut carry = alphabet
            .decode_char(c)
            .ok_or(CodecError::InvalidCharacter { char: c, position })?;

        for byte in bytes.iter_mut() {
            carry += *byte as usize * base;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    // The accumulator already holds one zero byte, so a leader group only
    // counts while more characters follow it
    let leader = alphabet.leader();
    let leading_zeros = chars
        .chunks_exact(leader_width)
        .enumerate()
        .take_while(|(i, group)| {
            chars.len() > (i + 1) * leader_width && group.iter().all(|&c| c == leader)
        })
        .count();
    bytes.resize(bytes.len() + leading_zeros, 0);

    bytes.reverse();
    Ok(bytes)
}

/// Hex encoding by direct nibble lookup.
///
/// Produces exactly what [`encode`] produces for a base16 alphabet with a
/// leader width of two.
pub fn encode_hex(data: &[u8], uppercase: bool) -> String {
    if uppercase {
        hex::encode_upper(data)
    } else {
        hex::encode(data)
    }
}

/// Hex decoding by direct nibble lookup, case-sensitive like the general path.
pub fn decode_hex(encoded: &str, uppercase: bool) -> Result<Vec<u8>, CodecError> {
    let table = if uppercase { HEX_UPPER } else { HEX_LOWER };

    if encoded.chars().count() % 2 == 1 {
        // Odd-length input is not byte aligned; let the general conversion
        // decide where the leading nibble goes.
        return decode(encoded, &CustomAlphabet::preset(table), 2);
    }

    // `hex` accepts either case and reports byte offsets, so wrong-case digits
    // and non-ASCII characters are rejected here by character position
    if let Some((position, c)) = encoded.chars().enumerate().find(|&(_, c)| !table.contains(c)) {
        if c.is_ascii_hexdigit() || !c.is_ascii() {
            return Err(CodecError::InvalidCharacter { char: c, position });
        }
    }

    hex::decode(encoded).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            CodecError::InvalidCharacter { char: c, position: index }
        }
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            CodecError::IncompleteBlock { length: encoded.len() }
        }
    })
}
