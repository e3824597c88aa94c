//! Octal block encoding: every 3 bytes become 8 digits `0-7`.
//!
//! Leading NUL bytes are commonly written as the escaped text `\x00` by the
//! programs that produce Base8 input, so the encoder can treat that marker
//! specially through [`NullChars`].

use crate::core::alphabet::{Alphabet, PADDING};
use crate::encoders::algorithms::block::{decode_blocks, encode_blocks};
use crate::encoders::algorithms::errors::CodecError;
use crate::encoders::algorithms::quantum::Quantum;
use crate::text::TextEncoding;

/// The escaped NUL marker, as bytes.
pub const NULL_MARKER: &[u8; 4] = b"\\x00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullChars {
    /// Strip leading `\x00` markers
    Drop,
    /// Replace each leading `\x00` marker with a raw `0x00` byte
    Encode,
    /// Encode the marker text as-is
    Literal,
}

/// Encoding options, applied in the order given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base8Option {
    Pad(bool),
    NullChar(NullChars),
}

/// Number of leading markers, stopping once only a bare marker is left.
fn leading_markers(data: &[u8]) -> usize {
    let mut rest = data;
    let mut count = 0;
    while rest.len() > NULL_MARKER.len() && rest.starts_with(NULL_MARKER) {
        rest = &rest[NULL_MARKER.len()..];
        count += 1;
    }
    count
}

impl Base8Option {
    fn apply_to_bytes(&self, data: Vec<u8>) -> Vec<u8> {
        let Base8Option::NullChar(mode) = self else {
            return data;
        };

        let markers = leading_markers(&data);
        let rest = &data[markers * NULL_MARKER.len()..];
        match mode {
            NullChars::Drop => rest.to_vec(),
            NullChars::Encode => {
                let mut bytes = vec![0u8; markers];
                bytes.extend_from_slice(rest);
                bytes
            }
            NullChars::Literal => data,
        }
    }

    fn apply_to_text(&self, mut text: String) -> String {
        if let Base8Option::Pad(false) = self {
            let len = text.trim_end_matches(PADDING).len();
            text.truncate(len);
        }
        text
    }
}

pub fn encode(data: &[u8], options: &[Base8Option]) -> String {
    let data = options
        .iter()
        .fold(data.to_vec(), |data, option| option.apply_to_bytes(data));

    let encoded = encode_blocks(&data, &Alphabet::Octal, Quantum::TRIPLET);

    options
        .iter()
        .fold(encoded, |text, option| option.apply_to_text(text))
}

/// Encodes a string after converting it to bytes with `encoding`.
pub fn encode_str(
    text: &str,
    options: &[Base8Option],
    encoding: TextEncoding,
) -> Result<String, CodecError> {
    Ok(encode(&encoding.encode(text)?, options))
}

/// Decodes octal text, with or without trailing padding.
pub fn decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    decode_blocks(encoded, &Alphabet::Octal, Quantum::TRIPLET)
}

pub fn decode_to_string(encoded: &str, encoding: TextEncoding) -> Result<String, CodecError> {
    encoding.decode(decode(encoded)?)
}
