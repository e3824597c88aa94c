//! RFC 4648 Base32 in its standard, extended hex and z-base-32 flavours.
//!
//! ```
//! use bases::base32::{self, Base32Option, LetterCase, Variant};
//!
//! assert_eq!(base32::encode(b"foobar", Variant::Standard, &base32::DEFAULT_OPTIONS), "MZXW6YTBOI======");
//! assert_eq!(
//!     base32::encode(b"foobar", Variant::Standard, &[Base32Option::LetterCase(LetterCase::Lower), Base32Option::Pad(false)]),
//!     "mzxw6ytboi"
//! );
//! assert_eq!(base32::decode("mzxw6ytboi", Variant::Standard).unwrap(), b"foobar");
//! ```

use crate::core::alphabet::{Alphabet, PADDING};
use crate::encoders::algorithms::block::{decode_blocks, encode_blocks};
use crate::encoders::algorithms::errors::CodecError;
use crate::encoders::algorithms::quantum::Quantum;
use crate::text::TextEncoding;

/// Which Base32 alphabet to use. The block layout is the same for all three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Standard,
    Hex,
    Z,
}

impl Variant {
    pub fn alphabet(&self) -> Alphabet {
        match self {
            Variant::Standard => Alphabet::StandardBase32,
            Variant::Hex => Alphabet::HexBase32,
            Variant::Z => Alphabet::ZBase32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullChars {
    /// Remove leading `0x00` bytes before encoding
    Drop,
    /// Encode leading `0x00` bytes like any other byte
    Encode,
}

/// Encoding options, applied in the order given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base32Option {
    Pad(bool),
    NullChar(NullChars),
    LetterCase(LetterCase),
}

/// Uppercase, padded, leading zero bytes encoded.
pub const DEFAULT_OPTIONS: [Base32Option; 3] = [
    Base32Option::LetterCase(LetterCase::Upper),
    Base32Option::Pad(true),
    Base32Option::NullChar(NullChars::Encode),
];

impl Base32Option {
    fn apply_to_bytes<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        match self {
            Base32Option::NullChar(NullChars::Drop) => {
                let zeros = data.iter().take_while(|&&b| b == 0).count();
                &data[zeros..]
            }
            _ => data,
        }
    }

    fn apply_to_text(&self, mut text: String) -> String {
        match self {
            Base32Option::LetterCase(LetterCase::Upper) => text.make_ascii_uppercase(),
            Base32Option::LetterCase(LetterCase::Lower) => text.make_ascii_lowercase(),
            Base32Option::Pad(false) => {
                let len = text.trim_end_matches(PADDING).len();
                text.truncate(len);
            }
            _ => {}
        }
        text
    }
}

pub fn encode(data: &[u8], variant: Variant, options: &[Base32Option]) -> String {
    let data = options
        .iter()
        .fold(data, |data, option| option.apply_to_bytes(data));

    let encoded = encode_blocks(data, &variant.alphabet(), Quantum::QUINTET);

    options
        .iter()
        .fold(encoded, |text, option| option.apply_to_text(text))
}

/// Encodes a string after converting it to bytes with `encoding`.
pub fn encode_str(
    text: &str,
    variant: Variant,
    options: &[Base32Option],
    encoding: TextEncoding,
) -> Result<String, CodecError> {
    Ok(encode(&encoding.encode(text)?, variant, options))
}

/// Decodes Base32 text in either letter case, with or without padding.
pub fn decode(encoded: &str, variant: Variant) -> Result<Vec<u8>, CodecError> {
    decode_blocks(encoded, &variant.alphabet(), Quantum::QUINTET)
}

pub fn decode_to_string(
    encoded: &str,
    variant: Variant,
    encoding: TextEncoding,
) -> Result<String, CodecError> {
    encoding.decode(decode(encoded, variant)?)
}
