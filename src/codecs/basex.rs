//! Arbitrary-radix ("BaseX") encoding over a caller-chosen alphabet.
//!
//! ```
//! use bases::basex::{self, BaseXAlphabet};
//!
//! assert_eq!(basex::encode(b"yes mani !", &BaseXAlphabet::Base58Btc), "7paNL19xttacUY");
//! assert_eq!(basex::decode("017", &BaseXAlphabet::Base10Decimal).unwrap(), vec![0, 17]);
//! ```

use std::borrow::Cow;

use crate::core::alphabet::CustomAlphabet;
use crate::encoders::algorithms::errors::CodecError;
use crate::encoders::algorithms::radix;
use crate::text::TextEncoding;

const BASE10: &str = "0123456789";
const BASE16: &str = "0123456789abcdef";
const BASE16_UPPER: &str = "0123456789ABCDEF";
const BASE36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
const BASE36_UPPER: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE58_BTC: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE58_FLICKR: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// Built-in alphabets plus any caller-defined one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseXAlphabet {
    Base10Decimal,
    Base16Hex,
    Base16HexUpper,
    Base36,
    Base36Upper,
    Base58Btc,
    Base58Flickr,
    Custom(CustomAlphabet),
}

impl BaseXAlphabet {
    const PRESETS: [BaseXAlphabet; 7] = [
        BaseXAlphabet::Base10Decimal,
        BaseXAlphabet::Base16Hex,
        BaseXAlphabet::Base16HexUpper,
        BaseXAlphabet::Base36,
        BaseXAlphabet::Base36Upper,
        BaseXAlphabet::Base58Btc,
        BaseXAlphabet::Base58Flickr,
    ];

    /// Character table of a preset; `None` for custom alphabets.
    fn preset_chars(&self) -> Option<&'static str> {
        match self {
            BaseXAlphabet::Base10Decimal => Some(BASE10),
            BaseXAlphabet::Base16Hex => Some(BASE16),
            BaseXAlphabet::Base16HexUpper => Some(BASE16_UPPER),
            BaseXAlphabet::Base36 => Some(BASE36),
            BaseXAlphabet::Base36Upper => Some(BASE36_UPPER),
            BaseXAlphabet::Base58Btc => Some(BASE58_BTC),
            BaseXAlphabet::Base58Flickr => Some(BASE58_FLICKR),
            BaseXAlphabet::Custom(_) => None,
        }
    }

    /// The alphabet's characters in symbol order.
    pub fn chars(&self) -> String {
        match self {
            BaseXAlphabet::Custom(custom) => custom.chars().iter().collect(),
            preset => preset.preset_chars().unwrap_or_default().to_string(),
        }
    }

    /// Builds an alphabet from its characters, recognising the presets.
    ///
    /// # Errors
    ///
    /// Returns an error for fewer than two characters or duplicates.
    pub fn from_chars(chars: &str) -> Result<Self, String> {
        if let Some(preset) = Self::PRESETS
            .into_iter()
            .find(|preset| preset.preset_chars() == Some(chars))
        {
            return Ok(preset);
        }
        CustomAlphabet::from_chars(chars).map(BaseXAlphabet::Custom)
    }

    /// The alphabet as a digit table.
    pub fn resolve(&self) -> Cow<'_, CustomAlphabet> {
        match self {
            BaseXAlphabet::Custom(custom) => Cow::Borrowed(custom),
            preset => Cow::Owned(CustomAlphabet::preset(
                preset.preset_chars().unwrap_or_default(),
            )),
        }
    }

    pub fn base(&self) -> usize {
        match self {
            BaseXAlphabet::Custom(custom) => custom.base(),
            preset => preset.preset_chars().map_or(0, str::len),
        }
    }

    /// Leader characters written per leading zero byte.
    ///
    /// Hex keeps one digit pair per byte, so its leader group is two wide.
    pub fn leader_width(&self) -> usize {
        match self {
            BaseXAlphabet::Base16Hex | BaseXAlphabet::Base16HexUpper => 2,
            _ => 1,
        }
    }
}

pub fn encode(data: &[u8], alphabet: &BaseXAlphabet) -> String {
    match alphabet {
        BaseXAlphabet::Base16Hex => radix::encode_hex(data, false),
        BaseXAlphabet::Base16HexUpper => radix::encode_hex(data, true),
        _ => radix::encode(data, &alphabet.resolve(), alphabet.leader_width()),
    }
}

/// Encodes a string after converting it to bytes with `encoding`.
pub fn encode_str(
    text: &str,
    alphabet: &BaseXAlphabet,
    encoding: TextEncoding,
) -> Result<String, CodecError> {
    Ok(encode(&encoding.encode(text)?, alphabet))
}

/// Decodes text written in `alphabet`. Matching is case-sensitive.
pub fn decode(encoded: &str, alphabet: &BaseXAlphabet) -> Result<Vec<u8>, CodecError> {
    match alphabet {
        BaseXAlphabet::Base16Hex => radix::decode_hex(encoded, false),
        BaseXAlphabet::Base16HexUpper => radix::decode_hex(encoded, true),
        _ => radix::decode(encoded, &alphabet.resolve(), alphabet.leader_width()),
    }
}

pub fn decode_to_string(
    encoded: &str,
    alphabet: &BaseXAlphabet,
    encoding: TextEncoding,
) -> Result<String, CodecError> {
    encoding.decode(decode(encoded, alphabet)?)
}
