//! Per-scheme entry points.
//!
//! Base32 and Base8 share the block codec; BaseX runs on the radix codec.
//! Base2 and Base64 are small standalone helpers. [`Scheme`] picks one of
//! them at runtime, which is what the alphabet registry and the CLI need.

pub mod base2;
pub mod base32;
pub mod base64;
pub mod base8;
pub mod basex;

use crate::encoders::algorithms::errors::CodecError;

/// Output settings shared by every scheme. Schemes ignore what they don't use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSettings {
    /// Emit trailing `=` padding (Base8, Base32, Base64)
    pub pad: bool,
    /// Lowercase letters (Base32)
    pub lowercase: bool,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        EncodeSettings {
            pad: true,
            lowercase: false,
        }
    }
}

/// A fully resolved encoding scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    Base2,
    Base8,
    Base32(base32::Variant),
    Base64,
    Base64Url,
    BaseX(basex::BaseXAlphabet),
}

impl Scheme {
    pub fn encode(&self, data: &[u8], settings: EncodeSettings) -> String {
        match self {
            Scheme::Base2 => base2::encode(data, false),
            Scheme::Base8 => base8::encode(data, &[base8::Base8Option::Pad(settings.pad)]),
            Scheme::Base32(variant) => {
                let case = if settings.lowercase {
                    base32::LetterCase::Lower
                } else {
                    base32::LetterCase::Upper
                };
                base32::encode(
                    data,
                    *variant,
                    &[
                        base32::Base32Option::LetterCase(case),
                        base32::Base32Option::Pad(settings.pad),
                    ],
                )
            }
            Scheme::Base64 => base64::encode(data, settings.pad),
            Scheme::Base64Url => base64::encode_url(data, settings.pad),
            Scheme::BaseX(alphabet) => basex::encode(data, alphabet),
        }
    }

    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, CodecError> {
        match self {
            Scheme::Base2 => base2::decode(encoded),
            Scheme::Base8 => base8::decode(encoded),
            Scheme::Base32(variant) => base32::decode(encoded, *variant),
            Scheme::Base64 => base64::decode(encoded),
            Scheme::Base64Url => base64::decode_url(encoded),
            Scheme::BaseX(alphabet) => basex::decode(encoded, alphabet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_reach_each_scheme() {
        let plain = EncodeSettings {
            pad: false,
            lowercase: true,
        };
        assert_eq!(
            Scheme::Base32(base32::Variant::Standard).encode(b"foobar", plain),
            "mzxw6ytboi"
        );
        assert_eq!(Scheme::Base8.encode(b"f", plain), "314");
        assert_eq!(Scheme::Base64.encode(b"f", plain), "Zg");
        assert_eq!(Scheme::Base2.encode(b"f", plain), "01100110");
        assert_eq!(
            Scheme::Base32(base32::Variant::Hex).encode(b"f", EncodeSettings::default()),
            "CO======"
        );
    }

    #[test]
    fn test_decode_dispatch() {
        assert_eq!(
            Scheme::BaseX(basex::BaseXAlphabet::Base58Btc)
                .decode("17paNL19xttacUY")
                .unwrap(),
            b"\0yes mani !"
        );
        assert_eq!(Scheme::Base64Url.decode("-_8").unwrap(), vec![0xfb, 0xff]);
        assert_eq!(
            Scheme::Base32(base32::Variant::Z).decode("xf1zgedpcfzg1ebb").unwrap(),
            b"yes mani !"
        );
    }
}
