//! Base64 and Base64URL on top of the `base64` crate.
//!
//! Decoding is lenient about missing padding: input is completed to a
//! multiple of four with [`compliant`] before it reaches the engine.

use base64::prelude::*;

use crate::encoders::algorithms::errors::CodecError;

pub fn encode(data: &[u8], padded: bool) -> String {
    if padded {
        BASE64_STANDARD.encode(data)
    } else {
        BASE64_STANDARD_NO_PAD.encode(data)
    }
}

/// URL-safe alphabet (`-` and `_` for `+` and `/`).
pub fn encode_url(data: &[u8], padded: bool) -> String {
    if padded {
        BASE64_URL_SAFE.encode(data)
    } else {
        BASE64_URL_SAFE_NO_PAD.encode(data)
    }
}

pub fn decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    BASE64_STANDARD
        .decode(compliant(encoded))
        .map_err(|e| CodecError::InvalidBase64(e.to_string()))
}

pub fn decode_url(encoded: &str) -> Result<Vec<u8>, CodecError> {
    BASE64_URL_SAFE
        .decode(compliant(encoded))
        .map_err(|e| CodecError::InvalidBase64(e.to_string()))
}

/// Pads `encoded` with `=` up to the next multiple of four characters.
pub fn compliant(encoded: &str) -> String {
    let mut padded = encoded.to_string();
    let count = encoded.chars().count();
    for _ in 0..(4 - count % 4) % 4 {
        padded.push('=');
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        let cases: [(&[u8], &str); 7] = [
            (b"", ""),
            (b"f", "Zg=="),
            (b"fo", "Zm8="),
            (b"foo", "Zm9v"),
            (b"foob", "Zm9vYg=="),
            (b"fooba", "Zm9vYmE="),
            (b"foobar", "Zm9vYmFy"),
        ];
        for (data, expected) in cases {
            assert_eq!(encode(data, true), expected);
            assert_eq!(encode(data, false), expected.trim_end_matches('='));
            assert_eq!(decode(expected).unwrap(), data);
            assert_eq!(decode(expected.trim_end_matches('=')).unwrap(), data);
        }
    }

    #[test]
    fn test_url_alphabet() {
        let data = [0xfb, 0xff, 0xbf];
        assert_eq!(encode(&data, true), "+/+/");
        assert_eq!(encode_url(&data, true), "-_-_");
        assert_eq!(encode_url(&[0xfb, 0xff], false), "-_8");
        assert_eq!(decode_url("-_8").unwrap(), vec![0xfb, 0xff]);
        assert!(decode("-_-_").is_err());
    }

    #[test]
    fn test_compliant() {
        assert_eq!(compliant("Zg"), "Zg==");
        assert_eq!(compliant("Zm8"), "Zm8=");
        assert_eq!(compliant("Zm9v"), "Zm9v");
        assert_eq!(compliant(""), "");
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(decode("Zm9v!A=="), Err(CodecError::InvalidBase64(_))));
    }
}
