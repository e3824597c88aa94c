//! Binary digit strings, eight digits per byte.

use crate::encoders::algorithms::errors::CodecError;
use crate::text::TextEncoding;

/// Writes each byte as eight `0`/`1` digits, optionally separated by spaces.
pub fn encode(data: &[u8], byte_spacing: bool) -> String {
    let separator = if byte_spacing { " " } else { "" };
    data.iter()
        .map(|byte| format!("{:08b}", byte))
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn encode_str(
    text: &str,
    byte_spacing: bool,
    encoding: TextEncoding,
) -> Result<String, CodecError> {
    Ok(encode(&encoding.encode(text)?, byte_spacing))
}

/// Reads binary digits back into bytes.
///
/// Spaces are ignored anywhere in the input. Digits are taken eight at a
/// time; a shorter final run is read as the value of its digits.
pub fn decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    let mut digits = Vec::with_capacity(encoded.len());
    for (position, c) in encoded.chars().enumerate() {
        match c {
            ' ' => {}
            '0' | '1' => digits.push(c as u8 - b'0'),
            _ => return Err(CodecError::InvalidBinaryCharacter { char: c, position }),
        }
    }

    Ok(digits
        .chunks(8)
        .map(|bits| bits.iter().fold(0u8, |acc, &bit| acc << 1 | bit))
        .collect())
}

pub fn decode_to_string(encoded: &str, encoding: TextEncoding) -> Result<String, CodecError> {
    encoding.decode(decode(encoded)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bytes() {
        for byte in 0..=255u8 {
            let encoded = encode(&[byte], false);
            assert_eq!(encoded.len(), 8);
            assert_eq!(u8::from_str_radix(&encoded, 2).unwrap(), byte);
            assert_eq!(decode(&encoded).unwrap(), vec![byte]);
        }
        assert_eq!(encode(&[1], false), "00000001");
        assert_eq!(encode(&[20], false), "00010100");
    }

    #[test]
    fn test_byte_spacing() {
        assert_eq!(encode(b"Hi", true), "01001000 01101001");
        assert_eq!(encode(b"Hi", false), "0100100001101001");
        assert_eq!(
            decode_to_string("01001000 01101001", TextEncoding::Utf8).unwrap(),
            "Hi"
        );
        assert_eq!(
            encode_str("Hello World", true, TextEncoding::Utf8)
                .unwrap()
                .split(' ')
                .count(),
            11
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(b"", true), "");
        assert_eq!(decode("").unwrap(), b"");
        assert_eq!(decode("   ").unwrap(), b"");
    }

    #[test]
    fn test_short_final_group() {
        assert_eq!(decode("00000001101").unwrap(), vec![1, 5]);
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            decode("0100 2000"),
            Err(CodecError::InvalidBinaryCharacter {
                char: '2',
                position: 5
            })
        );
    }
}
