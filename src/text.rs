//! Conversion between human-readable strings and the bytes the codecs consume.

use crate::encoders::algorithms::errors::CodecError;

/// Text encoding used when a codec is handed or asked for a `String`.
///
/// Conversions never substitute replacement characters: anything the encoding
/// cannot represent is an `InvalidStringEncoding` error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    /// 7-bit US-ASCII
    Ascii,
    #[default]
    Utf8,
    /// ISO-8859-1, one byte per code point below U+0100
    Latin1,
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Ascii => "ASCII",
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Latin1 => "ISO-8859-1",
        }
    }

    fn error(&self) -> CodecError {
        CodecError::InvalidStringEncoding {
            encoding: self.name(),
        }
    }

    /// Converts a string to bytes in this encoding.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Ascii if text.is_ascii() => Ok(text.as_bytes().to_vec()),
            TextEncoding::Ascii => Err(self.error()),
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(c).map_err(|_| self.error()))
                .collect(),
        }
    }

    /// Interprets bytes as a string in this encoding.
    pub fn decode(&self, bytes: Vec<u8>) -> Result<String, CodecError> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|_| self.error()),
            TextEncoding::Ascii if bytes.is_ascii() => {
                String::from_utf8(bytes).map_err(|_| self.error())
            }
            TextEncoding::Ascii => Err(self.error()),
            TextEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii() {
        assert_eq!(TextEncoding::Ascii.encode("yes").unwrap(), b"yes");
        assert_eq!(
            TextEncoding::Ascii.encode("café"),
            Err(CodecError::InvalidStringEncoding { encoding: "ASCII" })
        );
        assert!(TextEncoding::Ascii.decode(vec![0x80]).is_err());
        assert_eq!(TextEncoding::Ascii.decode(vec![0, b'a']).unwrap(), "\0a");
    }

    #[test]
    fn test_utf8() {
        assert_eq!(TextEncoding::Utf8.encode("é").unwrap(), vec![0xC3, 0xA9]);
        assert!(TextEncoding::Utf8.decode(vec![0xC3]).is_err());
    }

    #[test]
    fn test_latin1() {
        assert_eq!(TextEncoding::Latin1.encode("é").unwrap(), vec![0xE9]);
        assert!(TextEncoding::Latin1.encode("€").is_err());
        assert_eq!(TextEncoding::Latin1.decode(vec![0xE9]).unwrap(), "é");
    }
}
