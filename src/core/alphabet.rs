use std::collections::HashMap;

use crate::encoders::algorithms::errors::CodecError;

/// Padding character shared by every block alphabet.
pub const PADDING: char = '=';

const STANDARD_BASE32: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const HEX_BASE32: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";
const Z_BASE32: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";
const OCTAL: &[u8; 8] = b"01234567";

/// Symbol ⇄ character translation for every scheme.
///
/// The fixed variants carry their tables as constants; `Custom` owns the
/// characters of a caller-supplied BaseX alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alphabet {
    /// RFC 4648 Base32 (`A-Z2-7`)
    StandardBase32,
    /// RFC 4648 "base32hex" (`0-9A-V`)
    HexBase32,
    /// z-base-32
    ZBase32,
    /// Octal digits for Base8
    Octal,
    /// Arbitrary alphabet for radix conversion
    Custom(CustomAlphabet),
}

impl Alphabet {
    /// Number of symbols, i.e. the radix.
    pub fn base(&self) -> usize {
        match self {
            Alphabet::StandardBase32 | Alphabet::HexBase32 | Alphabet::ZBase32 => 32,
            Alphabet::Octal => 8,
            Alphabet::Custom(custom) => custom.base(),
        }
    }

    /// Padding character emitted by the block codecs.
    pub fn padding(&self) -> char {
        PADDING
    }

    /// Character for symbol zero.
    pub fn leader(&self) -> char {
        match self {
            Alphabet::Custom(custom) => custom.leader(),
            // Symbol zero always exists in the fixed tables
            _ => self.encode_digit(0).unwrap_or(PADDING),
        }
    }

    /// Encodes a symbol (0 to base-1) as a character.
    ///
    /// Returns `None` if the symbol is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        let table: &[u8] = match self {
            Alphabet::StandardBase32 => STANDARD_BASE32,
            Alphabet::HexBase32 => HEX_BASE32,
            Alphabet::ZBase32 => Z_BASE32,
            Alphabet::Octal => OCTAL,
            Alphabet::Custom(custom) => return custom.encode_digit(digit),
        };
        table.get(digit).map(|&b| b as char)
    }

    /// Decodes a character back to its symbol value.
    ///
    /// Returns `None` if the character is not in the alphabet. Base32 variants
    /// accept either letter case.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        let value = match self {
            Alphabet::StandardBase32 => match c {
                'A'..='Z' => c as u32 - 'A' as u32,
                'a'..='z' => c as u32 - 'a' as u32,
                '2'..='7' => c as u32 - '2' as u32 + 26,
                _ => return None,
            },
            Alphabet::HexBase32 => match c {
                '0'..='9' => c as u32 - '0' as u32,
                'A'..='V' => c as u32 - 'A' as u32 + 10,
                'a'..='v' => c as u32 - 'a' as u32 + 10,
                _ => return None,
            },
            // Not a contiguous range, so fold to lowercase and scan the table
            Alphabet::ZBase32 => {
                let folded = c.to_ascii_lowercase();
                return Z_BASE32.iter().position(|&b| b as char == folded);
            }
            Alphabet::Octal => match c {
                '0'..='7' => c as u32 - '0' as u32,
                _ => return None,
            },
            Alphabet::Custom(custom) => return custom.decode_char(c),
        };
        Some(value as usize)
    }

    /// The error this alphabet reports for a character it cannot decode.
    pub fn invalid_character(&self, c: char, position: usize) -> CodecError {
        match self {
            Alphabet::StandardBase32 | Alphabet::HexBase32 | Alphabet::ZBase32 => {
                CodecError::NonAlphabetCharacter { char: c, position }
            }
            Alphabet::Octal => CodecError::NonNumericCharacter { char: c, position },
            Alphabet::Custom(_) => CodecError::InvalidCharacter { char: c, position },
        }
    }
}

/// A caller-defined alphabet: base = number of characters, leader = first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAlphabet {
    chars: Vec<char>,
    char_to_index: HashMap<char, usize>,
}

impl CustomAlphabet {
    /// Creates an alphabet from its characters in symbol order.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet has fewer than two characters or
    /// contains duplicates.
    pub fn new(chars: Vec<char>) -> Result<Self, String> {
        if chars.len() < 2 {
            return Err(format!(
                "Alphabet needs at least 2 characters, got {}",
                chars.len()
            ));
        }

        let mut char_to_index = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            if char_to_index.insert(c, i).is_some() {
                return Err(format!("Duplicate character in alphabet: {}", c));
            }
        }

        Ok(CustomAlphabet {
            chars,
            char_to_index,
        })
    }

    /// Builds one of the built-in tables, which are known to be valid.
    pub(crate) fn preset(table: &str) -> Self {
        let chars: Vec<char> = table.chars().collect();
        let char_to_index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        CustomAlphabet {
            chars,
            char_to_index,
        }
    }

    /// Creates an alphabet from a string of characters.
    pub fn from_chars(s: &str) -> Result<Self, String> {
        Self::new(s.chars().collect())
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    /// Character representing symbol zero and leading zero bytes.
    pub fn leader(&self) -> char {
        self.chars[0]
    }

    /// The characters in symbol order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Encodes a digit (0 to base-1) as a character.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).copied()
    }

    /// Decodes a character back to its digit value.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }
}

impl From<CustomAlphabet> for Alphabet {
    fn from(custom: CustomAlphabet) -> Self {
        Alphabet::Custom(custom)
    }
}

impl std::str::FromStr for CustomAlphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_chars(s)
    }
}
