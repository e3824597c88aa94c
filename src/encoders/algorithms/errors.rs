use std::fmt;

/// Errors that can occur while decoding text or converting between text and bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input ends with a partial block whose length cannot hold whole bytes
    IncompleteBlock { length: usize },
    /// A Base32 input contains a character outside the variant's alphabet
    NonAlphabetCharacter { char: char, position: usize },
    /// A Base8 input contains something other than an octal digit
    NonNumericCharacter { char: char, position: usize },
    /// The last symbol of a partial block carries non-zero padding bits
    /// (RFC 4648 section 3.5)
    StrayBits,
    /// A BaseX input contains a character absent from the alphabet
    InvalidCharacter { char: char, position: usize },
    /// Bytes or text could not be represented in the requested text encoding
    InvalidStringEncoding { encoding: &'static str },
    /// A Base2 input contains something other than `0`, `1` or a space
    InvalidBinaryCharacter { char: char, position: usize },
    /// The base64 primitive rejected the input
    InvalidBase64(String),
}

impl CodecError {
    /// The offending character and its position, for errors that have one.
    pub fn character(&self) -> Option<(char, usize)> {
        match *self {
            CodecError::NonAlphabetCharacter { char, position }
            | CodecError::NonNumericCharacter { char, position }
            | CodecError::InvalidCharacter { char, position }
            | CodecError::InvalidBinaryCharacter { char, position } => Some((char, position)),
            _ => None,
        }
    }

    fn hint(&self) -> Option<&'static str> {
        match self {
            CodecError::IncompleteBlock { .. } => {
                Some("the input was probably truncated, or padding was mistaken for data")
            }
            CodecError::NonAlphabetCharacter { .. } => {
                Some("check that the Base32 variant (standard, hex, z) matches the encoder")
            }
            CodecError::NonNumericCharacter { .. } => Some("octal digits are 0-7"),
            CodecError::StrayBits => {
                Some("the text was not produced by a canonical encoder or was corrupted")
            }
            CodecError::InvalidCharacter { .. } => {
                Some("check the alphabet; BaseX alphabets are case-sensitive")
            }
            CodecError::InvalidBinaryCharacter { .. } => Some("binary digits are 0 and 1"),
            _ => None,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            write!(f, "\x1b[1;31merror:\x1b[0m ")?;
        } else {
            write!(f, "error: ")?;
        }

        match self {
            CodecError::IncompleteBlock { length } => {
                write!(f, "incomplete final block ({} characters excluding padding)", length)?
            }
            CodecError::NonAlphabetCharacter { char: c, position } => write!(
                f,
                "non-alphabet character {:?} at position {}",
                c, position
            )?,
            CodecError::NonNumericCharacter { char: c, position } => {
                write!(f, "non-numeric character {:?} at position {}", c, position)?
            }
            CodecError::StrayBits => write!(f, "non-zero padding bits in final symbol")?,
            CodecError::InvalidCharacter { char: c, position } => {
                write!(f, "invalid character {:?} at position {}", c, position)?
            }
            CodecError::InvalidStringEncoding { encoding } => {
                write!(f, "data is not valid {}", encoding)?
            }
            CodecError::InvalidBinaryCharacter { char: c, position } => {
                write!(f, "invalid binary digit {:?} at position {}", c, position)?
            }
            CodecError::InvalidBase64(reason) => write!(f, "invalid base64: {}", reason)?,
        }

        if let Some(hint) = self.hint() {
            if use_color {
                write!(f, "\n\x1b[1;36mhint:\x1b[0m {}", hint)?;
            } else {
                write!(f, "\nhint: {}", hint)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for CodecError {}

/// Check if colored output should be used
pub(crate) fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a named alphabet is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m alphabet '{}' not found", self.name)?;
        } else {
            writeln!(f, "error: alphabet '{}' not found", self.name)?;
        }

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(f, "      run \x1b[1m`bases --list`\x1b[0m to see all alphabets")
        } else {
            write!(f, "      run `bases --list` to see all alphabets")
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet<'a, I>(name: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .into_iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.clone())
}
