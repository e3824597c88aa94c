//! Base-N binary-to-text codecs.
//!
//! - [`base32`]: RFC 4648 Base32, extended hex and z-base-32
//! - [`base8`]: octal digits in 3-byte blocks
//! - [`basex`]: arbitrary-radix conversion (base10, base16, base36, base58, custom)
//! - [`base2`] and [`base64`]: small helpers
//!
//! ```
//! use bases::{Alphabet, decode, encode};
//!
//! let encoded = encode(b"foobar", &Alphabet::StandardBase32);
//! assert_eq!(encoded, "MZXW6YTBOI======");
//! assert_eq!(decode(&encoded, &Alphabet::StandardBase32).unwrap(), b"foobar");
//! ```

mod codecs;
mod core;
mod encoders;
mod text;

pub mod prelude;

pub use crate::codecs::{EncodeSettings, Scheme, base2, base8, base32, base64, basex};
pub use crate::core::alphabet::{Alphabet, CustomAlphabet, PADDING};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, Codec};
pub use crate::encoders::algorithms::{AlphabetNotFoundError, CodecError, find_closest_alphabet};
pub use crate::encoders::algorithms::quantum::Quantum;
pub use crate::text::TextEncoding;

use crate::encoders::algorithms::{block, radix};

/// Encodes binary data with the given alphabet.
///
/// Base32 and octal alphabets use the block codec with canonical padding and
/// the alphabet's own letter case. A custom alphabet uses radix conversion,
/// writing one leader character per leading zero byte.
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    match alphabet {
        Alphabet::Custom(custom) => radix::encode(data, custom, 1),
        Alphabet::Octal => block::encode_blocks(data, alphabet, Quantum::TRIPLET),
        _ => block::encode_blocks(data, alphabet, Quantum::QUINTET),
    }
}

/// Decodes text produced by [`encode`] with the same alphabet.
///
/// # Errors
///
/// Returns a [`CodecError`] for characters outside the alphabet or malformed
/// block structure.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, CodecError> {
    match alphabet {
        Alphabet::Custom(custom) => radix::decode(encoded, custom, 1),
        Alphabet::Octal => block::decode_blocks(encoded, alphabet, Quantum::TRIPLET),
        _ => block::decode_blocks(encoded, alphabet, Quantum::QUINTET),
    }
}

#[cfg(test)]
mod tests;
