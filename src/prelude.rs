//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use bases::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let scheme = registry.get_alphabet("base58btc").unwrap().scheme().unwrap();
//! assert_eq!(scheme.encode(b"yes mani !", EncodeSettings::default()), "7paNL19xttacUY");
//! ```

pub use crate::{
    Alphabet,
    // Config
    AlphabetConfig,
    AlphabetRegistry,
    Codec,
    // Errors
    CodecError,
    CustomAlphabet,
    EncodeSettings,
    Scheme,
    TextEncoding,
    // Scheme modules
    base2,
    base8,
    base32,
    base64,
    basex,
    // Core encoding/decoding
    decode,
    encode,
};
