pub mod block;
pub mod errors;
pub mod quantum;
pub mod radix;

// Re-export error types for public API
pub use errors::{AlphabetNotFoundError, CodecError, find_closest_alphabet};
