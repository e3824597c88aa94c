use crate::core::alphabet::Alphabet;

use super::errors::CodecError;
use super::quantum::{ENCODED_BLOCK_SIZE, Quantum};

/// Encodes `data` in fixed-size blocks, padding the final block with `=`.
///
/// The output is canonical RFC 4648 text in the alphabet's own letter case.
pub fn encode_blocks(data: &[u8], alphabet: &Alphabet, quantum: Quantum) -> String {
    let mut result = String::with_capacity(quantum.encoded_len(data.len()));

    for block in data.chunks(quantum.unencoded_block_size()) {
        let symbols = quantum.split(block);
        let real = quantum.symbols_for_bytes(block.len());

        for &symbol in &symbols[..real] {
            result.push(
                alphabet
                    .encode_digit(symbol as usize)
                    .expect("symbols are below 2^width, the alphabet size"),
            );
        }
        for _ in real..ENCODED_BLOCK_SIZE {
            result.push(alphabet.padding());
        }
    }

    result
}

/// Decodes block-encoded text.
///
/// Trailing padding is ignored. Non-ASCII characters are rejected first, then
/// the length of the final group is checked before any other character is
/// looked up; after that the first character outside the alphabet aborts
/// decoding.
pub fn decode_blocks(
    encoded: &str,
    alphabet: &Alphabet,
    quantum: Quantum,
) -> Result<Vec<u8>, CodecError> {
    let chars: Vec<char> = encoded.trim_end_matches(alphabet.padding()).chars().collect();
    if let Some(position) = chars.iter().position(|c| !c.is_ascii()) {
        return Err(alphabet.invalid_character(chars[position], position));
    }
    let mut result = Vec::with_capacity(quantum.decoded_len(chars.len())?);

    let mut symbols = [0u8; ENCODED_BLOCK_SIZE];
    for (block_index, group) in chars.chunks(ENCODED_BLOCK_SIZE).enumerate() {
        let offset = block_index * ENCODED_BLOCK_SIZE;

        for (i, &c) in group.iter().enumerate() {
            let digit = alphabet
                .decode_char(c)
                .ok_or_else(|| alphabet.invalid_character(c, offset + i))?;
            symbols[i] = digit as u8;
        }

        result.extend(quantum.join(&symbols[..group.len()])?);
    }

    Ok(result)
}
