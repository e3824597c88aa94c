//! Bit-packing shared by the fixed-ratio block codecs.
//!
//! A block of up to `unencoded_block_size()` bytes is read as one big-endian
//! bit string and cut into `width`-bit symbols. Both Base32 (5-bit quintets,
//! 5 bytes per block) and Base8 (3-bit digits, 3 bytes per block) produce
//! eight symbols per full block, so a single 40-bit accumulator covers both.

use num_integer::lcm;

use super::errors::CodecError;

/// Number of symbols in a full encoded block, for every supported quantum.
pub const ENCODED_BLOCK_SIZE: usize = 8;

/// A symbol width in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantum {
    width: u32,
}

impl Quantum {
    /// Base32: 5 bytes ⇄ 8 symbols.
    pub const QUINTET: Quantum = Quantum { width: 5 };
    /// Base8: 3 bytes ⇄ 8 symbols.
    pub const TRIPLET: Quantum = Quantum { width: 3 };

    fn mask(&self) -> u64 {
        (1 << self.width) - 1
    }

    /// Bits in a full block; the smallest count that is a whole number of
    /// both bytes and symbols.
    fn block_bits(&self) -> u32 {
        lcm(self.width, 8)
    }

    /// Bytes in a full unencoded block.
    pub fn unencoded_block_size(&self) -> usize {
        (self.block_bits() / 8) as usize
    }

    /// Number of meaningful symbols produced for a final block of `bytes` bytes.
    pub fn symbols_for_bytes(&self, bytes: usize) -> usize {
        (bytes * 8).div_ceil(self.width as usize)
    }

    /// Bytes recovered from a final group of `symbols` symbols, or `None` when
    /// no byte count encodes to exactly that many symbols.
    pub fn bytes_for_symbols(&self, symbols: usize) -> Option<usize> {
        let bytes = symbols * self.width as usize / 8;
        (bytes > 0 && self.symbols_for_bytes(bytes) == symbols).then_some(bytes)
    }

    /// Length of the padded encoding of `byte_count` bytes.
    pub fn encoded_len(&self, byte_count: usize) -> usize {
        byte_count.div_ceil(self.unencoded_block_size()) * ENCODED_BLOCK_SIZE
    }

    /// Length of the decoding of `symbol_count` non-padding symbols.
    pub fn decoded_len(&self, symbol_count: usize) -> Result<usize, CodecError> {
        let tail = symbol_count % ENCODED_BLOCK_SIZE;
        let tail_bytes = match tail {
            0 => 0,
            _ => self
                .bytes_for_symbols(tail)
                .ok_or(CodecError::IncompleteBlock {
                    length: symbol_count,
                })?,
        };
        Ok(symbol_count / ENCODED_BLOCK_SIZE * self.unencoded_block_size() + tail_bytes)
    }

    /// Splits 1..=`unencoded_block_size()` bytes into a full block of symbols.
    ///
    /// The last incomplete group is zero-padded on the right. Only the first
    /// `symbols_for_bytes(bytes.len())` entries are meaningful; the rest are zero
    /// and the caller replaces them with padding.
    pub fn split(&self, bytes: &[u8]) -> [u8; ENCODED_BLOCK_SIZE] {
        debug_assert!(!bytes.is_empty() && bytes.len() <= self.unencoded_block_size());

        let mut acc = bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        acc <<= self.block_bits() - 8 * bytes.len() as u32;

        let mut symbols = [0u8; ENCODED_BLOCK_SIZE];
        for (i, symbol) in symbols.iter_mut().enumerate() {
            let shift = self.block_bits() - (i as u32 + 1) * self.width;
            *symbol = ((acc >> shift) & self.mask()) as u8;
        }
        symbols
    }

    /// Joins a final group of symbols back into bytes.
    ///
    /// `symbols` must hold values below `2^width`. Fails with `IncompleteBlock`
    /// when the group length cannot hold whole bytes and with `StrayBits` when
    /// the bits left over after the last byte are not all zero.
    pub fn join(&self, symbols: &[u8]) -> Result<Vec<u8>, CodecError> {
        let byte_count = self
            .bytes_for_symbols(symbols.len())
            .ok_or(CodecError::IncompleteBlock {
                length: symbols.len(),
            })?;

        let acc = symbols
            .iter()
            .fold(0u64, |acc, &s| (acc << self.width) | (u64::from(s) & self.mask()));

        let stray = symbols.len() as u32 * self.width - byte_count as u32 * 8;
        if acc & ((1 << stray) - 1) != 0 {
            return Err(CodecError::StrayBits);
        }

        let acc = acc >> stray;
        Ok((0..byte_count)
            .rev()
            .map(|i| (acc >> (i * 8)) as u8)
            .collect())
    }
}
