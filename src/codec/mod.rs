//! LZW Dictionary Codec
//!
//! Encoding and decoding build the same dictionary of byte sequences in
//! lock-step: the encoder inserts one entry per emitted code, the decoder
//! replays those insertions from the code stream. Both sides freeze growth
//! at [`MAX_DICTIONARY_SIZE`] entries so the codes always fit the 2-byte
//! framed format.

pub mod decoder;
pub mod dictionary;
pub mod encoder;

pub use decoder::decode;
pub use dictionary::{DecodeDictionary, EncodeDictionary, MAX_DICTIONARY_SIZE};
pub use encoder::encode;

use crate::error::Result;
use crate::framing::{frame, unframe};

/// Compress bytes into a framed code buffer (encode + frame).
pub fn compress(input: &[u8]) -> Vec<u8> {
    frame(&encode(input))
}

/// Restore the original bytes from a framed code buffer (unframe + decode).
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decode(&unframe(data)?)
}
