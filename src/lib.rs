pub mod codec;
pub mod error;
pub mod framing;

pub use codec::{
    compress, decode, decompress, encode, DecodeDictionary, EncodeDictionary, MAX_DICTIONARY_SIZE,
};
pub use error::{CodecError, Result};
pub use framing::{frame, unframe};

/// Integer code referencing a dictionary entry.
///
/// Codes 0-255 are the initial single-byte entries; codes from 256 upward are
/// assigned as the dictionary grows. The 2-byte framed format is what caps
/// codes at `u16::MAX` and the dictionary at [`MAX_DICTIONARY_SIZE`] entries.
pub type Code = u16;
