use thiserror::Error;

use crate::Code;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The decoder read a code that is neither an existing dictionary entry
    /// nor the next code the dictionary would assign.
    #[error("invalid code {code} at position {position}")]
    InvalidCode { code: Code, position: usize },

    /// A framed buffer cannot be split into whole 2-byte code groups.
    #[error("framed buffer has odd length ({len} bytes)")]
    Framing { len: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
