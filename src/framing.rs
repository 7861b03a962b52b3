//! Binary framing for code streams.
//!
//! Each code occupies exactly 2 bytes in big-endian order, so a framed
//! buffer is always even-length and holds `len / 2` codes. The fixed width
//! is also what bounds codes at `u16::MAX`.

use crate::error::{CodecError, Result};
use crate::Code;

/// Serialize codes into a framed byte buffer.
pub fn frame(codes: &[Code]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(codes.len() * 2);
    for &code in codes {
        buffer.extend_from_slice(&code.to_be_bytes());
    }
    buffer
}

/// Parse a framed buffer back into codes.
///
/// Rejects odd-length buffers, which cannot be split into whole 2-byte
/// groups.
pub fn unframe(data: &[u8]) -> Result<Vec<Code>> {
    if data.len() % 2 != 0 {
        return Err(CodecError::Framing { len: data.len() });
    }
    let codes = data
        .chunks_exact(2)
        .map(|pair| Code::from_be_bytes([pair[0], pair[1]]))
        .collect();
    Ok(codes)
}
