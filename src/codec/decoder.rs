//! Lock-step decoder.

use crate::codec::dictionary::DecodeDictionary;
use crate::error::{CodecError, Result};
use crate::Code;

/// Decode a sequence of dictionary codes back into the original bytes.
///
/// The decoder replays the encoder's insertions: after resolving each code
/// it registers the previous sequence extended by the first byte of the
/// current one. A code equal to the next unassigned code refers to the
/// entry this very step creates, so it resolves to the previous sequence
/// plus its own first byte. Any other unknown code fails with
/// [`CodecError::InvalidCode`].
pub fn decode(codes: &[Code]) -> Result<Vec<u8>> {
    let Some(&first) = codes.first() else {
        return Ok(Vec::new());
    };

    let mut dictionary = DecodeDictionary::new();
    let mut previous: Vec<u8> = match dictionary.get(first) {
        Some(entry) => entry.to_vec(),
        // Nothing precedes the first code, so it cannot be self-referential.
        None => return Err(CodecError::InvalidCode { code: first, position: 0 }),
    };
    let mut output = previous.clone();

    for (position, &code) in codes.iter().enumerate().skip(1) {
        let entry: Vec<u8> = if let Some(entry) = dictionary.get(code) {
            entry.to_vec()
        } else if usize::from(code) == dictionary.next_code() {
            // The code names the entry this step is about to add:
            // previous extended by its own first byte.
            let mut entry = previous.clone();
            entry.push(previous[0]);
            entry
        } else {
            return Err(CodecError::InvalidCode { code, position });
        };

        output.extend_from_slice(&entry);
        previous.push(entry[0]);
        dictionary.push(previous);
        previous = entry;
    }

    tracing::debug!(
        "decoded {} codes into {} bytes ({} dictionary entries)",
        codes.len(),
        output.len(),
        dictionary.len()
    );
    Ok(output)
}
