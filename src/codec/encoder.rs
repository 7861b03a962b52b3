//! Greedy longest-match encoder.

use crate::codec::dictionary::EncodeDictionary;
use crate::Code;

/// Encode bytes into a sequence of dictionary codes.
///
/// The encoder extends the current sequence one byte at a time for as long
/// as the dictionary knows the result. On the first miss it emits the code
/// of the longest match, registers the extended sequence under the next
/// code, and restarts matching from the byte that broke the match. Empty
/// input encodes to an empty code sequence.
pub fn encode(input: &[u8]) -> Vec<Code> {
    let mut dictionary = EncodeDictionary::new();
    let mut codes = Vec::new();
    let mut current: Vec<u8> = Vec::new();
    // Code of `current`, tracked so the miss branch never re-hashes it.
    let mut current_code: Option<Code> = None;

    for &byte in input {
        current.push(byte);
        match dictionary.get(&current) {
            Some(code) => current_code = Some(code),
            None => {
                if let Some(code) = current_code {
                    codes.push(code);
                }
                dictionary.insert(&current);
                current.clear();
                current.push(byte);
                current_code = Some(Code::from(byte));
            }
        }
    }
    // Flush the pending match, if any input was seen at all.
    if let Some(code) = current_code {
        codes.push(code);
    }

    tracing::debug!(
        "encoded {} bytes into {} codes ({} dictionary entries)",
        input.len(),
        codes.len(),
        dictionary.len()
    );
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty_input() {
        assert!(encode(b"").is_empty());
    }

    #[test]
    fn test_encode_single_byte() {
        assert_eq!(encode(b"A"), vec![65]);
    }

    #[test]
    fn test_encode_distinct_bytes_stay_literal() {
        // No repeated pair, so every code is an initial single-byte entry.
        assert_eq!(encode(b"ABCDEFGH"), vec![65, 66, 67, 68, 69, 70, 71, 72]);
    }

    #[test]
    fn test_encode_classic_sequence() {
        let codes = encode(b"TOBEORNOTTOBEORTOBEORNOT");
        assert_eq!(
            codes,
            vec![84, 79, 66, 69, 79, 82, 78, 79, 84, 256, 258, 260, 265, 259, 261, 263]
        );
    }

    #[test]
    fn test_encode_repeated_run() {
        assert_eq!(encode(b"AAAAAAA"), vec![65, 256, 257, 65]);
    }

    #[test]
    fn test_encode_run_ends_on_fresh_entry() {
        // The final code is the entry added one step earlier.
        assert_eq!(encode(b"AAA"), vec![65, 256]);
    }

    #[test]
    fn test_encode_alternating_pattern() {
        assert_eq!(encode(b"ABABABABABAB"), vec![65, 66, 256, 258, 257, 260]);
    }

    #[test]
    fn test_encode_long_run_compresses() {
        let input = vec![b'X'; 1000];
        let codes = encode(&input);
        assert!(codes.len() < 100, "got {} codes", codes.len());
    }

    #[test]
    fn test_encode_emits_only_assigned_codes() {
        // One entry is added per emitted code, so the code at position i can
        // reference at most entry 256 + i - 1.
        let codes = encode(b"TOBEORNOTTOBEORTOBEORNOT");
        for (i, &code) in codes.iter().enumerate() {
            assert!(usize::from(code) < 256 + i);
        }
    }
}
