//! Capacity-checked dictionaries shared by the encoder and decoder.
//!
//! Both directions start from the same 256 single-byte entries and assign
//! codes in strictly increasing insertion order from 256. Insertion refuses
//! to grow past [`MAX_DICTIONARY_SIZE`], which is what keeps every assigned
//! code representable in the 2-byte framed format.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::Code;

/// Hard ceiling on dictionary entries, implied by the 2-byte code width.
pub const MAX_DICTIONARY_SIZE: usize = 1 << 16;

/// Sequence-to-code mapping used while encoding.
#[derive(Debug, Clone)]
pub struct EncodeDictionary {
    codes: HashMap<Vec<u8>, Code>,
}

impl EncodeDictionary {
    /// Create a dictionary holding the 256 single-byte entries, each mapped
    /// to its own byte value.
    pub fn new() -> Self {
        let codes = (0..=u8::MAX).map(|byte| (vec![byte], Code::from(byte))).collect();
        Self { codes }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether growth has frozen at the capacity ceiling.
    pub fn is_full(&self) -> bool {
        self.codes.len() >= MAX_DICTIONARY_SIZE
    }

    pub fn get(&self, sequence: &[u8]) -> Option<Code> {
        self.codes.get(sequence).copied()
    }

    /// Register a sequence under the next unused code.
    ///
    /// Returns the assigned code, or `None` when the dictionary is full or
    /// the sequence is already present. Existing entries are never
    /// reassigned.
    pub fn insert(&mut self, sequence: &[u8]) -> Option<Code> {
        if self.is_full() {
            return None;
        }
        let next = self.codes.len() as Code;
        match self.codes.entry(sequence.to_vec()) {
            Entry::Vacant(slot) => {
                slot.insert(next);
                Some(next)
            }
            Entry::Occupied(_) => None,
        }
    }
}

impl Default for EncodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Code-to-sequence mapping used while decoding.
///
/// Codes are dense, so entries live in a `Vec` indexed by code value.
#[derive(Debug, Clone)]
pub struct DecodeDictionary {
    entries: Vec<Vec<u8>>,
}

impl DecodeDictionary {
    /// Create the inverse of [`EncodeDictionary::new`]: entry `b` holds the
    /// single byte `b` for every byte value.
    pub fn new() -> Self {
        let entries = (0..=u8::MAX).map(|byte| vec![byte]).collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether growth has frozen at the capacity ceiling.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_DICTIONARY_SIZE
    }

    /// The code the next insertion would receive.
    ///
    /// Returned as `usize` because the value one past the last assignable
    /// code (65536) does not fit in [`Code`].
    pub fn next_code(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, code: Code) -> Option<&[u8]> {
        self.entries.get(usize::from(code)).map(Vec::as_slice)
    }

    /// Append a sequence under the next unused code, mirroring
    /// [`EncodeDictionary::insert`]. Returns `None` once the dictionary is
    /// full.
    pub fn push(&mut self, sequence: Vec<u8>) -> Option<Code> {
        if self.is_full() {
            return None;
        }
        let code = self.entries.len() as Code;
        self.entries.push(sequence);
        Some(code)
    }
}

impl Default for DecodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}
