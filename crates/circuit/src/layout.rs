//! Declarative bit layouts for packed storage words.
//!
//! Comet packs several integers into each 32-byte storage slot. A
//! [`SlotLayout`] describes that packing as a list of [`FieldSpec`]s and
//! decodes a word the way the circuit does: the word is split into 256
//! little-endian bits and every field is recomposed from its own bit window.
//!
//! # Offsets
//!
//! Offsets follow Solidity's storage packing order: byte offset 0 is the
//! *least* significant byte of the word, and the first declared member of a
//! packed struct occupies the lowest-order bytes.
//!
//! ```text
//! slot1 = 0x000066edd86b | 000000000000001565bc751401 | 000000000000001b59f181a092
//!           (unused)       totalBorrowBase (13 bytes)   totalSupplyBase (13 bytes)
//!                          offset 13                    offset 0
//! ```

use std::ops::Range;

use alloy_primitives::{B256, U256};

use crate::error::{CircuitError, Result};
use crate::math::MAX_BITS;

/// Size of a storage word in bytes
pub const WORD_BYTES: usize = 32;

/// Size of a storage word in bits
pub const WORD_BITS: usize = WORD_BYTES * 8;

/// Field layout of Comet storage slot 0
pub const SLOT0_FIELDS: [FieldSpec; 2] = [
    FieldSpec::new("baseSupplyIndex", 0, 8),
    FieldSpec::new("baseBorrowIndex", 8, 8),
];

/// Field layout of Comet storage slot 1
pub const SLOT1_FIELDS: [FieldSpec; 2] = [
    FieldSpec::new("totalSupplyBase", 0, 13),
    FieldSpec::new("totalBorrowBase", 13, 13),
];

/// A named unsigned integer packed into a storage word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, as declared in the contract
    pub name: &'static str,
    /// Byte offset from the least significant byte
    pub offset: usize,
    /// Width in bytes
    pub width: usize,
}

impl FieldSpec {
    /// Creates a field descriptor. Validation happens in [`SlotLayout::new`].
    pub const fn new(name: &'static str, offset: usize, width: usize) -> Self {
        Self {
            name,
            offset,
            width,
        }
    }

    /// Bit window of this field in the little-endian bit decomposition
    pub fn bit_range(&self) -> Range<usize> {
        self.offset.saturating_mul(8)..self.end().saturating_mul(8)
    }

    /// Byte range of this field in the big-endian word (index 0 is most significant)
    pub fn byte_range(&self) -> Range<usize> {
        WORD_BYTES.saturating_sub(self.end())..WORD_BYTES.saturating_sub(self.offset)
    }

    /// The raw big-endian bytes of this field within `word`
    pub fn bytes<'a>(&self, word: &'a B256) -> &'a [u8] {
        &word.as_slice()[self.byte_range()]
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(CircuitError::EmptyField { name: self.name });
        }
        if self.offset.checked_add(self.width).is_none_or(|end| end > WORD_BYTES) {
            return Err(CircuitError::FieldOutOfBounds {
                name: self.name,
                offset: self.offset,
                width: self.width,
            });
        }
        if self.width.checked_mul(8).is_none_or(|bits| bits > MAX_BITS) {
            return Err(CircuitError::FieldTooWide {
                name: self.name,
                width: self.width,
                max_bits: MAX_BITS,
            });
        }
        Ok(())
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }

    /// One past the last byte offset, saturating for descriptors not yet validated
    fn end(&self) -> usize {
        self.offset.saturating_add(self.width)
    }
}

/// Decode result: one integer per field, in layout order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSlot {
    fields: Vec<(&'static str, U256)>,
}

impl DecodedSlot {
    /// Look a field up by name
    pub fn get(&self, name: &str) -> Option<U256> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    }

    /// All `(name, value)` pairs in layout order
    pub fn fields(&self) -> &[(&'static str, U256)] {
        &self.fields
    }

    /// The values in layout order, as a fixed-size array
    pub fn into_array<const N: usize>(self) -> Result<[U256; N]> {
        let actual = self.fields.len();
        let values: Vec<U256> = self.fields.into_iter().map(|(_, value)| value).collect();
        values
            .try_into()
            .map_err(|_| CircuitError::FieldCountMismatch {
                expected: N,
                actual,
            })
    }
}

/// A validated set of non-overlapping fields within one storage word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLayout {
    fields: Vec<FieldSpec>,
}

impl SlotLayout {
    /// Builds a layout, rejecting fields that leave the word, exceed the
    /// working width, have zero width, or overlap each other.
    pub fn new(fields: &[FieldSpec]) -> Result<Self> {
        for (i, field) in fields.iter().enumerate() {
            field.validate()?;
            if let Some(other) = fields[..i].iter().find(|other| other.overlaps(field)) {
                return Err(CircuitError::OverlappingFields {
                    first: other.name,
                    second: field.name,
                });
            }
        }
        Ok(Self {
            fields: fields.to_vec(),
        })
    }

    /// Layout of Comet slot 0
    pub fn slot0() -> Result<Self> {
        Self::new(&SLOT0_FIELDS)
    }

    /// Layout of Comet slot 1
    pub fn slot1() -> Result<Self> {
        Self::new(&SLOT1_FIELDS)
    }

    /// The field descriptors, in layout order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Decode every field of `word`
    pub fn decode(&self, word: &B256) -> DecodedSlot {
        let bits = to_bits(word);
        let fields = self
            .fields
            .iter()
            .map(|field| (field.name, from_bits(&bits[field.bit_range()])))
            .collect();
        DecodedSlot { fields }
    }

    /// Pack one value per field into a word. Bytes not covered by any field are zero.
    pub fn encode(&self, values: &[U256]) -> Result<B256> {
        if values.len() != self.fields.len() {
            return Err(CircuitError::FieldCountMismatch {
                expected: self.fields.len(),
                actual: values.len(),
            });
        }

        let mut bits = [false; WORD_BITS];
        for (field, value) in self.fields.iter().zip(values) {
            if value.bit_len() > field.width * 8 {
                return Err(CircuitError::FieldValueTooLarge {
                    name: field.name,
                    value: *value,
                    width: field.width,
                });
            }
            for (i, bit) in field.bit_range().enumerate() {
                bits[bit] = value.bit(i);
            }
        }

        Ok(B256::from(from_bits(&bits).to_be_bytes::<WORD_BYTES>()))
    }
}

/// Little-endian bit decomposition of a big-endian word: `bits[0]` is the
/// least significant bit.
pub fn to_bits(word: &B256) -> [bool; WORD_BITS] {
    let mut bits = [false; WORD_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        let byte = word[WORD_BYTES - 1 - i / 8];
        *bit = (byte >> (i % 8)) & 1 == 1;
    }
    bits
}

/// Recompose an unsigned integer from little-endian bits.
///
/// Bits beyond the 256th are ignored.
pub fn from_bits(bits: &[bool]) -> U256 {
    bits.iter()
        .take(WORD_BITS)
        .enumerate()
        .filter(|(_, bit)| **bit)
        .fold(U256::ZERO, |acc, (i, _)| acc | (U256::from(1u8) << i))
}
