//! Key types for AES-128.

use thiserror::Error;

use crate::block::Block;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// Raised when a key slice is not exactly 16 bytes long.
///
/// Only 128-bit keys are supported; 192 and 256-bit keys are rejected
/// like any other length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("AES-128 key must be 16 bytes, got {actual}")]
pub struct KeyLengthError {
    /// Length of the rejected key slice.
    pub actual: usize,
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = KeyLengthError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(value)
            .map(Self)
            .map_err(|_| KeyLengthError {
                actual: value.len(),
            })
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}
