//! AES-CMAC (NIST SP 800-38B, RFC 4493) over spec-order data.
//!
//! Everything in this module works on values exactly as the RFC and the Core
//! Specification print them. The toolbox-order entry point is
//! [`aes_cmac`](crate::aes_cmac).

use aes_core::{
    encrypt_block, expand_key, xor, xor_in_place, Aes128Key, Block, RoundKeys, ZERO_BLOCK,
};
use tracing::trace;

/// Length of an AES block in bytes.
pub const BLOCK_LEN: usize = 16;

/// Reduction constant for doubling in GF(2^128).
const RB: u128 = 0x87;

/// The two CMAC subkeys derived from a cipher key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subkeys {
    /// Masks a complete final block.
    pub k1: Block,
    /// Masks a padded (or empty) final block.
    pub k2: Block,
}

/// Multiplies `block` by `x` in GF(2^128).
///
/// A one-bit left shift across the whole block; when the bit shifted out
/// was set, `0x87` is folded into the low byte.
pub fn dbl(block: &Block) -> Block {
    let value = u128::from_be_bytes(*block);
    let shifted = value << 1;
    let doubled = if value >> 127 == 0 { shifted } else { shifted ^ RB };
    doubled.to_be_bytes()
}

/// Derives K1 and K2 from an expanded key.
pub fn subkeys(round_keys: &RoundKeys) -> Subkeys {
    let l = encrypt_block(&ZERO_BLOCK, round_keys);
    let k1 = dbl(&l);
    let k2 = dbl(&k1);
    Subkeys { k1, k2 }
}

/// Pads a partial block with `0x80` followed by zeros.
fn pad(partial: &[u8]) -> Block {
    let mut block = ZERO_BLOCK;
    block[..partial.len()].copy_from_slice(partial);
    block[partial.len()] = 0x80;
    block
}

/// Computes the CMAC of `message` under `key`.
pub fn cmac(key: &Block, message: &[u8]) -> Block {
    cmac_with_schedule(&expand_key(&Aes128Key::from(*key)), message)
}

/// Computes the CMAC of `message` with an already expanded key.
///
/// An empty message is one fully padded block.
pub fn cmac_with_schedule(round_keys: &RoundKeys, message: &[u8]) -> Block {
    let Subkeys { k1, k2 } = subkeys(round_keys);

    let blocks = message.len().div_ceil(BLOCK_LEN).max(1);
    let (head, tail) = message.split_at((blocks - 1) * BLOCK_LEN);

    let last = match <[u8; BLOCK_LEN]>::try_from(tail) {
        Ok(complete) => xor(&complete, &k1),
        Err(_) => xor(&pad(tail), &k2),
    };

    trace!(
        len = message.len(),
        blocks,
        padded = tail.len() != BLOCK_LEN,
        "aes-cmac"
    );

    let mut state = head
        .chunks_exact(BLOCK_LEN)
        .fold(ZERO_BLOCK, |mut state, chunk| {
            for (s, m) in state.iter_mut().zip(chunk) {
                *s ^= *m;
            }
            encrypt_block(&state, round_keys)
        });

    xor_in_place(&mut state, &last);
    encrypt_block(&state, round_keys)
}
