//! AES-128 key schedule and block encryption.

use crate::block::Block;
use crate::key::{Aes128Key, KeyLengthError, RoundKeys};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::sbox;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; 44];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 4..44 {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[(i / 4) - 1]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; 11];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for (word_idx, bytes) in round_key.chunks_exact_mut(4).enumerate() {
            bytes.copy_from_slice(&w[round * 4 + word_idx].to_be_bytes());
        }
    }

    RoundKeys(round_keys)
}

/// Expands a key given as a byte slice.
///
/// Anything other than exactly 16 bytes is rejected.
pub fn set_key(key: &[u8]) -> Result<RoundKeys, KeyLengthError> {
    Aes128Key::try_from(key).map(|key| expand_key(&key))
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state
}

/// Expands `key` and encrypts one block with it.
pub fn encrypt(key: &Block, block: &Block) -> Block {
    encrypt_block(block, &expand_key(&Aes128Key::from(*key)))
}
