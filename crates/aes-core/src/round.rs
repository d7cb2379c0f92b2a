//! AES round transformations.

use crate::block::{xor_in_place, Block};
use crate::sbox::sbox;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Performs ShiftRows in place.
///
/// The state is column-major: byte `4 * c + r` holds row `r` of column `c`,
/// and row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 0..4 {
            state[col * 4 + row] = src[((col + row) % 4) * 4 + row];
        }
    }
}

fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        mix_single_column(&mut column);
        chunk.copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_rows_moves_rows_left() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn mix_columns_fips_example() {
        // FIPS-197 round 1 of Appendix B: column 0 before and after MixColumns.
        let mut state: Block = [0u8; 16];
        state[..4].copy_from_slice(&[0xd4, 0xbf, 0x5d, 0x30]);
        mix_columns(&mut state);
        assert_eq!(&state[..4], &[0x04, 0x66, 0x81, 0xe5]);
    }

    #[test]
    fn xtime_reduces_on_carry() {
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
    }
}
