//! Block representation helpers.

/// AES block of 16 bytes.
pub type Block = [u8; 16];

/// The all-zero block.
pub const ZERO_BLOCK: Block = [0u8; 16];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Returns `lhs ^ rhs` without touching either operand.
#[inline]
pub fn xor(lhs: &Block, rhs: &Block) -> Block {
    let mut out = *lhs;
    xor_in_place(&mut out, rhs);
    out
}
