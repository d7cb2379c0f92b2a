//! AES-128 block cipher used by the Security Manager cryptographic toolbox.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule for AES-128.
//! - Single-block forward encryption.
//! - Public types shared across the workspace.
//!
//! Bytes are processed in the order the caller supplies them; any
//! byte-order convention belongs to the layers above. The implementation
//! aims for clarity and testability rather than constant-time guarantees;
//! it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::block::{xor, xor_in_place, Block, ZERO_BLOCK};
pub use crate::cipher::{encrypt, encrypt_block, expand_key, set_key};
pub use crate::key::{Aes128Key, KeyLengthError, RoundKeys};
