//! The Bluetooth Security Manager cryptographic toolbox
//! (Core Spec Vol 3, Part H, section 2.2).
//!
//! Layers, leaves first:
//! - AES-128 from [`aes_core`].
//! - [`cmac`]: AES-CMAC over spec-order data.
//! - [`toolbox`]: `aes_cmac`, `aes_128`, `f4`, `f5`, `f6`, `g2`, `h6`, `h7`, `ah`.
//! - [`convert`]: LTK and link key conversion built from h6 and h7.
//!
//! The derivation functions take and return values least-significant octet
//! first. The Core Specification prints its sample data the other way
//! round; [`order`] holds the conversion between the two.
//!
//! Every function is a pure function of its arguments. There is no cached
//! state, so any of them can be called concurrently.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cmac;
pub mod convert;
mod error;
pub mod order;
pub mod toolbox;

pub use aes_core::{Block, RoundKeys};

pub use crate::convert::{link_key_to_ltk, ltk_to_link_key, Derivation, Direction};
pub use crate::error::Error;
pub use crate::toolbox::{
    aes_128, aes_cmac, aes_encrypt, aes_set_key, ah, f4, f5, f6, g2, h6, h7, F5Keys,
};

/// A 16-octet key, nonce or MAC.
pub type Octet16 = [u8; 16];
/// A P-256 public key x-coordinate or DHKey.
pub type DhKey = [u8; 32];
/// Address type octet followed by a 48-bit device address.
pub type Address = [u8; 7];
/// IO capability, OOB flag and authentication requirements.
pub type IoCap = [u8; 3];
/// h6 keyID.
pub type KeyId = [u8; 4];
/// Random part of a resolvable private address.
pub type Prand = [u8; 3];
/// Output of [`ah`].
pub type Hash24 = [u8; 3];
