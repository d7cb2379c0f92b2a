//! The Security Manager cryptographic functions (Core Spec Vol 3, Part H, 2.2).
//!
//! Every input and output here is in toolbox order: least-significant octet
//! first, the reverse of how the Core Specification prints its values. Each
//! function flips its fields back to spec order, concatenates them the way
//! the specification lists them, and flips the result on the way out. Use
//! [`to_toolbox_order`](crate::order::to_toolbox_order) to feed printed
//! vectors in.

use aes_core::{encrypt_block, expand_key, Aes128Key, Block, RoundKeys};

use crate::cmac::{self, BLOCK_LEN};
use crate::error::Error;
use crate::order::{reversed, to_spec_order, to_toolbox_order, SpecMessage};
use crate::{Address, DhKey, Hash24, IoCap, KeyId, Octet16, Prand};

/// f5 SALT, spec order.
const F5_SALT: Octet16 = [
    0x6c, 0x88, 0x83, 0x91, 0xaa, 0xf5, 0xa5, 0x38, 0x60, 0x37, 0x0b, 0xdb, 0x5a, 0x60, 0x83, 0xbe,
];

/// f5 keyID "btle", spec order.
const F5_KEY_ID: [u8; 4] = *b"btle";

/// f5 output length in bits (256), spec order.
const F5_LENGTH: [u8; 2] = [0x01, 0x00];

/// Turns a four-character label into a toolbox-order h6 keyID.
pub const fn key_id(label: &[u8; 4]) -> KeyId {
    [label[3], label[2], label[1], label[0]]
}

/// Turns a four-character label into a toolbox-order h7 SALT.
///
/// The label occupies the four least significant octets; the rest are zero.
pub const fn salt(label: &[u8; 4]) -> Octet16 {
    let mut out = [0u8; 16];
    out[0] = label[3];
    out[1] = label[2];
    out[2] = label[1];
    out[3] = label[0];
    out
}

/// keyID "tmp1".
pub const KEY_ID_TMP1: KeyId = key_id(b"tmp1");
/// keyID "tmp2".
pub const KEY_ID_TMP2: KeyId = key_id(b"tmp2");
/// keyID "lebr".
pub const KEY_ID_LEBR: KeyId = key_id(b"lebr");
/// keyID "brle".
pub const KEY_ID_BRLE: KeyId = key_id(b"brle");
/// SALT "tmp1" for h7.
pub const SALT_TMP1: Octet16 = salt(b"tmp1");
/// SALT "tmp2" for h7.
pub const SALT_TMP2: Octet16 = salt(b"tmp2");

/// Expands a key given as a slice.
pub fn aes_set_key(key: &[u8]) -> Result<RoundKeys, Error> {
    Ok(aes_core::set_key(key)?)
}

/// Encrypts one block with an expanded key. No byte-order handling.
#[inline]
pub fn aes_encrypt(round_keys: &RoundKeys, plaintext: &Block) -> Block {
    encrypt_block(plaintext, round_keys)
}

/// AES-CMAC with a toolbox-order key and message.
///
/// The whole message buffer is one little-endian number, so it is reversed
/// as a unit rather than block by block.
pub fn aes_cmac(key: &Octet16, message: &[u8]) -> Octet16 {
    to_toolbox_order(cmac::cmac(&to_spec_order(*key), &reversed(message)))
}

fn cmac_spec(key: &Octet16, message: &SpecMessage) -> Octet16 {
    cmac::cmac(&to_spec_order(*key), message.as_bytes())
}

/// Security function *e* over toolbox-order values.
fn e(key: &Octet16, plaintext: &Octet16) -> Octet16 {
    let round_keys = expand_key(&Aes128Key::from(to_spec_order(*key)));
    to_toolbox_order(encrypt_block(&to_spec_order(*plaintext), &round_keys))
}

/// AES-128 of a message of at most one block.
///
/// The message is zero-extended at its most significant end. Longer
/// messages are refused rather than truncated.
pub fn aes_128(key: &Octet16, message: &[u8]) -> Result<Octet16, Error> {
    if message.len() > BLOCK_LEN {
        return Err(Error::MessageTooLong {
            max: BLOCK_LEN,
            actual: message.len(),
        });
    }
    let mut block = [0u8; 16];
    block[..message.len()].copy_from_slice(message);
    Ok(e(key, &block))
}

/// LE Secure Connections confirm value generation function.
///
/// Computes `AES-CMAC_X(U || V || Z)`. Which values go in depends on the
/// association model:
///
/// * Numeric Comparison / Just Works: `Ca = f4(PKax, PKbx, Na, 0)`,
///   `Cb = f4(PKbx, PKax, Nb, 0)`
/// * Out of Band: `Ca = f4(PKax, PKax, ra, 0)`, `Cb = f4(PKbx, PKbx, rb, 0)`
/// * Passkey Entry: `Cai = f4(PKax, PKbx, Nai, rai)`, `Cbi = f4(PKbx, PKax, Nbi, rbi)`
///   where `rai`/`rbi` is `0x80` or `0x81` depending on bit *i* of the passkey.
pub fn f4(u: &DhKey, v: &DhKey, x: &Octet16, z: u8) -> Octet16 {
    let message = SpecMessage::with_capacity(65)
        .field(u)
        .field(v)
        .literal(&[z]);
    to_toolbox_order(cmac_spec(x, &message))
}

/// Keys produced by [`f5`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct F5Keys {
    /// Key for the f6 check values.
    pub mac_key: Octet16,
    /// The long term key.
    pub ltk: Octet16,
}

/// LE Secure Connections key generation function.
///
/// `w` is the shared DHKey, `n1`/`n2` the initiator and responder nonces,
/// and `a1`/`a2` the initiator and responder addresses. The most significant
/// octet of each address is its type: `0x00` public, `0x01` random.
///
/// The DHKey is first compressed into `T = AES-CMAC_SALT(W)`. Both outputs
/// are then `AES-CMAC_T(Counter || "btle" || N1 || N2 || A1 || A2 || 256)`,
/// with Counter 0 for the MacKey and 1 for the LTK.
pub fn f5(w: &DhKey, n1: &Octet16, n2: &Octet16, a1: &Address, a2: &Address) -> F5Keys {
    let t = cmac::cmac(&F5_SALT, SpecMessage::with_capacity(32).field(w).as_bytes());

    let derive = |counter: u8| {
        let message = SpecMessage::with_capacity(53)
            .literal(&[counter])
            .literal(&F5_KEY_ID)
            .field(n1)
            .field(n2)
            .field(a1)
            .field(a2)
            .literal(&F5_LENGTH);
        to_toolbox_order(cmac::cmac(&t, message.as_bytes()))
    };

    F5Keys {
        mac_key: derive(0),
        ltk: derive(1),
    }
}

/// LE Secure Connections check value generation function.
///
/// Computes `AES-CMAC_W(N1 || N2 || R || IOcap || A1 || A2)` where `w` is the
/// MacKey from [`f5`]. For `Ea` the inputs are `(Na, Nb, rb, IOcapA, A, B)`;
/// for `Eb` they are `(Nb, Na, ra, IOcapB, B, A)`. `r` is zero for Numeric
/// Comparison and Just Works, the OOB random value for Out of Band, and the
/// passkey for Passkey Entry.
pub fn f6(
    w: &Octet16,
    n1: &Octet16,
    n2: &Octet16,
    r: &Octet16,
    io_cap: &IoCap,
    a1: &Address,
    a2: &Address,
) -> Octet16 {
    let message = SpecMessage::with_capacity(65)
        .field(n1)
        .field(n2)
        .field(r)
        .field(io_cap)
        .field(a1)
        .field(a2);
    to_toolbox_order(cmac_spec(w, &message))
}

/// LE Secure Connections numeric comparison value generation function.
///
/// Takes the 32 least significant bits of `AES-CMAC_X(U || V || Y)` and
/// reduces them modulo 10^6, giving the six digits shown to the user.
pub fn g2(u: &DhKey, v: &DhKey, x: &Octet16, y: &Octet16) -> u32 {
    let message = SpecMessage::with_capacity(80).field(u).field(v).field(y);
    let mac = cmac_spec(x, &message);
    let low = u32::from_be_bytes([mac[12], mac[13], mac[14], mac[15]]);
    low % 1_000_000
}

/// Link key conversion function h6: `AES-CMAC_W(keyID)`.
pub fn h6(w: &Octet16, key_id: &KeyId) -> Octet16 {
    to_toolbox_order(cmac_spec(w, &SpecMessage::with_capacity(4).field(key_id)))
}

/// Link key conversion function h7: `AES-CMAC_SALT(W)`.
///
/// Unlike [`h6`], the fixed value is the key and the secret is the message.
pub fn h7(salt: &Octet16, w: &Octet16) -> Octet16 {
    to_toolbox_order(cmac_spec(salt, &SpecMessage::with_capacity(16).field(w)))
}

/// Random address hash function.
///
/// `prand` is zero-extended to a block, encrypted under the IRK, and the
/// three least significant octets of the result form the hash.
pub fn ah(irk: &Octet16, prand: &Prand) -> Hash24 {
    let mut block = [0u8; 16];
    block[..3].copy_from_slice(prand);
    let out = e(irk, &block);
    [out[0], out[1], out[2]]
}
