//! Cross-transport key derivation between the LE LTK and the BR/EDR link key.
//!
//! Each direction is two steps: an intermediate key from either h7 with a
//! fixed SALT or h6 with a `tmpN` keyID, then h6 with the direction label.
//! The directions use different constants and are not inverses of each other.

use tracing::debug;

use crate::toolbox::{
    h6, h7, KEY_ID_BRLE, KEY_ID_LEBR, KEY_ID_TMP1, KEY_ID_TMP2, SALT_TMP1, SALT_TMP2,
};
use crate::{KeyId, Octet16};

/// How the intermediate key is derived.
///
/// Both sides must agree; `H7` is used when both devices set the CT2 bit
/// during pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Derivation {
    /// `h6(key, "tmpN")`.
    H6,
    /// `h7(SALT, key)`.
    H7,
}

impl From<bool> for Derivation {
    fn from(use_h7: bool) -> Self {
        if use_h7 {
            Derivation::H7
        } else {
            Derivation::H6
        }
    }
}

/// Which way a key is being converted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// LTK to BR/EDR link key.
    LeToBrEdr,
    /// BR/EDR link key to LTK.
    BrEdrToLe,
}

impl Direction {
    /// SALT used when deriving through h7.
    pub fn salt(self) -> Octet16 {
        match self {
            Direction::LeToBrEdr => SALT_TMP1,
            Direction::BrEdrToLe => SALT_TMP2,
        }
    }

    /// keyID used when deriving through h6.
    pub fn tmp_key_id(self) -> KeyId {
        match self {
            Direction::LeToBrEdr => KEY_ID_TMP1,
            Direction::BrEdrToLe => KEY_ID_TMP2,
        }
    }

    /// keyID of the final h6 step.
    pub fn label(self) -> KeyId {
        match self {
            Direction::LeToBrEdr => KEY_ID_LEBR,
            Direction::BrEdrToLe => KEY_ID_BRLE,
        }
    }
}

/// First step of a conversion.
pub fn intermediate_key(key: &Octet16, direction: Direction, derivation: Derivation) -> Octet16 {
    debug!(?direction, ?derivation, "deriving intermediate key");
    match derivation {
        Derivation::H7 => h7(&direction.salt(), key),
        Derivation::H6 => h6(key, &direction.tmp_key_id()),
    }
}

/// Converts `key` in the given direction.
pub fn convert(key: &Octet16, direction: Direction, derivation: Derivation) -> Octet16 {
    let intermediate = intermediate_key(key, direction, derivation);
    h6(&intermediate, &direction.label())
}

/// Derives the BR/EDR link key from an LE LTK.
pub fn ltk_to_link_key(ltk: &Octet16, derivation: impl Into<Derivation>) -> Octet16 {
    convert(ltk, Direction::LeToBrEdr, derivation.into())
}

/// Derives the LE LTK from a BR/EDR link key.
pub fn link_key_to_ltk(link_key: &Octet16, derivation: impl Into<Derivation>) -> Octet16 {
    convert(link_key, Direction::BrEdrToLe, derivation.into())
}
