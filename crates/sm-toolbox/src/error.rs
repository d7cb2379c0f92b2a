//! Errors raised at the toolbox boundary.

use aes_core::KeyLengthError;
use thiserror::Error;

/// Caller contract violations detected by the toolbox.
///
/// Fixed-width fields are arrays, so only slice-taking entry points can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A key slice was not 16 bytes long.
    #[error(transparent)]
    InvalidKeyLength(#[from] KeyLengthError),
    /// A single-block input was longer than one AES block.
    #[error("message of {actual} bytes does not fit in a {max}-byte block")]
    MessageTooLong {
        /// Largest accepted length.
        max: usize,
        /// Length that was supplied.
        actual: usize,
    },
}
