//! Conversion between spec order and toolbox order.
//!
//! The Core Specification prints every value most-significant octet first
//! ("spec order"). The toolbox functions take and return values the way the
//! pairing protocol carries them on the air, least-significant octet first
//! ("toolbox order"). The two differ only by reversal; this module is the
//! single place where that reversal is named.

/// Converts a spec-order value (as printed in the Core Specification) into
/// toolbox order.
#[inline]
pub fn to_toolbox_order<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    bytes.reverse();
    bytes
}

/// Converts a toolbox-order value back into spec order.
#[inline]
pub fn to_spec_order<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    bytes.reverse();
    bytes
}

/// Reverses a variable-length buffer, for messages handed to `aes_cmac`.
pub fn reversed(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Builds a CMAC message in spec order from toolbox-order fields.
///
/// Fields are appended in the order the Core Specification concatenates them
/// (most significant first), each one flipped back to spec order.
#[derive(Debug, Default)]
pub(crate) struct SpecMessage(Vec<u8>);

impl SpecMessage {
    pub(crate) fn with_capacity(len: usize) -> Self {
        Self(Vec::with_capacity(len))
    }

    /// Appends a toolbox-order field.
    pub(crate) fn field(mut self, bytes: &[u8]) -> Self {
        self.0.extend(bytes.iter().rev());
        self
    }

    /// Appends bytes that are already in spec order, such as label literals.
    pub(crate) fn literal(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
