//! Hex argument parsing and printing in either byte order.

use anyhow::{bail, Context, Result};
use sm_toolbox::order::{reversed, to_spec_order, to_toolbox_order};

/// Byte order used for hex arguments and printed results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Most significant octet first, as printed in the Core Specification.
    Spec,
    /// Least significant octet first, as the toolbox takes it.
    Toolbox,
}

impl Order {
    pub fn from_flag(toolbox_order: bool) -> Self {
        if toolbox_order {
            Order::Toolbox
        } else {
            Order::Spec
        }
    }
}

fn decode(name: &str, hex_str: &str) -> Result<Vec<u8>> {
    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(cleaned).with_context(|| format!("decode {name} hex"))
}

/// Parses a fixed-width field and returns it in toolbox order.
pub fn field<const N: usize>(name: &str, hex_str: &str, order: Order) -> Result<[u8; N]> {
    let bytes = decode(name, hex_str)?;
    let Ok(value) = <[u8; N]>::try_from(bytes.as_slice()) else {
        bail!(
            "{name} must be {} bytes ({} hex characters), got {}",
            N,
            N * 2,
            bytes.len()
        );
    };
    Ok(match order {
        Order::Spec => to_toolbox_order(value),
        Order::Toolbox => value,
    })
}

/// Parses a variable-length message and returns it in toolbox order.
pub fn message(name: &str, hex_str: &str, order: Order) -> Result<Vec<u8>> {
    let bytes = decode(name, hex_str)?;
    Ok(match order {
        Order::Spec => reversed(&bytes),
        Order::Toolbox => bytes,
    })
}

/// Formats a toolbox-order value for output.
pub fn show<const N: usize>(value: [u8; N], order: Order) -> String {
    match order {
        Order::Spec => hex::encode(to_spec_order(value)),
        Order::Toolbox => hex::encode(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_order_fields_are_reversed() {
        let value: [u8; 3] = field("prand", "708194", Order::Spec).unwrap();
        assert_eq!(value, [0x94, 0x81, 0x70]);
        assert_eq!(show(value, Order::Spec), "708194");
        assert_eq!(show(value, Order::Toolbox), "948170");
    }

    #[test]
    fn toolbox_order_fields_are_verbatim() {
        let value: [u8; 2] = field("x", "0102", Order::Toolbox).unwrap();
        assert_eq!(value, [0x01, 0x02]);
    }

    #[test]
    fn whitespace_is_ignored() {
        let value: [u8; 4] = field("key id", "6c65 6272", Order::Spec).unwrap();
        assert_eq!(value, *b"rbel");
    }

    #[test]
    fn wrong_width_names_the_field() {
        let err = field::<7>("a1", "0011", Order::Spec).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("a1"), "{text}");
        assert!(text.contains("7 bytes"), "{text}");
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(field::<1>("z", "zz", Order::Spec).is_err());
    }

    #[test]
    fn messages_reverse_as_a_whole() {
        assert_eq!(message("m", "010203", Order::Spec).unwrap(), vec![3, 2, 1]);
        assert!(message("m", "", Order::Spec).unwrap().is_empty());
    }
}
