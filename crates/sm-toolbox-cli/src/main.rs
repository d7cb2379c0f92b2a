//! Command-line interface for the Security Manager cryptographic toolbox.

#![forbid(unsafe_code)]

mod hexarg;
mod selftest;

use aes_core::{encrypt_block, set_key};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sm_toolbox::convert::{convert, Direction};
use sm_toolbox::{aes_128, aes_cmac, ah, f4, f5, f6, g2, h6, h7, Derivation};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::hexarg::{field, message, show, Order};

/// Security Manager toolbox CLI.
///
/// Hex values are read and printed most significant octet first, the way
/// the Core Specification prints them, unless `--toolbox-order` is given.
#[derive(Parser)]
#[command(
    name = "smtb",
    version,
    author,
    about = "Bluetooth Security Manager cryptographic toolbox"
)]
struct Cli {
    /// Take and print hex values least significant octet first.
    #[arg(long, global = true, default_value_t = false)]
    toolbox_order: bool,
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    /// LTK to BR/EDR link key.
    LeToBr,
    /// BR/EDR link key to LTK.
    BrToLe,
}

impl From<DirectionArg> for Direction {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::LeToBr => Direction::LeToBrEdr,
            DirectionArg::BrToLe => Direction::BrEdrToLe,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block with AES-128; bytes are used exactly as given.
    Aes {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block: String,
    },
    /// AES-CMAC over an arbitrary message.
    Cmac {
        /// 16-byte key.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Message; empty when omitted.
        #[arg(long, value_name = "HEX", default_value = "")]
        message: String,
    },
    /// AES-128 of a message of up to 16 bytes, zero-extended.
    Aes128 {
        /// 16-byte key.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Message of at most 16 bytes.
        #[arg(long, value_name = "HEX")]
        message: String,
    },
    /// Confirm value f4(U, V, X, Z).
    F4 {
        #[arg(long, value_name = "HEX")]
        u: String,
        #[arg(long, value_name = "HEX")]
        v: String,
        #[arg(long, value_name = "HEX")]
        x: String,
        /// One byte.
        #[arg(long, value_name = "HEX", default_value = "00")]
        z: String,
    },
    /// MacKey and LTK f5(W, N1, N2, A1, A2).
    F5 {
        #[arg(long, value_name = "HEX")]
        w: String,
        #[arg(long, value_name = "HEX")]
        n1: String,
        #[arg(long, value_name = "HEX")]
        n2: String,
        /// Address type octet followed by six address octets.
        #[arg(long, value_name = "HEX")]
        a1: String,
        #[arg(long, value_name = "HEX")]
        a2: String,
    },
    /// Check value f6(W, N1, N2, R, IOcap, A1, A2).
    F6 {
        #[arg(long, value_name = "HEX")]
        w: String,
        #[arg(long, value_name = "HEX")]
        n1: String,
        #[arg(long, value_name = "HEX")]
        n2: String,
        #[arg(long, value_name = "HEX")]
        r: String,
        #[arg(long, value_name = "HEX")]
        io_cap: String,
        #[arg(long, value_name = "HEX")]
        a1: String,
        #[arg(long, value_name = "HEX")]
        a2: String,
    },
    /// Six-digit numeric comparison value g2(U, V, X, Y).
    G2 {
        #[arg(long, value_name = "HEX")]
        u: String,
        #[arg(long, value_name = "HEX")]
        v: String,
        #[arg(long, value_name = "HEX")]
        x: String,
        #[arg(long, value_name = "HEX")]
        y: String,
    },
    /// h6(W, keyID).
    H6 {
        #[arg(long, value_name = "HEX")]
        w: String,
        /// Four bytes, e.g. 6c656272 for "lebr".
        #[arg(long, value_name = "HEX")]
        key_id: String,
    },
    /// h7(SALT, W).
    H7 {
        #[arg(long, value_name = "HEX")]
        salt: String,
        #[arg(long, value_name = "HEX")]
        w: String,
    },
    /// Random address hash ah(IRK, prand).
    Ah {
        #[arg(long, value_name = "HEX")]
        irk: String,
        #[arg(long, value_name = "HEX")]
        prand: String,
    },
    /// Convert between an LE LTK and a BR/EDR link key.
    Convert {
        #[arg(long, value_enum)]
        direction: DirectionArg,
        /// Key to convert.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// Derive the intermediate key with h7 (both sides set CT2).
        #[arg(long, default_value_t = false)]
        h7: bool,
    },
    /// Run the Appendix D sample data through every function.
    Selftest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let order = Order::from_flag(cli.toolbox_order);
    debug!(?order, "parsed arguments");

    for line in run(cli.command, order)? {
        println!("{line}");
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands, order: Order) -> Result<Vec<String>> {
    let out = match command {
        Commands::Aes { key, block } => {
            let round_keys = set_key(&hex::decode(key.trim()).context("decode key hex")?)?;
            let block: [u8; 16] = field("block", &block, Order::Toolbox)?;
            vec![hex::encode(encrypt_block(&block, &round_keys))]
        }
        Commands::Cmac { key, message: m } => {
            let key: [u8; 16] = field("key", &key, order)?;
            let m = message("message", &m, order)?;
            vec![show(aes_cmac(&key, &m), order)]
        }
        Commands::Aes128 { key, message: m } => {
            let key: [u8; 16] = field("key", &key, order)?;
            let m = message("message", &m, order)?;
            vec![show(aes_128(&key, &m)?, order)]
        }
        Commands::F4 { u, v, x, z } => {
            let [z] = field::<1>("z", &z, order)?;
            let out = f4(
                &field("u", &u, order)?,
                &field("v", &v, order)?,
                &field("x", &x, order)?,
                z,
            );
            vec![show(out, order)]
        }
        Commands::F5 { w, n1, n2, a1, a2 } => {
            let keys = f5(
                &field("w", &w, order)?,
                &field("n1", &n1, order)?,
                &field("n2", &n2, order)?,
                &field("a1", &a1, order)?,
                &field("a2", &a2, order)?,
            );
            vec![
                format!("mac_key: {}", show(keys.mac_key, order)),
                format!("ltk: {}", show(keys.ltk, order)),
            ]
        }
        Commands::F6 {
            w,
            n1,
            n2,
            r,
            io_cap,
            a1,
            a2,
        } => {
            let out = f6(
                &field("w", &w, order)?,
                &field("n1", &n1, order)?,
                &field("n2", &n2, order)?,
                &field("r", &r, order)?,
                &field("io_cap", &io_cap, order)?,
                &field("a1", &a1, order)?,
                &field("a2", &a2, order)?,
            );
            vec![show(out, order)]
        }
        Commands::G2 { u, v, x, y } => {
            let out = g2(
                &field("u", &u, order)?,
                &field("v", &v, order)?,
                &field("x", &x, order)?,
                &field("y", &y, order)?,
            );
            vec![format!("{out:06}")]
        }
        Commands::H6 { w, key_id } => {
            let out = h6(&field("w", &w, order)?, &field("key_id", &key_id, order)?);
            vec![show(out, order)]
        }
        Commands::H7 { salt, w } => {
            let out = h7(&field("salt", &salt, order)?, &field("w", &w, order)?);
            vec![show(out, order)]
        }
        Commands::Ah { irk, prand } => {
            let out = ah(&field("irk", &irk, order)?, &field("prand", &prand, order)?);
            vec![show(out, order)]
        }
        Commands::Convert { direction, key, h7 } => {
            let out = convert(
                &field("key", &key, order)?,
                direction.into(),
                Derivation::from(h7),
            );
            vec![show(out, order)]
        }
        Commands::Selftest => {
            selftest::run()?;
            Vec::new()
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_args(args: &[&str]) -> Result<Vec<String>> {
        let cli = Cli::try_parse_from(args)?;
        run(cli.command, Order::from_flag(cli.toolbox_order))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn aes_uses_bytes_as_given() {
        let out = run_args(&[
            "smtb",
            "aes",
            "--key",
            "000102030405060708090a0b0c0d0e0f",
            "--block",
            "00112233445566778899aabbccddeeff",
        ])
        .unwrap();
        assert_eq!(out, vec!["69c4e0d86a7b0430d8cdb78070b4c55a"]);
    }

    #[test]
    fn empty_cmac_in_spec_order() {
        let out = run_args(&["smtb", "cmac", "--key", "2b7e151628aed2a6abf7158809cf4f3c"]).unwrap();
        assert_eq!(out, vec!["bb1d6929e95937287fa37d129b756746"]);
    }

    #[test]
    fn toolbox_order_flag_takes_values_verbatim() {
        let out = run_args(&[
            "smtb",
            "--toolbox-order",
            "h6",
            "--w",
            "9b7d390aa610103405adc857a33402ec",
            "--key-id",
            "7262656c",
        ])
        .unwrap();
        assert_eq!(out, vec!["9963b180e2a9d3e81cc96de702e19a2d"]);
    }

    #[test]
    fn convert_matches_sample_data() {
        let out = run_args(&[
            "smtb",
            "convert",
            "--direction",
            "le-to-br",
            "--key",
            "368df9bce3264b58bd066c33334fbf64",
            "--h7",
        ])
        .unwrap();
        assert_eq!(out, vec!["287ad379dca402530a39f1f43047b835"]);
    }

    #[test]
    fn g2_prints_six_digits() {
        let out = run_args(&[
            "smtb",
            "g2",
            "--u",
            "20b003d2f297be2c5e2c83a7e9f9a5b9eff49111acf4fddbcc0301480e359de6",
            "--v",
            "55188b3d32f6bb9a900afcfbeed4e72a59cb9ac2f19d7cfb6b4fdd49f47fc5fd",
            "--x",
            "d5cb8454d177733effffb2ec712baeab",
            "--y",
            "a6e8e7cc25a75f6e216583f7ff3dc4cf",
        ])
        .unwrap();
        assert_eq!(out, vec!["938554"]);
    }

    #[test]
    fn short_fields_are_rejected() {
        let err = run_args(&[
            "smtb", "f5", "--w", "00", "--n1", "00", "--n2", "00", "--a1", "00", "--a2", "00",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("w must be 32 bytes"), "{err}");
    }

    #[test]
    fn oversized_aes_128_message_is_an_error() {
        let result = run_args(&[
            "smtb",
            "aes128",
            "--key",
            "00000000000000000000000000000000",
            "--message",
            "0000000000000000000000000000000000",
        ]);
        assert!(result.is_err());
    }
}
