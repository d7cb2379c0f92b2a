//! Known-answer checks from Core Spec Vol 3, Part H, Appendix D.

use anyhow::{bail, Result};
use sm_toolbox::{
    aes_128, aes_cmac, aes_encrypt, aes_set_key, ah, f4, f5, f6, g2, h6, h7, link_key_to_ltk,
    ltk_to_link_key, Derivation,
};
use tracing::{debug, info};

use crate::hexarg::{field, message, show, Order};

const CMAC_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const CMAC_M: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51\
                      30c81c46a35ce411e5fbc1191a0a52eff69f2445df4f9b17ad2b417be66c3710";
const U: &str = "20b003d2f297be2c5e2c83a7e9f9a5b9eff49111acf4fddbcc0301480e359de6";
const V: &str = "55188b3d32f6bb9a900afcfbeed4e72a59cb9ac2f19d7cfb6b4fdd49f47fc5fd";
const NA: &str = "d5cb8454d177733effffb2ec712baeab";
const NB: &str = "a6e8e7cc25a75f6e216583f7ff3dc4cf";
const DHKEY: &str = "ec0234a357c8ad05341010a60a397d9b99796b13b4f866f1868d34f373bfa698";
const A1: &str = "0056123737bfce";
const A2: &str = "00a713702dcfc1";
const W: &str = "ec0234a357c8ad05341010a60a397d9b";
const LTK: &str = "368df9bce3264b58bd066c33334fbf64";
const LINK_KEY: &str = "05040302010009080706050403020100";
const MAC_KEY: &str = "2965f176a1084a02fd3f6a20ce636e20";

struct Check {
    name: &'static str,
    expected: &'static str,
    run: fn() -> Result<String>,
}

fn spec<const N: usize>(hex_str: &str) -> Result<[u8; N]> {
    field("vector", hex_str, Order::Spec)
}

fn cmac_of(len: usize) -> Result<String> {
    let key: [u8; 16] = spec(CMAC_KEY)?;
    let m = message("m", &CMAC_M[..len * 2], Order::Spec)?;
    Ok(show(aes_cmac(&key, &m), Order::Spec))
}

fn checks() -> Vec<Check> {
    vec![
        Check {
            name: "D.1 aes-128",
            expected: "7df76b0c1ab899b33e42f047b91b546f",
            run: || {
                let key = hex::decode(CMAC_KEY)?;
                Ok(hex::encode(aes_encrypt(&aes_set_key(&key)?, &[0u8; 16])))
            },
        },
        Check {
            name: "D.1.1 aes-cmac, empty",
            expected: "bb1d6929e95937287fa37d129b756746",
            run: || cmac_of(0),
        },
        Check {
            name: "D.1.2 aes-cmac, 16 bytes",
            expected: "070a16b46b4d4144f79bdd9dd04a287c",
            run: || cmac_of(16),
        },
        Check {
            name: "D.1.3 aes-cmac, 40 bytes",
            expected: "dfa66747de9ae63030ca32611497c827",
            run: || cmac_of(40),
        },
        Check {
            name: "D.1.4 aes-cmac, 64 bytes",
            expected: "51f0bebf7e3b9d92fc49741779363cfe",
            run: || cmac_of(64),
        },
        Check {
            name: "D.2 f4",
            expected: "f2c916f107a9bd1cf1eda1bea974872d",
            run: || Ok(show(f4(&spec(U)?, &spec(V)?, &spec(NA)?, 0), Order::Spec)),
        },
        Check {
            name: "D.3 f5 MacKey",
            expected: MAC_KEY,
            run: || {
                let keys = f5(&spec(DHKEY)?, &spec(NA)?, &spec(NB)?, &spec(A1)?, &spec(A2)?);
                Ok(show(keys.mac_key, Order::Spec))
            },
        },
        Check {
            name: "D.3 f5 LTK",
            expected: "6986791169d7cd23980522b594750a38",
            run: || {
                let keys = f5(&spec(DHKEY)?, &spec(NA)?, &spec(NB)?, &spec(A1)?, &spec(A2)?);
                Ok(show(keys.ltk, Order::Spec))
            },
        },
        Check {
            name: "D.4 f6",
            expected: "e3c473989cd0e8c5d26c0b09da958f61",
            run: || {
                let out = f6(
                    &spec(MAC_KEY)?,
                    &spec(NA)?,
                    &spec(NB)?,
                    &spec("12a3343bb453bb5408da42d20c2d0fc8")?,
                    &spec("010102")?,
                    &spec(A1)?,
                    &spec(A2)?,
                );
                Ok(show(out, Order::Spec))
            },
        },
        Check {
            name: "D.5 g2",
            // 0x2f9ed5ba reduced to six digits.
            expected: "938554",
            run: || {
                let out = g2(&spec(U)?, &spec(V)?, &spec(NA)?, &spec(NB)?);
                Ok(format!("{out:06}"))
            },
        },
        Check {
            name: "D.6 h6",
            expected: "2d9ae102e76dc91ce8d3a9e280b16399",
            run: || Ok(show(h6(&spec(W)?, &spec("6c656272")?), Order::Spec)),
        },
        Check {
            name: "D.7 ah",
            expected: "0dfbaa",
            run: || Ok(show(ah(&spec(W)?, &spec("708194")?), Order::Spec)),
        },
        Check {
            name: "D.7 aes_128",
            expected: "159d5fb72ebe2311a48c1bdcc40dfbaa",
            run: || {
                let prand: [u8; 3] = spec("708194")?;
                Ok(show(aes_128(&spec(W)?, &prand)?, Order::Spec))
            },
        },
        Check {
            name: "D.8 h7",
            expected: "fb173597c6a3c0ecd2998c2a75a57011",
            run: || {
                let salt = spec("000000000000000000000000746d7031")?;
                Ok(show(h7(&salt, &spec(W)?), Order::Spec))
            },
        },
        Check {
            name: "D.9 ltk to link key, h7",
            expected: "287ad379dca402530a39f1f43047b835",
            run: || Ok(show(ltk_to_link_key(&spec(LTK)?, Derivation::H7), Order::Spec)),
        },
        Check {
            name: "D.10 ltk to link key, h6",
            expected: "bc1ca4ef633fc1bd0d8230afee388fb0",
            run: || Ok(show(ltk_to_link_key(&spec(LTK)?, Derivation::H6), Order::Spec)),
        },
        Check {
            name: "D.11 link key to ltk, h7",
            expected: "e85e09eb5eccb3e269418a133211bc79",
            run: || Ok(show(link_key_to_ltk(&spec(LINK_KEY)?, Derivation::H7), Order::Spec)),
        },
        Check {
            name: "D.12 link key to ltk, h6",
            expected: "a813fb72f1a3dfa18a2c9a43f10d0a30",
            run: || Ok(show(link_key_to_ltk(&spec(LINK_KEY)?, Derivation::H6), Order::Spec)),
        },
    ]
}

/// Runs every check, printing one line each. Fails if any mismatch.
pub fn run() -> Result<()> {
    let mut failures = 0usize;
    let checks = checks();
    for check in &checks {
        let actual = (check.run)()?;
        debug!(name = check.name, %actual, "selftest");
        if actual == check.expected {
            println!("ok      {}", check.name);
        } else {
            failures += 1;
            println!(
                "FAILED  {}: expected {}, got {}",
                check.name, check.expected, actual
            );
        }
    }
    info!(total = checks.len(), failures, "selftest finished");
    if failures > 0 {
        bail!("{failures} of {} checks failed", checks.len());
    }
    Ok(())
}
