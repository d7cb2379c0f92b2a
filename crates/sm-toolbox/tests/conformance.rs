//! Sample data from Core Spec Vol 3, Part H, Appendix D.
//!
//! Values are written exactly as the specification prints them and pass
//! through `to_toolbox_order` / `to_spec_order` on the way in and out.

use hex_literal::hex;
use sm_toolbox::order::{reversed, to_spec_order, to_toolbox_order};
use sm_toolbox::{
    aes_128, aes_cmac, aes_encrypt, aes_set_key, ah, f4, f5, f6, g2, h6, h7, link_key_to_ltk,
    ltk_to_link_key, Derivation,
};

const CMAC_KEY: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
const CMAC_MESSAGE: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a"
    "ae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52ef"
    "f69f2445df4f9b17ad2b417be66c3710"
);

const U: [u8; 32] = hex!("20b003d2f297be2c5e2c83a7e9f9a5b9eff49111acf4fddbcc0301480e359de6");
const V: [u8; 32] = hex!("55188b3d32f6bb9a900afcfbeed4e72a59cb9ac2f19d7cfb6b4fdd49f47fc5fd");
const NA: [u8; 16] = hex!("d5cb8454d177733effffb2ec712baeab");
const NB: [u8; 16] = hex!("a6e8e7cc25a75f6e216583f7ff3dc4cf");
const DHKEY: [u8; 32] = hex!("ec0234a357c8ad05341010a60a397d9b99796b13b4f866f1868d34f373bfa698");
const A1: [u8; 7] = hex!("0056123737bfce");
const A2: [u8; 7] = hex!("00a713702dcfc1");
const KEY_W: [u8; 16] = hex!("ec0234a357c8ad05341010a60a397d9b");
const LTK: [u8; 16] = hex!("368df9bce3264b58bd066c33334fbf64");
const LINK_KEY: [u8; 16] = hex!("05040302010009080706050403020100");

fn cmac_spec(message: &[u8]) -> [u8; 16] {
    let key = to_toolbox_order(CMAC_KEY);
    to_spec_order(aes_cmac(&key, &reversed(message)))
}

#[test]
fn d1_aes_128() {
    let round_keys = aes_set_key(&CMAC_KEY).unwrap();
    assert_eq!(
        aes_encrypt(&round_keys, &[0u8; 16]),
        hex!("7df76b0c1ab899b33e42f047b91b546f")
    );
}

#[test]
fn d1_1_cmac_empty_message() {
    assert_eq!(cmac_spec(&[]), hex!("bb1d6929e95937287fa37d129b756746"));
}

#[test]
fn d1_2_cmac_one_block() {
    assert_eq!(
        cmac_spec(&CMAC_MESSAGE[..16]),
        hex!("070a16b46b4d4144f79bdd9dd04a287c")
    );
}

#[test]
fn d1_3_cmac_forty_bytes() {
    assert_eq!(
        cmac_spec(&CMAC_MESSAGE[..40]),
        hex!("dfa66747de9ae63030ca32611497c827")
    );
}

#[test]
fn d1_4_cmac_four_blocks() {
    assert_eq!(
        cmac_spec(&CMAC_MESSAGE),
        hex!("51f0bebf7e3b9d92fc49741779363cfe")
    );
}

#[test]
fn d2_f4() {
    let out = f4(
        &to_toolbox_order(U),
        &to_toolbox_order(V),
        &to_toolbox_order(NA),
        0x00,
    );
    assert_eq!(
        to_spec_order(out),
        hex!("f2c916f107a9bd1cf1eda1bea974872d")
    );
}

#[test]
fn d3_f5() {
    let keys = f5(
        &to_toolbox_order(DHKEY),
        &to_toolbox_order(NA),
        &to_toolbox_order(NB),
        &to_toolbox_order(A1),
        &to_toolbox_order(A2),
    );
    assert_eq!(
        to_spec_order(keys.mac_key),
        hex!("2965f176a1084a02fd3f6a20ce636e20")
    );
    assert_eq!(
        to_spec_order(keys.ltk),
        hex!("6986791169d7cd23980522b594750a38")
    );
}

#[test]
fn d4_f6() {
    let out = f6(
        &to_toolbox_order(hex!("2965f176a1084a02fd3f6a20ce636e20")),
        &to_toolbox_order(NA),
        &to_toolbox_order(NB),
        &to_toolbox_order(hex!("12a3343bb453bb5408da42d20c2d0fc8")),
        &to_toolbox_order(hex!("010102")),
        &to_toolbox_order(A1),
        &to_toolbox_order(A2),
    );
    assert_eq!(
        to_spec_order(out),
        hex!("e3c473989cd0e8c5d26c0b09da958f61")
    );
}

#[test]
fn d5_g2() {
    let out = g2(
        &to_toolbox_order(U),
        &to_toolbox_order(V),
        &to_toolbox_order(NA),
        &to_toolbox_order(NB),
    );
    assert_eq!(out, 0x2f9e_d5ba % 1_000_000);
}

#[test]
fn d6_h6() {
    let out = h6(&to_toolbox_order(KEY_W), &to_toolbox_order(*b"lebr"));
    assert_eq!(
        to_spec_order(out),
        hex!("2d9ae102e76dc91ce8d3a9e280b16399")
    );
}

#[test]
fn d7_ah() {
    let irk = to_toolbox_order(KEY_W);
    let prand = to_toolbox_order(hex!("708194"));

    let full = aes_128(&irk, &prand).unwrap();
    assert_eq!(
        to_spec_order(full),
        hex!("159d5fb72ebe2311a48c1bdcc40dfbaa")
    );
    assert_eq!(to_spec_order(ah(&irk, &prand)), hex!("0dfbaa"));
}

#[test]
fn d8_h7() {
    let salt = to_toolbox_order(hex!("000000000000000000000000746d7031"));
    let out = h7(&salt, &to_toolbox_order(KEY_W));
    assert_eq!(
        to_spec_order(out),
        hex!("fb173597c6a3c0ecd2998c2a75a57011")
    );
}

#[test]
fn d9_ltk_to_link_key_with_h7() {
    let out = ltk_to_link_key(&to_toolbox_order(LTK), true);
    assert_eq!(
        to_spec_order(out),
        hex!("287ad379dca402530a39f1f43047b835")
    );
}

#[test]
fn d10_ltk_to_link_key_with_h6() {
    let out = ltk_to_link_key(&to_toolbox_order(LTK), false);
    assert_eq!(
        to_spec_order(out),
        hex!("bc1ca4ef633fc1bd0d8230afee388fb0")
    );
}

#[test]
fn d11_link_key_to_ltk_with_h7() {
    let out = link_key_to_ltk(&to_toolbox_order(LINK_KEY), Derivation::H7);
    assert_eq!(
        to_spec_order(out),
        hex!("e85e09eb5eccb3e269418a133211bc79")
    );
}

#[test]
fn d12_link_key_to_ltk_with_h6() {
    let out = link_key_to_ltk(&to_toolbox_order(LINK_KEY), Derivation::H6);
    assert_eq!(
        to_spec_order(out),
        hex!("a813fb72f1a3dfa18a2c9a43f10d0a30")
    );
}
