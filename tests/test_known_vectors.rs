//! Known-answer vectors for the public API.
//!
//! The scheme is only useful if it is bit-exact with the wider ecosystem,
//! so these tests pin the crate to reference DES vectors rather than to
//! its own output.

use variant_lmk::kcv::{check_value, verify_check_value};
use variant_lmk::wrap::encrypt_under_kek;

#[test]
fn check_value_of_reference_single_length_key() {
    let key = hex::decode("0123456789ABCDEF").unwrap();
    let kcv = check_value(&key).unwrap();

    assert_eq!(hex::encode_upper(kcv), "D5D44FF720683D0D");
    // Published check values are the first three bytes
    assert_eq!(&kcv[..3], [0xD5, 0xD4, 0x4F]);
}

#[test]
fn check_value_of_reference_double_length_key() {
    let key = hex::decode("0123456789ABCDEFFEDCBA9876543210").unwrap();
    let kcv = check_value(&key).unwrap();

    assert_eq!(hex::encode_upper(kcv), "08D7B4FB629D0885");
    assert!(verify_check_value(&key, &[0x08, 0xD7, 0xB4]).unwrap());
}

#[test]
fn single_length_wrap_matches_reference_des() {
    // Under an all-01 KEK the two-key triple DES working key has equal
    // halves and collapses to single DES with the key 0101010101010101;
    // the zero block then encrypts to the classic reference ciphertext.
    let kek = [0x01u8; 16];
    let wrapped = encrypt_under_kek("0000000000000000", &kek, "000").unwrap();

    assert_eq!(hex::encode_upper(&wrapped), "8CA64DE9C1B123A7");
}

#[test]
fn variant_zero_single_length_wrap_equals_plain_tdes_of_kek() {
    // With variant digit 0 and single-length material there is no variant
    // and no component tweak: the wrap is exactly two-key triple DES under
    // the KEK itself, here pinned through the reference double-length key.
    let kek_bytes = hex::decode("0123456789ABCDEFFEDCBA9876543210").unwrap();
    let mut kek = [0u8; 16];
    kek.copy_from_slice(&kek_bytes);

    let wrapped = encrypt_under_kek("0000000000000000", &kek, "000").unwrap();
    assert_eq!(hex::encode_upper(&wrapped), "08D7B4FB629D0885");
}
