/*!
 * DES block primitives
 *
 * Thin wrappers over the `des` crate exposing the single-block operations
 * the variant scheme is built from: one 8-byte block under an 8-byte DES
 * key, a 16-byte two-key triple DES key, or a 24-byte three-key triple DES
 * key. All functions are pure and stateless; no padding and no chaining
 * mode is involved anywhere in the scheme.
 */

use des::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use des::{Des, TdesEde2, TdesEde3};

/// DES block size in bytes
pub const BLOCK_SIZE: usize = 8;

/// Encrypt one block under a single-length DES key.
pub fn des_encrypt_block(key: &[u8; 8], block: &[u8; 8]) -> [u8; 8] {
    let cipher = Des::new(GenericArray::from_slice(key));
    let mut out = *block;
    cipher.encrypt_block(GenericArray::from_mut_slice(&mut out));
    out
}

/// Encrypt one block under a two-key triple DES key (EDE with K1, K2, K1).
///
/// With both halves equal this degenerates to single DES.
pub fn tdes2_encrypt_block(key: &[u8; 16], block: &[u8; 8]) -> [u8; 8] {
    let cipher = TdesEde2::new(GenericArray::from_slice(key));
    let mut out = *block;
    cipher.encrypt_block(GenericArray::from_mut_slice(&mut out));
    out
}

/// Decrypt one block under a two-key triple DES key.
pub fn tdes2_decrypt_block(key: &[u8; 16], block: &[u8; 8]) -> [u8; 8] {
    let cipher = TdesEde2::new(GenericArray::from_slice(key));
    let mut out = *block;
    cipher.decrypt_block(GenericArray::from_mut_slice(&mut out));
    out
}

/// Encrypt one block under a three-key triple DES key.
pub fn tdes3_encrypt_block(key: &[u8; 24], block: &[u8; 8]) -> [u8; 8] {
    let cipher = TdesEde3::new(GenericArray::from_slice(key));
    let mut out = *block;
    cipher.encrypt_block(GenericArray::from_mut_slice(&mut out));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

    #[test]
    fn test_des_known_answer_zero_block() {
        // Reference vector behind the classical check value of this key
        let out = des_encrypt_block(&KEY, &[0u8; 8]);
        assert_eq!(
            out,
            [0xD5, 0xD4, 0x4F, 0xF7, 0x20, 0x68, 0x3D, 0x0D]
        );
    }

    #[test]
    fn test_des_known_answer_fips_sample() {
        // "Now is t" under 0123456789ABCDEF, from the FIPS 81 sample data
        let plaintext = *b"Now is t";
        let out = des_encrypt_block(&KEY, &plaintext);
        assert_eq!(
            out,
            [0x3F, 0xA4, 0x0E, 0x8A, 0x98, 0x4D, 0x48, 0x15]
        );
    }

    #[test]
    fn test_tdes2_known_answer_zero_block() {
        let key: [u8; 16] = [
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ];
        let out = tdes2_encrypt_block(&key, &[0u8; 8]);
        assert_eq!(
            out,
            [0x08, 0xD7, 0xB4, 0xFB, 0x62, 0x9D, 0x08, 0x85]
        );
    }

    #[test]
    fn test_tdes2_equal_halves_degenerates_to_des() {
        let mut key = [0u8; 16];
        key[..8].copy_from_slice(&KEY);
        key[8..].copy_from_slice(&KEY);

        let block = [0x42u8; 8];
        assert_eq!(
            tdes2_encrypt_block(&key, &block),
            des_encrypt_block(&KEY, &block)
        );
    }

    #[test]
    fn test_tdes2_round_trip() {
        let key = [0x5Au8; 16];
        let block = *b"8 bytes!";

        let wrapped = tdes2_encrypt_block(&key, &block);
        assert_ne!(wrapped, block);
        assert_eq!(tdes2_decrypt_block(&key, &wrapped), block);
    }

    #[test]
    fn test_tdes3_equal_keys_degenerates_to_des() {
        let mut key = [0u8; 24];
        for half in key.chunks_exact_mut(8) {
            half.copy_from_slice(&KEY);
        }

        let block = [0x13u8; 8];
        assert_eq!(
            tdes3_encrypt_block(&key, &block),
            des_encrypt_block(&KEY, &block)
        );
    }
}
