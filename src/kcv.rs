/*!
 * Key check values
 *
 * A check value is the encryption of an all-zero block under the key
 * itself: a deterministic fingerprint that lets two parties confirm they
 * hold the same key without revealing it. Callers publish a truncated
 * prefix, conventionally the first three bytes.
 */

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::{LmkError, LmkResult};
use crate::tdes;

/// Compute the full 8-byte check value for clear key material.
///
/// Single-length keys are fingerprinted with single DES; double and triple
/// length keys with two-key and three-key triple DES. Truncation is the
/// caller's concern.
pub fn check_value(key_material: &[u8]) -> LmkResult<[u8; 8]> {
    let zero_block = [0u8; 8];
    match key_material.len() {
        8 => {
            let mut key = Zeroizing::new([0u8; 8]);
            key.copy_from_slice(key_material);
            Ok(tdes::des_encrypt_block(&key, &zero_block))
        }
        16 => {
            let mut key = Zeroizing::new([0u8; 16]);
            key.copy_from_slice(key_material);
            Ok(tdes::tdes2_encrypt_block(&key, &zero_block))
        }
        24 => {
            let mut key = Zeroizing::new([0u8; 24]);
            key.copy_from_slice(key_material);
            Ok(tdes::tdes3_encrypt_block(&key, &zero_block))
        }
        other => Err(LmkError::illegal_key_size(other)),
    }
}

/// Verify a truncated check value against clear key material in constant
/// time.
///
/// `expected` is compared against the same-length prefix of the computed
/// check value. An empty or over-long `expected` verifies nothing and
/// returns `false`.
pub fn verify_check_value(key_material: &[u8], expected: &[u8]) -> LmkResult<bool> {
    let computed = check_value(key_material)?;
    if expected.is_empty() || expected.len() > computed.len() {
        return Ok(false);
    }
    Ok(computed[..expected.len()].ct_eq(expected).into())
}
