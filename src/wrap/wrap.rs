use zeroize::Zeroizing;

use crate::encoding;
use crate::error::{LmkError, LmkResult};
use crate::key_type::{KeyType, KeyTypeTable};
use crate::tdes;
use crate::variant;

/// Direction of a component transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Encrypt a clear key under the LMK pair selected by the key type code.
///
/// The encoded key string may carry a `U`, `Z` or `T` scheme tag; unlike
/// the other entry points, `X` and `Y` are not treated as tags here.
///
/// # Errors
///
/// Fails with [`LmkError::InvalidKeyType`] on a malformed key type code,
/// [`LmkError::Decoding`] on malformed hex, [`LmkError::UnsupportedKeyType`]
/// when the usage code has no pair in the table, and
/// [`LmkError::IllegalKeySize`] when the decoded key material is not 8, 16
/// or 24 bytes long.
pub fn encrypt_under_lmk(
    encoded: &str,
    key_type_code: &str,
    table: &KeyTypeTable,
) -> LmkResult<Vec<u8>> {
    let key_type = KeyType::parse(key_type_code)?;
    let key_data = Zeroizing::new(encoding::extract_key_data_for_lmk_wrap(encoded)?);
    let master = resolve_pair(table, &key_type)?;

    log::trace!(
        "encrypting {} byte key under lmk, key type {}",
        key_data.len(),
        key_type_code
    );
    transform(&key_data, master, &key_type, Direction::Encrypt)
}

/// Decrypt a key stored under the LMK pair selected by the key type code.
pub fn decrypt_under_lmk(
    encoded: &str,
    key_type_code: &str,
    table: &KeyTypeTable,
) -> LmkResult<Vec<u8>> {
    let key_type = KeyType::parse(key_type_code)?;
    let key_data = encoding::extract_key_data(encoded)?;
    let master = resolve_pair(table, &key_type)?;

    log::trace!(
        "decrypting {} byte key under lmk, key type {}",
        key_data.len(),
        key_type_code
    );
    transform(&key_data, master, &key_type, Direction::Decrypt)
}

/// Encrypt a clear key under a caller-supplied KEK, e.g. for transport to
/// another device. The key type table is not consulted.
pub fn encrypt_under_kek(
    encoded: &str,
    kek: &[u8; 16],
    key_type_code: &str,
) -> LmkResult<Vec<u8>> {
    let key_type = KeyType::parse(key_type_code)?;
    let key_data = Zeroizing::new(encoding::extract_key_data(encoded)?);

    log::trace!(
        "encrypting {} byte key under kek, key type {}",
        key_data.len(),
        key_type_code
    );
    transform(&key_data, kek, &key_type, Direction::Encrypt)
}

/// Decrypt a key wrapped under a caller-supplied KEK.
pub fn decrypt_under_kek(
    encoded: &str,
    kek: &[u8; 16],
    key_type_code: &str,
) -> LmkResult<Vec<u8>> {
    let key_type = KeyType::parse(key_type_code)?;
    let key_data = encoding::extract_key_data(encoded)?;

    log::trace!(
        "decrypting {} byte key under kek, key type {}",
        key_data.len(),
        key_type_code
    );
    transform(&key_data, kek, &key_type, Direction::Decrypt)
}

/// Transform key material component by component under the working key
/// derived from `master` and `key_type`.
///
/// Each 8-byte component is processed with two-key triple DES under a
/// 16-byte working key. Single-length material goes through the same
/// two-key primitive rather than single DES; only the check value path
/// uses single DES for 8-byte keys. Output length always equals input
/// length.
pub fn transform(
    key_material: &[u8],
    master: &[u8; 16],
    key_type: &KeyType<'_>,
    direction: Direction,
) -> LmkResult<Vec<u8>> {
    let mut working = Zeroizing::new(*master);
    variant::apply_key_type_variant(&mut working, key_type);

    match key_material.len() {
        8 => Ok(transform_block(&working, key_material, direction).to_vec()),
        16 => Ok(transform_components(
            key_material,
            &working,
            &variant::DOUBLE_LENGTH_VARIANTS,
            direction,
        )),
        24 => Ok(transform_components(
            key_material,
            &working,
            &variant::TRIPLE_LENGTH_VARIANTS,
            direction,
        )),
        other => Err(LmkError::illegal_key_size(other)),
    }
}

/// Transform each component under its own tweaked working key. The tweak
/// makes the result position dependent: swapping two wrapped components
/// does not yield a key that unwraps to swapped clear components.
fn transform_components(
    key_material: &[u8],
    working: &[u8; 16],
    tweaks: &[u8],
    direction: Direction,
) -> Vec<u8> {
    key_material
        .chunks_exact(tdes::BLOCK_SIZE)
        .zip(tweaks)
        .flat_map(|(component, &tweak)| {
            let key = variant::component_key(working, tweak);
            transform_block(&key, component, direction)
        })
        .collect()
}

fn transform_block(key: &[u8; 16], component: &[u8], direction: Direction) -> [u8; 8] {
    let mut block = [0u8; 8];
    block.copy_from_slice(component);
    match direction {
        Direction::Encrypt => tdes::tdes2_encrypt_block(key, &block),
        Direction::Decrypt => tdes::tdes2_decrypt_block(key, &block),
    }
}

fn resolve_pair<'t>(table: &'t KeyTypeTable, key_type: &KeyType<'_>) -> LmkResult<&'t [u8; 16]> {
    table
        .resolve(key_type.usage())
        .ok_or_else(|| LmkError::unsupported_key_type(key_type.code()))
}
