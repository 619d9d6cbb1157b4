/*!
 * Scheme-tagged hex key encodings
 *
 * Keys cross the host interface as hex strings, optionally prefixed by a
 * single scheme tag character indicating the encoding convention (`U` for a
 * double-length key, `T` for triple-length, and so on). The tag has no
 * cryptographic effect here; it is stripped before hex decoding.
 */

use crate::error::LmkResult;

/// Scheme tag characters recognized in front of a hex-encoded key.
pub const SCHEME_TAGS: [char; 5] = ['U', 'Z', 'T', 'X', 'Y'];

/// Tag set recognized by the encrypt-under-LMK path. `X` and `Y` prefixes
/// are not stripped on this path and fall through to the hex decoder.
pub(crate) const LMK_WRAP_SCHEME_TAGS: [char; 3] = ['U', 'Z', 'T'];

/// Extract raw key bytes from an encoded key string.
///
/// Strips one leading scheme tag if present and hex-decodes the rest.
pub fn extract_key_data(encoded: &str) -> LmkResult<Vec<u8>> {
    decode_tagged(encoded, &SCHEME_TAGS)
}

/// Tag-stripping rule used when encrypting under the LMK, which accepts a
/// narrower tag set than the generic extraction path.
pub(crate) fn extract_key_data_for_lmk_wrap(encoded: &str) -> LmkResult<Vec<u8>> {
    decode_tagged(encoded, &LMK_WRAP_SCHEME_TAGS)
}

fn decode_tagged(encoded: &str, tags: &[char]) -> LmkResult<Vec<u8>> {
    let hex_part = match encoded.chars().next() {
        Some(tag) if tags.contains(&tag) => &encoded[tag.len_utf8()..],
        _ => encoded,
    };
    Ok(hex::decode(hex_part)?)
}
