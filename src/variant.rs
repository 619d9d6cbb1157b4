/*!
 * Variant constant tables and working-key derivation
 *
 * The variant scheme never stores more than a handful of master key pairs.
 * Cryptographic separation between key classes and between the components
 * of multi-component keys comes from XOR-ing fixed single-byte constants
 * into a per-call copy of the master pair: the key-type variant lands in
 * byte 0, the component-separation variants in byte 8. XOR is self-inverse,
 * which is what lets devices implementing the scheme step between component
 * keys by re-applying constants.
 */

use zeroize::Zeroizing;

use crate::key_type::KeyType;

/// Key-type variants, indexed by the variant selector digit. Digit 0 means
/// no variant and its table slot is never applied.
pub const DIGIT_VARIANTS: [u8; 10] = [
    0x00, 0xA6, 0x5A, 0x6A, 0xDE, 0x2B, 0x50, 0x74, 0x9C, 0xFA,
];

/// Component-separation variants for double-length key material.
pub const DOUBLE_LENGTH_VARIANTS: [u8; 2] = [0xA6, 0x5A];

/// Component-separation variants for triple-length key material.
pub const TRIPLE_LENGTH_VARIANTS: [u8; 3] = [0x6A, 0xDE, 0x2B];

/// Byte of the working key the key-type variant is XORed into.
const KEY_TYPE_VARIANT_OFFSET: usize = 0;

/// Byte of the working key the component-separation variant is XORed into.
const COMPONENT_VARIANT_OFFSET: usize = 8;

/// Apply the key-type variant to a working key in place.
///
/// A ZMK and a PVK stored under the same master pair must never produce
/// the same working key; the variant digit is what keeps those domains
/// apart. Selector digit 0 leaves the key untouched.
pub(crate) fn apply_key_type_variant(working: &mut [u8; 16], key_type: &KeyType<'_>) {
    let digit = key_type.variant_digit();
    if digit != 0 {
        working[KEY_TYPE_VARIANT_OFFSET] ^= DIGIT_VARIANTS[digit as usize];
    }
}

/// Working key for one component of a multi-component key.
///
/// Computed directly as `base ⊕ tweak` at the component offset rather than
/// by stepping a shared buffer through apply/revert cycles; the result is
/// identical because the XOR is self-inverse, and each component key can be
/// derived independently of the others.
pub(crate) fn component_key(base: &[u8; 16], tweak: u8) -> Zeroizing<[u8; 16]> {
    let mut key = Zeroizing::new(*base);
    key[COMPONENT_VARIANT_OFFSET] ^= tweak;
    key
}
