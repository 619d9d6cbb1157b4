/*!
 * Variant LMK Key Wrapping
 *
 * This crate implements the classical "variant" scheme payment hardware
 * security modules use to keep cryptographic keys encrypted at rest and in
 * transit. Per-key-type working keys are derived from a small set of
 * 16-byte master key pairs by XOR-ing fixed single-byte constants, and key
 * material of single, double or triple DES length is then encrypted
 * component by component under the derived working key.
 *
 * The main operations are:
 *
 * - wrapping and unwrapping keys under a Local Master Key (LMK) pair
 *   resolved from the key type table
 * - wrapping and unwrapping keys under a caller-supplied Key Encryption
 *   Key (KEK), e.g. for transport between devices
 * - computing and verifying key check values
 *
 * The component transforms are bit-exact with the vendor scheme: any
 * deviation produces keys that no other device implementing the scheme can
 * use.
 */

/// Single and triple DES block operations
pub mod tdes;

/// Variant constant tables and working-key derivation
pub mod variant;

/// Key type codes and the LMK pair table
pub mod key_type;

/// Scheme-tagged hex key encodings
pub mod encoding;

/// Encrypting and decrypting key material under an LMK or KEK
pub mod wrap;

/// Key check values
pub mod kcv;

/// Common error types for the crate
pub mod error;

// Re-export main types for convenience
pub use error::{LmkError, LmkResult};
pub use key_type::KeyType;
pub use key_type::KeyTypeTable;
pub use wrap::Direction;

/// Provides a simplified interface to the most commonly used operations.
pub mod prelude {
    pub use crate::encoding::extract_key_data;
    pub use crate::error::{LmkError, LmkResult};
    pub use crate::kcv::check_value;
    pub use crate::kcv::verify_check_value;
    pub use crate::key_type::KeyType;
    pub use crate::key_type::KeyTypeTable;
    pub use crate::wrap::decrypt_under_kek;
    pub use crate::wrap::decrypt_under_lmk;
    pub use crate::wrap::encrypt_under_kek;
    pub use crate::wrap::encrypt_under_lmk;
    pub use crate::wrap::transform;
    pub use crate::wrap::Direction;
}
