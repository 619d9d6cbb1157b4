/*!
 * Encrypting and decrypting key material under an LMK or KEK
 *
 * This module implements the component transform engine at the heart of
 * the variant scheme, together with the four host-facing entry points:
 * wrap/unwrap under a resolved LMK pair and wrap/unwrap under a
 * caller-supplied KEK.
 */

mod wrap;

pub use wrap::*;
