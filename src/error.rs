/*!
 * Error Handling for the Variant LMK Crate
 *
 * Provides the typed failure taxonomy shared by every operation in the
 * crate. All errors are fatal to the single call that raised them: nothing
 * is retried internally and no partial results are ever returned.
 */

use thiserror::Error;

/// Result alias used throughout the crate
pub type LmkResult<T> = Result<T, LmkError>;

/// Error type for all variant LMK operations
#[derive(Debug, Error)]
pub enum LmkError {
    /// Malformed hex in an encoded key string (odd length or a character
    /// outside `[0-9a-fA-F]` after the scheme tag has been stripped).
    #[error("key encoding error: {0}")]
    Decoding(#[from] hex::FromHexError),

    /// The usage portion of a key type code has no master pair in the
    /// key type table.
    #[error("unsupported key type: {code}")]
    UnsupportedKeyType { code: String },

    /// The key type code itself is malformed.
    #[error("invalid key type {code:?}: {cause}")]
    InvalidKeyType { code: String, cause: String },

    /// Key material is not single, double or triple DES length.
    #[error("illegal key size: {actual} bytes, expected 8, 16 or 24")]
    IllegalKeySize { actual: usize },
}

/// Convenience constructors for common error types
impl LmkError {
    pub fn unsupported_key_type(code: &str) -> Self {
        LmkError::UnsupportedKeyType {
            code: code.to_string(),
        }
    }

    pub fn invalid_key_type(code: &str, cause: &str) -> Self {
        LmkError::InvalidKeyType {
            code: code.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn illegal_key_size(actual: usize) -> Self {
        LmkError::IllegalKeySize { actual }
    }

    /// Get the error category/type as a string
    pub fn error_type(&self) -> &'static str {
        match self {
            LmkError::Decoding(_) => "Decoding",
            LmkError::UnsupportedKeyType { .. } => "UnsupportedKeyType",
            LmkError::InvalidKeyType { .. } => "InvalidKeyType",
            LmkError::IllegalKeySize { .. } => "IllegalKeySize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = LmkError::unsupported_key_type("042");
        assert_eq!(err.to_string(), "unsupported key type: 042");

        let err = LmkError::invalid_key_type("A01", "variant selector is not a decimal digit");
        assert_eq!(
            err.to_string(),
            "invalid key type \"A01\": variant selector is not a decimal digit"
        );

        let err = LmkError::illegal_key_size(9);
        assert_eq!(
            err.to_string(),
            "illegal key size: 9 bytes, expected 8, 16 or 24"
        );
    }

    #[test]
    fn test_error_type_names() {
        assert_eq!(LmkError::illegal_key_size(7).error_type(), "IllegalKeySize");
        assert_eq!(
            LmkError::unsupported_key_type("099").error_type(),
            "UnsupportedKeyType"
        );
    }

    #[test]
    fn test_hex_error_converts() {
        let err: LmkError = hex::decode("0G").unwrap_err().into();
        assert_eq!(err.error_type(), "Decoding");
    }
}
