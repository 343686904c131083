//! Error types for the envelope cipher.

use thiserror::Error;

use crate::cipher::KEY_LEN;

/// Errors produced by [`Cipher`](crate::Cipher) construction and operations.
///
/// A closed enumeration so callers can match on the failure kind. Every
/// variant is returned to the caller immediately; nothing is retried
/// internally and no partial plaintext is ever produced alongside an error.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The input string is not valid standard-alphabet base64.
    #[error("invalid base64 input: {0}")]
    Decode(#[from] codec::DecodeError),

    /// The decoded key material is not exactly [`KEY_LEN`] bytes.
    #[error("decoded key must be {KEY_LEN} bytes (AES-256), got {0}")]
    InvalidKeyLength(usize),

    /// The decoded envelope is shorter than its nonce prefix.
    #[error("ciphertext too short: need at least {expected} bytes, got {actual}")]
    ShortCiphertext { expected: usize, actual: usize },

    /// GCM tag verification failed — wrong key, tampered or corrupted data.
    #[error("authentication failed")]
    AuthenticationFailure,

    /// The OS entropy source could not supply a full nonce.
    #[error("failed to read a random nonce from the OS entropy source")]
    RandomGeneration,

    /// The AEAD seal operation failed. Cannot occur with a valid key and
    /// nonce, but the fallible path is surfaced rather than panicked on.
    #[error("aead seal failed")]
    SealFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_observed_key_length() {
        let e = CryptoError::InvalidKeyLength(16);
        assert!(e.to_string().contains("32"));
        assert!(e.to_string().contains("16"));
    }

    #[test]
    fn display_includes_envelope_lengths() {
        let e = CryptoError::ShortCiphertext {
            expected: 12,
            actual: 5,
        };
        assert!(e.to_string().contains("12"));
        assert!(e.to_string().contains("5"));
    }

    #[test]
    fn decode_error_preserves_cause() {
        let cause = codec::decode("%%%").unwrap_err();
        let e = CryptoError::from(cause);
        assert!(e.to_string().starts_with("invalid base64 input"));
    }
}
