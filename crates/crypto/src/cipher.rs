//! AES-256-GCM encryption and decryption of byte payloads.
//!
//! **Nonce discipline:** a fresh random 96-bit nonce is generated per call
//! via the OS CSPRNG. GCM nonce reuse under the same key is catastrophic —
//! it breaks both confidentiality and authentication — so there is no
//! deterministic fallback on the nonce path: if the entropy source cannot
//! supply a full nonce, the operation fails.

use aes_gcm::{
    aead::{
        generic_array::typenum::Unsigned, rand_core::RngCore, Aead, AeadCore, KeyInit, OsRng,
    },
    Aes256Gcm, Nonce,
};
use tracing::{debug, warn};

use crate::error::CryptoError;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of the GCM authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// A reusable AES-256-GCM cipher bound to a single key.
///
/// Constructed once per key via [`Cipher::new`] and shared freely afterwards:
/// both operations read only the immutable key schedule and allocate fresh
/// buffers per call, so a `&Cipher` (or an `Arc<Cipher>`) may be used from
/// many threads concurrently without locking.
pub struct Cipher {
    gcm: Aes256Gcm,
    nonce_len: usize,
}

impl Cipher {
    /// Build a cipher from a base64-encoded 256-bit key.
    ///
    /// The key string is decoded, validated to exactly [`KEY_LEN`] bytes, and
    /// expanded into the AES-256-GCM state held for the lifetime of the
    /// instance. The encoded form is not retained.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Decode`] if `b64_key` is not valid base64, and
    /// [`CryptoError::InvalidKeyLength`] if it decodes to anything other than
    /// [`KEY_LEN`] bytes.
    pub fn new(b64_key: &str) -> Result<Self, CryptoError> {
        let key = codec::decode(b64_key).map_err(|e| {
            // Never echo the input — a malformed string may still be a
            // lightly corrupted real key.
            warn!("cipher key is not valid base64");
            CryptoError::Decode(e)
        })?;
        if key.len() != KEY_LEN {
            warn!(got = key.len(), "rejected key of invalid length");
            return Err(CryptoError::InvalidKeyLength(key.len()));
        }
        let gcm = Aes256Gcm::new_from_slice(&key)
            .map_err(|_| CryptoError::InvalidKeyLength(key.len()))?;
        debug!("cipher initialised");
        Ok(Self {
            gcm,
            nonce_len: <Aes256Gcm as AeadCore>::NonceSize::USIZE,
        })
    }

    /// Nonce length required by the initialised mode, in bytes.
    pub fn nonce_len(&self) -> usize {
        self.nonce_len
    }

    /// Encrypt `plaintext` (which may be empty) into a base64 envelope.
    ///
    /// Each call seals under a fresh random nonce, so encrypting the same
    /// plaintext twice yields two different envelopes. The decoded output is
    /// always `nonce_len + plaintext.len() + TAG_LEN` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::RandomGeneration`] if the OS entropy source
    /// cannot supply a full nonce.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String, CryptoError> {
        // The envelope buffer starts as the nonce prefix; the sealed bytes
        // are appended behind it.
        let mut envelope = vec![0u8; self.nonce_len];
        OsRng.try_fill_bytes(&mut envelope).map_err(|_| {
            warn!("nonce generation failed");
            CryptoError::RandomGeneration
        })?;
        let sealed = self
            .gcm
            .encrypt(Nonce::from_slice(&envelope), plaintext)
            .map_err(|_| CryptoError::SealFailure)?;
        envelope.extend_from_slice(&sealed);
        debug!(plaintext_len = plaintext.len(), "payload encrypted");
        Ok(codec::encode(&envelope))
    }

    /// Decrypt a base64 envelope back into plaintext bytes.
    ///
    /// The envelope must have been produced by [`Cipher::encrypt`] under the
    /// same key. Any modification of the decoded bytes — nonce or sealed
    /// portion — fails tag verification; no unauthenticated plaintext is
    /// ever returned.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Decode`] if `envelope` is not valid base64,
    /// [`CryptoError::ShortCiphertext`] if it decodes to fewer bytes than the
    /// nonce prefix, and [`CryptoError::AuthenticationFailure`] if tag
    /// verification fails (wrong key, tampering, corruption).
    pub fn decrypt(&self, envelope: &str) -> Result<Vec<u8>, CryptoError> {
        let data = codec::decode(envelope).map_err(|e| {
            warn!(error = %e, "envelope is not valid base64");
            CryptoError::Decode(e)
        })?;
        if data.len() < self.nonce_len {
            warn!(
                got = data.len(),
                need = self.nonce_len,
                "envelope shorter than nonce prefix"
            );
            return Err(CryptoError::ShortCiphertext {
                expected: self.nonce_len,
                actual: data.len(),
            });
        }
        let (nonce, sealed) = data.split_at(self.nonce_len);
        let plaintext = self
            .gcm
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_| {
                warn!("envelope failed authentication");
                CryptoError::AuthenticationFailure
            })?;
        debug!(plaintext_len = plaintext.len(), "payload decrypted");
        Ok(plaintext)
    }
}

impl std::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key-derived state — not even in debug builds.
        f.debug_struct("Cipher")
            .field("nonce_len", &self.nonce_len)
            .finish_non_exhaustive()
    }
}
