//! Standard-alphabet base64 codec shared across the workspace.
//!
//! A thin wrapper over the `base64` crate so every caller encodes and decodes
//! with the same engine: standard alphabet, canonical padding. Keys and
//! ciphertext envelopes travel through here, so a drift in alphabet or
//! padding rules would silently break wire compatibility.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// The input string is not canonical standard-alphabet base64.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(transparent)]
pub struct DecodeError(#[from] base64::DecodeError);

/// Encode `data` as base64 (standard alphabet, padded).
///
/// Deterministic and total: every byte sequence has exactly one encoding.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a base64 string into raw bytes.
///
/// # Errors
///
/// Returns [`DecodeError`] if `input` contains characters outside the
/// standard alphabet, has non-canonical padding, or is otherwise malformed.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(STANDARD.decode(input)?)
}
