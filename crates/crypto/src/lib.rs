//! AES-256-GCM envelope encryption of byte payloads.
//!
//! A [`Cipher`] wraps a validated 256-bit key and exposes
//! [`encrypt`](Cipher::encrypt) / [`decrypt`](Cipher::decrypt) over
//! base64-encoded envelopes, so ciphertext can be embedded in text-based
//! transports (JSON fields, config files, URLs).
//!
//! # Wire format
//!
//! ```text
//! base64(nonce || ciphertext+tag)
//! ```
//!
//! The 96-bit nonce prefix is cleartext; the remainder is the GCM output with
//! its 16-byte authentication tag appended. The whole concatenation is
//! base64-encoded with the standard alphabet. This layout is a compatibility
//! contract: envelopes produced here must remain readable by any other
//! implementation of the same format, and vice versa.

pub mod cipher;
pub mod error;

pub use cipher::{Cipher, KEY_LEN};
pub use error::CryptoError;
