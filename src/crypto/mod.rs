//! Cryptographic primitives for message encryption.
//!
//! Provides Argon2id key derivation and AES-256-GCM authenticated
//! encryption. Lengths that are fixed by the primitives live here; salt
//! length varies per [`crate::ParameterSet`] and is not pinned.

pub mod aead;
pub mod kdf;

pub use aead::{open, random_bytes, seal};
pub use kdf::derive_key;

/// Length of the AES-256 key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the GCM nonce (12 bytes / 96 bits).
pub const NONCE_LEN: usize = 12;
/// Length of the GCM authentication tag (16 bytes).
pub const TAG_LEN: usize = 16;
