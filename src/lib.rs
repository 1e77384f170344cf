//! Passphrase-based authenticated encryption with tunable derivation cost.
//!
//! A [`Cryptio`] session is built from a passphrase plus two mandatory
//! knobs: a [`SecurityLevel`] (how strong) and a [`ResourceProfile`] (how
//! the cost is spent, memory vs. CPU). The two are merged field-wise into
//! one [`ParameterSet`] at construction; every encryption call then draws
//! a fresh salt and nonce, derives a per-message key with Argon2id, and
//! seals the plaintext with AES-256-GCM.
//!
//! ```no_run
//! use cryptio::{Cryptio, ResourceProfile, SecurityLevel};
//!
//! # fn main() -> cryptio::Result<()> {
//! let client = Cryptio::new(
//!     "SuperSecurePassphrase!",
//!     SecurityLevel::Standard,
//!     ResourceProfile::Balanced,
//! );
//!
//! let token = client.encrypt("Hello, cryptio world!")?;
//! let plain = client.decrypt(&token)?;
//! assert_eq!(&*plain, "Hello, cryptio world!");
//! # Ok(())
//! # }
//! ```

mod crypto;
mod error;
mod params;
mod wire;

pub use crate::crypto::{KEY_LEN, NONCE_LEN, TAG_LEN};
pub use crate::error::{CryptioError, Result};
pub use crate::params::{ParameterSet, ResourceProfile, SecurityLevel, resolve};

use zeroize::Zeroizing;

/// A long-lived encryption session holding a passphrase and its resolved
/// parameter set.
///
/// Immutable after construction and free of interior mutability, so a
/// single session may be shared across threads for concurrent encrypt and
/// decrypt calls. The passphrase is zeroized when the session is dropped.
///
/// A session can only decrypt messages produced under the same passphrase
/// and the same level/profile combination; any mismatch surfaces as
/// [`CryptioError::Authentication`] with the cause deliberately hidden.
pub struct Cryptio {
    passphrase: Zeroizing<Vec<u8>>,
    params: ParameterSet,
}

impl Cryptio {
    /// Creates a session. Both the level and the profile are mandatory;
    /// there is no default combination.
    pub fn new(
        passphrase: impl Into<Vec<u8>>,
        level: SecurityLevel,
        profile: ResourceProfile,
    ) -> Self {
        Self {
            passphrase: Zeroizing::new(passphrase.into()),
            params: resolve(level, profile),
        }
    }

    /// The effective parameter set this session derives keys with.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Encrypts a byte buffer, returning `salt ‖ nonce ‖ ciphertext+tag`.
    ///
    /// Each call draws a fresh random salt and nonce and re-derives the
    /// key, so two encryptions of the same plaintext never produce the
    /// same buffer.
    ///
    /// # Errors
    ///
    /// [`CryptioError::RandomSource`] if salt/nonce bytes cannot be drawn,
    /// [`CryptioError::KeyDerivation`] if Argon2 fails.
    pub fn encrypt_raw(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let salt = crypto::random_bytes(self.params.salt_len)?;
        let nonce = crypto::random_bytes(self.params.nonce_len)?;

        let key = crypto::derive_key(&self.passphrase, &salt, &self.params)?;
        let ciphertext = crypto::seal(&key, &nonce, plaintext)?;

        Ok(wire::encode(&salt, &nonce, &ciphertext))
    }

    /// Decrypts a buffer produced by [`Cryptio::encrypt_raw`].
    ///
    /// The salt and nonce are read back out of the buffer at the offsets
    /// implied by this session's parameters and the key is re-derived from
    /// them. The returned plaintext is zeroized on drop.
    ///
    /// # Errors
    ///
    /// [`CryptioError::Malformed`] if the buffer is shorter than the
    /// salt+nonce prefix, [`CryptioError::Authentication`] on any tag
    /// mismatch.
    pub fn decrypt_raw(&self, data: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let (salt, nonce, ciphertext) =
            wire::decode(data, self.params.salt_len, self.params.nonce_len)?;

        let key = crypto::derive_key(&self.passphrase, salt, &self.params)?;
        crypto::open(&key, nonce, ciphertext)
    }

    /// Encrypts a string and returns the result base64-encoded, for use at
    /// string-oriented boundaries (JSON fields, log-safe text).
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let raw = self.encrypt_raw(plaintext.as_bytes())?;
        Ok(wire::encode_text(&raw))
    }

    /// Decrypts a base64-encoded string produced by [`Cryptio::encrypt`].
    ///
    /// # Errors
    ///
    /// [`CryptioError::Encoding`] on invalid base64 (before any
    /// cryptographic work), [`CryptioError::Utf8`] if the recovered
    /// plaintext is not valid UTF-8, plus the [`Cryptio::decrypt_raw`]
    /// failures.
    pub fn decrypt(&self, text: &str) -> Result<Zeroizing<String>> {
        let raw = wire::decode_text(text)?;
        let plaintext = self.decrypt_raw(&raw)?;

        let s = std::str::from_utf8(&plaintext).map_err(|_| CryptioError::Utf8)?;
        Ok(Zeroizing::new(s.to_string()))
    }
}
