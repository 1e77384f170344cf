//! Error taxonomy for encryption and decryption.

use thiserror::Error;

/// Result type alias for cryptio operations.
pub type Result<T> = std::result::Result<T, CryptioError>;

/// All failure modes surfaced by the library.
///
/// None of these are retried internally; retrying a cryptographic failure
/// with unchanged inputs cannot succeed.
#[derive(Debug, Error)]
pub enum CryptioError {
    /// A security level or resource profile name arriving from outside the
    /// type system (CLI, config) did not match any catalog entry.
    #[error("unknown security level or resource profile: '{0}'")]
    UnknownConfiguration(String),

    /// The OS random generator could not produce salt/nonce bytes.
    #[error("OS random generator unavailable")]
    RandomSource,

    /// Argon2 rejected the derivation parameters or could not allocate its
    /// memory. Fatal for the call.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// Input buffer shorter than the salt+nonce prefix implied by the
    /// session parameters. Raised before any cryptographic work.
    #[error("encrypted data too short")]
    Malformed,

    /// Text-transport input is not valid base64. Purely syntactic, distinct
    /// from cryptographic failures.
    #[error("invalid base64 encoding")]
    Encoding(#[from] base64::DecodeError),

    /// AEAD tag verification failed. Covers wrong passphrase, mismatched
    /// level/profile, and tampering alike; the causes are deliberately not
    /// distinguished.
    #[error("authentication failed: wrong passphrase, mismatched parameters, or corrupted data")]
    Authentication,

    /// Decrypted bytes are not valid UTF-8 (string facade only).
    #[error("decrypted data is not valid UTF-8")]
    Utf8,
}
