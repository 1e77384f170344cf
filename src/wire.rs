//! Wire layout and text transport for encrypted messages.
//!
//! A message is the plain concatenation `salt ‖ nonce ‖ ciphertext+tag`
//! with no length prefixes, version byte, or embedded parameters. Field
//! boundaries come from the receiving session's resolved parameters, so a
//! buffer is only decodable by a session whose salt and nonce lengths match
//! the producer's. This is a deliberate compatibility constraint inherited
//! from the format, not an oversight.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::{CryptioError, Result};

/// Packs salt, nonce, and AEAD output into one buffer.
pub fn encode(salt: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(salt.len() + nonce.len() + ciphertext.len());
    buf.extend_from_slice(salt);
    buf.extend_from_slice(nonce);
    buf.extend_from_slice(ciphertext);
    buf
}

/// Splits a buffer back into `(salt, nonce, ciphertext)` slices.
///
/// # Errors
///
/// Returns [`CryptioError::Malformed`] if the buffer cannot even hold the
/// fixed salt+nonce prefix. A buffer that is long enough but garbage is
/// only caught later by tag verification.
pub fn decode(buf: &[u8], salt_len: usize, nonce_len: usize) -> Result<(&[u8], &[u8], &[u8])> {
    if buf.len() < salt_len + nonce_len {
        return Err(CryptioError::Malformed);
    }

    let (salt, rest) = buf.split_at(salt_len);
    let (nonce, ciphertext) = rest.split_at(nonce_len);
    Ok((salt, nonce, ciphertext))
}

/// Encodes a wire buffer as standard base64 for string-oriented call sites.
pub fn encode_text(raw: &[u8]) -> String {
    STANDARD.encode(raw)
}

/// Decodes the base64 text form back into a wire buffer.
///
/// # Errors
///
/// Returns [`CryptioError::Encoding`] on invalid base64. Purely syntactic;
/// raised before any buffer parsing or cryptographic work.
pub fn decode_text(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}
