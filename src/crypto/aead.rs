use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use getrandom::fill;
use zeroize::Zeroizing;

use crate::error::{CryptioError, Result};

/// Draws `len` cryptographically secure random bytes for salts and nonces.
///
/// # Errors
///
/// Returns [`CryptioError::RandomSource`] if the OS generator is
/// unavailable. Fatal for the call, not retried.
pub fn random_bytes(len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    fill(&mut buf).map_err(|_| CryptioError::RandomSource)?;
    Ok(buf)
}

/// Encrypts and authenticates plaintext under AES-256-GCM.
///
/// Output is ciphertext with the 16-byte tag appended, so its length is
/// always `plaintext.len() + TAG_LEN`. No associated data is used.
pub fn seal(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher =
        Aes256Gcm::new_from_slice(key).map_err(|e| CryptioError::KeyDerivation(e.to_string()))?;

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| CryptioError::Authentication)
}

/// Decrypts and verifies ciphertext produced by [`seal`].
///
/// This is the sole integrity check in the system: any bit difference in
/// key, nonce, or ciphertext surfaces as [`CryptioError::Authentication`],
/// never as silently wrong plaintext. The returned buffer is zeroized on
/// drop.
pub fn open(key: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let cipher =
        Aes256Gcm::new_from_slice(key).map_err(|e| CryptioError::KeyDerivation(e.to_string()))?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptioError::Authentication)?;
    Ok(Zeroizing::new(plaintext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{KEY_LEN, NONCE_LEN, TAG_LEN};

    #[test]
    fn seal_open_roundtrip() {
        let key = [9u8; KEY_LEN];
        let nonce = [1u8; NONCE_LEN];

        let ct = seal(&key, &nonce, b"secret data").unwrap();
        assert_eq!(ct.len(), b"secret data".len() + TAG_LEN);

        let pt = open(&key, &nonce, &ct).unwrap();
        assert_eq!(&*pt, b"secret data");
    }

    #[test]
    fn empty_plaintext_is_tag_only() {
        let key = [9u8; KEY_LEN];
        let nonce = [1u8; NONCE_LEN];

        let ct = seal(&key, &nonce, b"").unwrap();
        assert_eq!(ct.len(), TAG_LEN);
        assert!(open(&key, &nonce, &ct).unwrap().is_empty());
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let key = [9u8; KEY_LEN];
        let nonce = [1u8; NONCE_LEN];

        let mut ct = seal(&key, &nonce, b"secret data").unwrap();
        ct[0] ^= 0x01;

        assert!(matches!(
            open(&key, &nonce, &ct),
            Err(CryptioError::Authentication)
        ));
    }

    #[test]
    fn wrong_key_fails() {
        let nonce = [1u8; NONCE_LEN];
        let ct = seal(&[9u8; KEY_LEN], &nonce, b"secret data").unwrap();

        assert!(matches!(
            open(&[8u8; KEY_LEN], &nonce, &ct),
            Err(CryptioError::Authentication)
        ));
    }

    #[test]
    fn wrong_nonce_fails() {
        let key = [9u8; KEY_LEN];
        let ct = seal(&key, &[1u8; NONCE_LEN], b"secret data").unwrap();

        assert!(matches!(
            open(&key, &[2u8; NONCE_LEN], &ct),
            Err(CryptioError::Authentication)
        ));
    }

    #[test]
    fn random_bytes_have_requested_length() {
        assert_eq!(random_bytes(0).unwrap().len(), 0);
        assert_eq!(random_bytes(32).unwrap().len(), 32);
    }

    #[test]
    fn random_salts_differ() {
        let a = random_bytes(16).unwrap();
        let b = random_bytes(16).unwrap();
        assert_ne!(a, b);
    }
}
