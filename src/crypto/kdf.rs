use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use crate::error::{CryptioError, Result};
use crate::params::ParameterSet;

/// Derives a symmetric key from a passphrase and salt using Argon2id.
///
/// Deterministic: the same passphrase, salt, and parameters always yield
/// the same key bytes. Output length is `params.key_len`. The returned
/// buffer is zeroized on drop.
///
/// # Errors
///
/// Returns [`CryptioError::KeyDerivation`] if Argon2 rejects the parameters
/// or cannot allocate its memory block. Never retried.
pub fn derive_key(
    passphrase: &[u8],
    salt: &[u8],
    params: &ParameterSet,
) -> Result<Zeroizing<Vec<u8>>> {
    let argon_params = Params::new(
        params.mem_cost_kib,
        params.time_cost,
        params.parallelism,
        Some(params.key_len),
    )
    .map_err(|e| CryptioError::KeyDerivation(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon_params);

    let mut key = Zeroizing::new(vec![0u8; params.key_len]);
    argon2
        .hash_password_into(passphrase, salt, &mut key)
        .map_err(|e| CryptioError::KeyDerivation(e.to_string()))?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> ParameterSet {
        ParameterSet {
            salt_len: 16,
            key_len: 32,
            nonce_len: 12,
            time_cost: 1,
            mem_cost_kib: 8192,
            parallelism: 1,
        }
    }

    #[test]
    fn kdf_is_deterministic() {
        let salt = [42u8; 16];
        let params = test_params();

        let k1 = derive_key(b"password", &salt, &params).unwrap();
        let k2 = derive_key(b"password", &salt, &params).unwrap();

        assert_eq!(*k1, *k2);
        assert_eq!(k1.len(), params.key_len);
    }

    #[test]
    fn kdf_salt_affects_output() {
        let params = test_params();

        let k1 = derive_key(b"pw", &[1u8; 16], &params).unwrap();
        let k2 = derive_key(b"pw", &[2u8; 16], &params).unwrap();

        assert_ne!(*k1, *k2);
    }

    #[test]
    fn kdf_cost_params_affect_output() {
        let salt = [7u8; 16];
        let p1 = test_params();
        let p2 = ParameterSet {
            mem_cost_kib: 16384,
            ..p1
        };

        let k1 = derive_key(b"pw", &salt, &p1).unwrap();
        let k2 = derive_key(b"pw", &salt, &p2).unwrap();

        assert_ne!(*k1, *k2);
    }

    #[test]
    fn kdf_invalid_params_fail_gracefully() {
        let bad = ParameterSet {
            mem_cost_kib: 0,
            ..test_params()
        };
        assert!(matches!(
            derive_key(b"pw", &[0u8; 16], &bad),
            Err(CryptioError::KeyDerivation(_))
        ));
    }
}
