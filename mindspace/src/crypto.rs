//! Password hashing
//!
//! Account passwords are stored as Argon2id PHC strings with a random
//! 128-bit salt; the plaintext never reaches the record store.

use crate::error::{AppError, Result};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;
use rand::RngCore;

const SALT_SIZE: usize = 16; // 128 bits

/// Hash a password into a self-describing PHC string
pub fn hash_password(password: &str) -> Result<String> {
    // Generate random salt
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);

    let salt_string = SaltString::encode_b64(&salt)
        .map_err(|e| AppError::PasswordHash(format!("Salt encoding failed: {}", e)))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt_string)
        .map_err(|e| AppError::PasswordHash(format!("Hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC string.
///
/// A malformed stored hash never matches.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password hash is malformed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Passw0rd").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Passw0rd", &hash));
        assert!(!verify_password("passw0rd", &hash));
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = hash_password("Passw0rd").unwrap();
        assert!(!hash.contains("Passw0rd"));
    }

    #[test]
    fn test_different_salts() {
        let hash1 = hash_password("same_password").unwrap();
        let hash2 = hash_password("same_password").unwrap();

        assert_ne!(hash1, hash2);
        assert!(verify_password("same_password", &hash1));
        assert!(verify_password("same_password", &hash2));
    }

    #[test]
    fn test_malformed_hash_rejects() {
        assert!(!verify_password("Passw0rd", "Passw0rd"));
        assert!(!verify_password("Passw0rd", ""));
    }

    #[test]
    fn test_unicode_password() {
        let password = "пароль密码🔐A1";
        let hash = hash_password(password).unwrap();
        assert!(verify_password(password, &hash));
    }
}
