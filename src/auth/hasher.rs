use argon2::Argon2;
use password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

use crate::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = Argon2::default(); // uses Argon2id v19 with secure defaults (m=19MiB, t=2, p=1)

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!("hash_password: {:?}", e);
            AppError::PasswordHash(e.to_string())
        })?
        .to_string();

    Ok(password_hash)
}

/// Malformed hashes never verify.
#[cfg(test)]
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    use password_hash::{PasswordHash, PasswordVerifier};

    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_original_password() {
        let hash = hash_password("changeme123").expect("password hashed");
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("changeme123"));
        assert!(verify_password("changeme123", &hash));
        assert!(!verify_password("changeme124", &hash));
    }

    #[test]
    fn test_same_password_gets_fresh_salt() {
        let first = hash_password("S3cret!").expect("password hashed");
        let second = hash_password("S3cret!").expect("password hashed");
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_rejected() {
        assert!(!verify_password("changeme123", ""));
        assert!(!verify_password("changeme123", "not-a-phc-string"));
    }
}
