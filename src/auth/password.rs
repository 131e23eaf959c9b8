use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

/// One-way hash of an agent secret: argon2 with a fresh random salt, encoded
/// as a PHC string. The plaintext is never persisted.
pub fn hash_secret(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let phc = Argon2::default()
        .hash_password(secret.as_bytes(), &salt)?
        .to_string();
    Ok(phc)
}

/// Verify a candidate secret against a stored PHC hash. An unparseable hash
/// counts as a mismatch rather than an error.
pub fn verify_secret(hash: &str, secret: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_secret("secret123").unwrap();
        assert_ne!(hash, "secret123");
        assert!(verify_secret(&hash, "secret123"));
        assert!(!verify_secret(&hash, "secret124"));
    }

    #[test]
    fn test_salting_makes_hashes_unique() {
        let a = hash_secret("secret123").unwrap();
        let b = hash_secret("secret123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!verify_secret("not-a-phc-string", "secret123"));
    }
}
