use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// Hash a password using Argon2id (19MB memory, 2 iterations, parallelism 1).
pub fn hash(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let params = Params::new(19 * 1024, 2, 1, None).map_err(|e| format!("Invalid params: {e}"))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| format!("Hashing failed: {e}"))
}

/// Verify a password against a hash. Parameters are read from the hash itself.
pub fn verify(password: &str, hash: &str) -> Result<bool, String> {
    let parsed = PasswordHash::new(hash).map_err(|e| format!("Invalid hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// [`hash`] on the blocking pool so request workers are never stalled.
pub async fn hash_blocking(password: String) -> Result<String, String> {
    tokio::task::spawn_blocking(move || hash(&password))
        .await
        .map_err(|e| format!("Hashing task failed: {e}"))?
}

/// [`verify`] on the blocking pool.
pub async fn verify_blocking(password: String, hash: String) -> Result<bool, String> {
    tokio::task::spawn_blocking(move || verify(&password, &hash))
        .await
        .map_err(|e| format!("Verification task failed: {e}"))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let h = hash("pw123456").unwrap();
        assert!(h.starts_with("$argon2id$"));
        assert!(verify("pw123456", &h).unwrap());
        assert!(!verify("pw123457", &h).unwrap());
        assert!(!verify("", &h).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash("correct horse").unwrap();
        let b = hash("correct horse").unwrap();
        assert_ne!(a, b);
        assert!(verify("correct horse", &a).unwrap());
        assert!(verify("correct horse", &b).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify("pw123456", "not-a-phc-string").is_err());
    }

    #[tokio::test]
    async fn blocking_variants_agree() {
        let h = hash_blocking("pw123456".to_string()).await.unwrap();
        assert!(verify_blocking("pw123456".to_string(), h.clone()).await.unwrap());
        assert!(!verify_blocking("nope".to_string(), h).await.unwrap());
    }
}
