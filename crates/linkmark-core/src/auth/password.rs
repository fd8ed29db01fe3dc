//! Password hashing
//!
//! bcrypt with a fixed work factor. The resulting string is
//! self-contained (algorithm, cost, salt, digest), so verification needs
//! nothing beyond the hash itself. Hashing is one-way; there is no
//! decryption path.

use super::AuthResult;

/// Fixed bcrypt work factor
const BCRYPT_COST: u32 = 12;

/// Hash a plaintext password
pub fn hash_password(plaintext: &str) -> AuthResult<String> {
    Ok(bcrypt::hash(plaintext, BCRYPT_COST)?)
}

/// Verify a plaintext password against a stored hash
///
/// Returns `false` on mismatch. Errors only when the stored hash is
/// malformed.
pub fn verify_password(plaintext: &str, hash: &str) -> AuthResult<bool> {
    Ok(bcrypt::verify(plaintext, hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("pw123").unwrap();

        // Self-contained modular crypt format, never the plaintext
        assert!(hash.starts_with("$2"));
        assert_ne!(hash, "pw123");

        assert!(verify_password("pw123", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let hash = hash_password("pw123").unwrap();
        assert!(!verify_password("pw124", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Fresh salt per hash
        let first = hash_password("pw123").unwrap();
        let second = hash_password("pw123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("pw123", "not-a-bcrypt-hash").is_err());
    }
}
