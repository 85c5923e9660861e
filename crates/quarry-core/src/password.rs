//! Password hashing backed by bcrypt.
//!
//! A user without a stored hash can only sign in through an external
//! identity provider, so `verify_password` never matches a missing hash.

use crate::errors::CoreError;

/// Lowest cost bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Hash a plaintext password with the given bcrypt cost.
///
/// # Errors
///
/// Returns `CoreError::Password` if the cost is out of range or hashing fails.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, CoreError> {
    Ok(bcrypt::hash(plain, cost)?)
}

/// Check a plaintext password against a stored bcrypt hash.
///
/// Malformed hashes are treated as a mismatch.
#[must_use]
pub fn verify_password(plain: &str, hash: &str) -> bool {
    bcrypt::verify(plain, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("xyzzy", MIN_COST).unwrap();
        assert!(hash.starts_with("$2"));
        assert!(verify_password("xyzzy", &hash));
        assert!(!verify_password("plugh", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash_password("xyzzy", MIN_COST).unwrap();
        let b = hash_password("xyzzy", MIN_COST).unwrap();
        assert_ne!(a, b, "bcrypt salts every hash");
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("xyzzy", "not-a-hash"));
    }

    #[test]
    fn cost_out_of_range_is_an_error() {
        let err = hash_password("xyzzy", MAX_COST + 1).unwrap_err();
        assert!(matches!(err, CoreError::Password(_)));
    }
}
