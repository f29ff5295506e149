//! Password value object - Domain layer password handling.
//!
//! Hashes are Argon2id, keyed with the deployment's signing secret so a
//! leaked table cannot be attacked without the secret as well.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text with the given secret.
    ///
    /// # Errors
    /// Returns a password error if the plain text is empty or hashing fails.
    pub fn new(plain_text: &str, secret: &[u8]) -> DomainResult<Self> {
        if plain_text.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::password("Password must not be empty"));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2(secret)?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str, secret: &[u8]) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        let Ok(argon2) = Self::argon2(secret) else {
            return false;
        };

        argon2.verify_password(plain_text.as_bytes(), &parsed).is_ok()
    }

    #[inline]
    fn argon2(secret: &[u8]) -> DomainResult<Argon2<'_>> {
        Argon2::new_with_secret(secret, Algorithm::Argon2id, Version::V0x13, Params::default())
            .map_err(|e| DomainError::internal(format!("Invalid password secret: {}", e)))
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}
