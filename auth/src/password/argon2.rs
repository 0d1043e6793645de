use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Algorithm tag stored next to every hash produced by [`PasswordHasher`].
pub const ALGORITHM: &str = "argon2id";

/// Output of a hashing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword {
    /// PHC string (algorithm, parameters, salt and digest)
    pub hash: String,
    /// Base64 salt used to derive `hash`
    pub salt: String,
    /// Algorithm tag, see [`ALGORITHM`]
    pub algorithm: String,
}

/// Salted password hashing.
///
/// Internally uses Argon2id with the crate's default cost parameters.
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    /// * `salt` - Base64 salt to reuse, or `None` to generate a random one
    ///
    /// # Returns
    /// Hash, salt and algorithm tag
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `InvalidSalt` - Supplied salt is not a valid base64 salt string
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str, salt: Option<&str>) -> Result<HashedPassword, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        let salt = match salt {
            Some(encoded) => SaltString::from_b64(encoded)
                .map_err(|e| PasswordError::InvalidSalt(e.to_string()))?,
            None => SaltString::generate(&mut OsRng),
        };

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash,
            salt: salt.as_str().to_string(),
            algorithm: ALGORITHM.to_string(),
        })
    }

    /// Verify a password against a stored hash and salt.
    ///
    /// Returns `false` both for a wrong password and for a salt that differs
    /// from the one embedded in `hash`.
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `VerificationFailed` - Stored hash is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &str, salt: &str) -> Result<bool, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        let salt_matches = parsed_hash
            .salt
            .map_or(false, |embedded| embedded.as_str() == salt);
        if !salt_matches {
            return Ok(false);
        }

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
