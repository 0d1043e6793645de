use std::sync::OnceLock;

use auth::JwtError;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::errors::TokenError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::HashedCredential;
use crate::domain::user::models::Password;
use crate::domain::user::models::SessionToken;
use crate::domain::user::ports::CredentialHasher;
use crate::domain::user::ports::TokenIssuer;

const DECOY_PASSWORD: &str = "decoy-password-never-issued";
const DECOY_SALT: &str = "ZGVjb3lzYWx0dmFsdWU";

/// Argon2id implementation of [`CredentialHasher`] backed by the auth library.
#[derive(Default)]
pub struct Argon2CredentialHasher {
    hasher: PasswordHasher,
    decoy: OnceLock<HashedCredential>,
}

impl Argon2CredentialHasher {
    pub fn new() -> Self {
        Self {
            hasher: PasswordHasher::new(),
            decoy: OnceLock::new(),
        }
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &Password, salt: Option<&str>) -> Result<HashedCredential, UserError> {
        self.hasher
            .hash(password.as_str(), salt)
            .map(|hashed| HashedCredential {
                hash: hashed.hash,
                salt: hashed.salt,
                algorithm: hashed.algorithm,
            })
            .map_err(|e| UserError::HashingFailed(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str, salt: &str) -> Result<bool, UserError> {
        self.hasher
            .verify(password, hash, salt)
            .map_err(|e| UserError::HashingFailed(e.to_string()))
    }

    fn decoy(&self) -> Result<HashedCredential, UserError> {
        if let Some(decoy) = self.decoy.get() {
            return Ok(decoy.clone());
        }

        let hashed = self
            .hasher
            .hash(DECOY_PASSWORD, Some(DECOY_SALT))
            .map_err(|e| UserError::HashingFailed(e.to_string()))?;
        let decoy = self.decoy.get_or_init(|| HashedCredential {
            hash: hashed.hash,
            salt: hashed.salt,
            algorithm: hashed.algorithm,
        });

        Ok(decoy.clone())
    }
}

/// HS256 JWT implementation of [`TokenIssuer`] backed by the auth library.
pub struct JwtTokenIssuer {
    handler: JwtHandler,
}

impl JwtTokenIssuer {
    /// Create an issuer from an explicit signing secret and token lifetime.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Secret is empty or `ttl` is not positive
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, TokenError> {
        JwtHandler::new(secret, ttl)
            .map(|handler| Self { handler })
            .map_err(map_jwt_error)
    }

    /// Verify against an explicit point in time.
    pub fn verify_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedIdentity, TokenError> {
        let claims = self.handler.verify_at(token, now).map_err(map_jwt_error)?;

        let email = claims
            .sub
            .clone()
            .ok_or_else(|| TokenError::InvalidToken("missing subject".to_string()))?;
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| TokenError::InvalidToken("missing expiration".to_string()))?;
        let issued_at = claims
            .issued_at()
            .ok_or_else(|| TokenError::InvalidToken("missing issue time".to_string()))?;

        Ok(AuthenticatedIdentity {
            email,
            issued_at,
            expires_at,
        })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn sign(
        &self,
        identity: &EmailAddress,
        issued_at: DateTime<Utc>,
    ) -> Result<SessionToken, TokenError> {
        let (token, claims) = self
            .handler
            .sign(identity.as_str(), issued_at)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))?;

        let issued_at = claims.issued_at().unwrap_or(issued_at);
        let expires_at = claims
            .expires_at()
            .unwrap_or(issued_at + self.handler.ttl());

        Ok(SessionToken {
            token,
            issued_at,
            expires_at,
        })
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedIdentity, TokenError> {
        self.verify_at(token, Utc::now())
    }
}

fn map_jwt_error(err: JwtError) -> TokenError {
    match err {
        JwtError::TokenExpired => TokenError::Expired,
        JwtError::EncodingFailed(message) => TokenError::SigningFailed(message),
        JwtError::InvalidConfiguration(message) => TokenError::InvalidConfiguration(message),
        JwtError::InvalidToken(message) | JwtError::MissingClaim(message) => {
            TokenError::InvalidToken(message)
        }
    }
}
