use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::errors::TokenError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::HashedCredential;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Password;
use crate::domain::user::models::SessionToken;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::UserCredential;

/// Port for authentication use cases.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated email and password
    ///
    /// # Returns
    /// Stored credential
    ///
    /// # Errors
    /// * `DuplicateUser` - Email is already registered
    /// * `HashingFailed` - Password could not be hashed
    /// * `DatabaseError` - Store operation failed
    async fn signup(&self, command: SignupCommand) -> Result<UserCredential, UserError>;

    /// Check credentials and issue a session token.
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown email, malformed email or wrong password
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, command: LoginCommand) -> Result<SessionToken, UserError>;

    /// Decode a session token into the identity it was issued for.
    ///
    /// # Errors
    /// * `Token(InvalidToken)` - Malformed token or signature mismatch
    /// * `Token(Expired)` - Token is past its expiration
    fn verify(&self, token: &str) -> Result<AuthenticatedIdentity, UserError>;
}

/// Persistence operations for user credentials.
#[async_trait]
pub trait UserCredentialStore: Send + Sync + 'static {
    /// Persist a new credential.
    ///
    /// # Errors
    /// * `DuplicateUser` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, credential: UserCredential) -> Result<UserCredential, UserError>;

    /// Retrieve a credential by normalized email.
    ///
    /// # Returns
    /// Optional credential (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<UserCredential>, UserError>;
}

/// Salted, slow one-way password hashing.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash `password`, generating a random salt unless one is supplied.
    ///
    /// # Errors
    /// * `HashingFailed` - Empty password, invalid salt or hashing failure
    fn hash(&self, password: &Password, salt: Option<&str>) -> Result<HashedCredential, UserError>;

    /// Check `password` against a stored hash produced with `salt`.
    ///
    /// # Errors
    /// * `HashingFailed` - Empty password or corrupt stored hash
    fn verify(&self, password: &str, hash: &str, salt: &str) -> Result<bool, UserError>;

    /// Fixed credential produced with the same algorithm and cost as real ones.
    ///
    /// Verified against when no stored credential exists, so an unknown email
    /// costs as much as a wrong password.
    ///
    /// # Errors
    /// * `HashingFailed` - Decoy could not be produced
    fn decoy(&self) -> Result<HashedCredential, UserError>;
}

/// Signs and verifies time-bounded session tokens.
pub trait TokenIssuer: Send + Sync + 'static {
    /// Sign a token for `identity` issued at `issued_at`.
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding failed
    fn sign(
        &self,
        identity: &EmailAddress,
        issued_at: DateTime<Utc>,
    ) -> Result<SessionToken, TokenError>;

    /// Verify a token against the current time.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed token or signature mismatch
    /// * `Expired` - Token is past its expiration
    fn verify(&self, token: &str) -> Result<AuthenticatedIdentity, TokenError>;
}
