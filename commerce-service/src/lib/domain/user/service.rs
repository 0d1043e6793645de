use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::SessionToken;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::UserCredential;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::CredentialHasher;
use crate::domain::user::ports::TokenIssuer;
use crate::domain::user::ports::UserCredentialStore;

/// Domain service implementation for signup, login and token verification.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<S, H, T>
where
    S: UserCredentialStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    store: Arc<S>,
    hasher: Arc<H>,
    token_issuer: Arc<T>,
}

impl<S, H, T> AuthService<S, H, T>
where
    S: UserCredentialStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `hasher` - Password hashing implementation
    /// * `token_issuer` - Session token implementation
    pub fn new(store: Arc<S>, hasher: Arc<H>, token_issuer: Arc<T>) -> Self {
        Self {
            store,
            hasher,
            token_issuer,
        }
    }
}

#[async_trait]
impl<S, H, T> AuthServicePort for AuthService<S, H, T>
where
    S: UserCredentialStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    async fn signup(&self, command: SignupCommand) -> Result<UserCredential, UserError> {
        if self.store.find_by_email(&command.email).await?.is_some() {
            return Err(UserError::DuplicateUser(command.email.to_string()));
        }

        let hashed = self.hasher.hash(&command.password, None)?;

        let credential = UserCredential {
            id: UserId::new(),
            email: command.email,
            password_hash: hashed.hash,
            salt: hashed.salt,
            hash_algorithm: hashed.algorithm,
            created_at: Utc::now(),
        };

        let created = self.store.create(credential).await?;
        tracing::info!(user_id = %created.id, "User signed up");

        Ok(created)
    }

    async fn login(&self, command: LoginCommand) -> Result<SessionToken, UserError> {
        let credential = match EmailAddress::new(command.email) {
            Ok(email) => self.store.find_by_email(&email).await?,
            Err(_) => None,
        };

        if command.password.is_empty() {
            tracing::debug!("Login rejected");
            return Err(UserError::AuthenticationFailed);
        }

        // Exactly one hash verification per attempt, whether or not the email is known.
        let verified = match &credential {
            Some(credential) => self.hasher.verify(
                &command.password,
                &credential.password_hash,
                &credential.salt,
            )?,
            None => {
                let decoy = self.hasher.decoy()?;
                self.hasher
                    .verify(&command.password, &decoy.hash, &decoy.salt)?;
                false
            }
        };

        let Some(credential) = credential.filter(|_| verified) else {
            tracing::debug!("Login rejected");
            return Err(UserError::AuthenticationFailed);
        };

        let token = self.token_issuer.sign(&credential.email, Utc::now())?;
        tracing::info!(user_id = %credential.id, "User logged in");

        Ok(token)
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedIdentity, UserError> {
        Ok(self.token_issuer.verify(token)?)
    }
}
