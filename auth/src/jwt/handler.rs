use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Signs and verifies time-bounded session tokens.
///
/// Tokens are HS256 (HMAC with SHA-256) JWTs. The signature covers the
/// subject, the issued-at time and the expiration; the expiration is always
/// `issued_at + ttl`.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl` - Validity window of every issued token
    ///
    /// # Errors
    /// * `InvalidConfiguration` - Secret is empty or `ttl` is not positive
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::InvalidConfiguration(
                "signing secret must not be empty".to_string(),
            ));
        }
        if ttl <= Duration::zero() {
            return Err(JwtError::InvalidConfiguration(format!(
                "token ttl must be positive, got {} seconds",
                ttl.num_seconds()
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        })
    }

    /// Validity window applied to issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a token for `subject` issued at `issued_at`.
    ///
    /// # Returns
    /// Encoded token and the claims it carries
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn sign(
        &self,
        subject: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<(String, Claims), JwtError> {
        let claims = Claims::for_subject(subject, issued_at, self.ttl);
        let header = Header::new(self.algorithm);

        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        Ok((token, claims))
    }

    /// Verify a token against the current time.
    ///
    /// See [`JwtHandler::verify_at`].
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token's signature and expiration at `now`.
    ///
    /// The HMAC is recomputed with the handler's secret and compared in
    /// constant time by `jsonwebtoken`. Expiration is checked here, without
    /// leeway, against the supplied time.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed token, wrong algorithm or signature mismatch
    /// * `MissingClaim` - Token lacks `sub` or `exp`
    /// * `TokenExpired` - `now` is past the token's expiration
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::MissingRequiredClaim(claim) => JwtError::MissingClaim(claim.clone()),
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::InvalidToken(e.to_string()),
            })?;

        let claims = token_data.claims;
        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}
