use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Claims embedded in a bearer token: the owning agent's id plus the
/// issued-at and expiry instants.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature mismatch")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("token generation failed: {0}")]
    Issue(String),
}

/// Issues and verifies signed, time-limited bearer tokens.
///
/// The signing secret is injected at construction and the keys are built once;
/// the service is cheap to clone and shared through app state. Tokens are
/// stateless: validity is determined purely by signature and expiry at
/// verification time, never by server-side records.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Issue a token for `agent_id`, valid from now until now + ttl.
    pub fn issue(&self, agent_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(agent_id, Utc::now())
    }

    /// Issue a token as of a given instant. Pure in `(agent_id, now, secret)`:
    /// the same inputs always produce the identical token string.
    pub fn issue_at(&self, agent_id: Uuid, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: agent_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| TokenError::Issue(e.to_string()))
    }

    /// Verify a token and recover the embedded agent id.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        // No leeway: a token whose expiry has passed fails immediately.
        let mut validation = Validation::default();
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            }
        })?;

        Ok(data.claims.sub)
    }
}
