//! JWT token generation and validation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::{AccountId, DomainError};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (account ID)
    pub sub: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl JwtClaims {
    pub fn new(account_id: AccountId, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    pub fn account_id(&self) -> Result<AccountId, DomainError> {
        self.sub
            .parse()
            .map_err(|_| DomainError::credential("Token subject is not an account"))
    }
}

/// Configuration for JWT service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token expiration time in hours
    pub expiration_hours: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            expiration_hours: 24,
        }
    }
}

/// HS256 token service
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiration_hours", &self.config.expiration_hours)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate a token for an account using the configured lifetime
    pub fn generate(&self, account_id: AccountId) -> Result<String, DomainError> {
        self.issue(&JwtClaims::new(account_id, self.config.expiration_hours))
    }

    /// Sign arbitrary claims
    pub fn issue(&self, claims: &JwtClaims) -> Result<String, DomainError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))
    }

    /// Validate a token and return its claims
    pub fn validate(&self, token: &str) -> Result<JwtClaims, DomainError> {
        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| DomainError::credential(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }

    pub fn expiration_hours(&self) -> u64 {
        self.config.expiration_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new(JwtConfig::new("test-secret", 1))
    }

    #[test]
    fn test_generate_and_validate() {
        let jwt = service();

        let token = jwt.generate(AccountId::new(7)).unwrap();
        let claims = jwt.validate(&token).unwrap();

        assert_eq!(claims.account_id().unwrap(), AccountId::new(7));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().generate(AccountId::new(7)).unwrap();
        let other = JwtService::new(JwtConfig::new("another-secret", 1));

        assert!(matches!(
            other.validate(&token),
            Err(DomainError::Credential { .. })
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let jwt = service();
        let now = Utc::now().timestamp();
        let claims = JwtClaims {
            sub: "7".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };

        let token = jwt.issue(&claims).unwrap();
        assert!(jwt.validate(&token).is_err());
    }

    #[test]
    fn test_non_numeric_subject() {
        let claims = JwtClaims {
            sub: "admin".to_string(),
            iat: 0,
            exp: 0,
        };

        assert!(claims.account_id().is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let debug = format!("{:?}", service());
        assert!(!debug.contains("test-secret"));
    }
}
