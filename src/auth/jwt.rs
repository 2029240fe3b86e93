use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::auth::{AuthError, Claims, UserSession};

/// JWT token service for creating and validating tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expires_in: Duration,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .field("token_expires_in", &self.token_expires_in)
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service with the given secret
    pub fn new(secret: &str) -> Self {
        Self::with_expiry(secret, Duration::days(30))
    }

    pub fn with_expiry(secret: &str, token_expires_in: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expires_in,
        }
    }

    /// Create a signed HS256 token for a user
    pub fn create_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + self.token_expires_in;

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp().max(0) as usize,
            exp: exp.timestamp().max(0) as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(AuthError::Jwt)
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }

    /// Extract user session from token
    pub fn extract_user_session(&self, token: &str) -> Result<UserSession, AuthError> {
        let claims = self.validate_token(token)?;
        UserSession::from_claims(&claims).map_err(|_| AuthError::InvalidToken)
    }
}

/// Extract bearer token from authorization header
pub fn extract_bearer_token(auth_header: &str) -> Result<&str, AuthError> {
    match auth_header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::InvalidAuthHeaderFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_creation_and_validation() {
        let jwt_service = JwtService::new("test_secret");
        let user_id = Uuid::new_v4();

        let token = jwt_service.create_token(user_id).unwrap();
        let claims = jwt_service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(extract_bearer_token("Bearer test_token").unwrap(), "test_token");

        assert!(extract_bearer_token("Invalid header").is_err());
        assert!(extract_bearer_token("Bearer ").is_err());
        assert!(extract_bearer_token("bearer test_token").is_err());
    }

    #[test]
    fn test_user_session_extraction() {
        let jwt_service = JwtService::new("test_secret");
        let user_id = Uuid::new_v4();

        let token = jwt_service.create_token(user_id).unwrap();
        let session = jwt_service.extract_user_session(&token).unwrap();

        assert_eq!(session.user_id, user_id);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = JwtService::new("secret_a").create_token(Uuid::new_v4()).unwrap();

        assert!(matches!(
            JwtService::new("secret_b").validate_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // jsonwebtoken allows 60s of leeway by default
        let jwt_service = JwtService::with_expiry("test_secret", Duration::minutes(-5));
        let token = jwt_service.create_token(Uuid::new_v4()).unwrap();

        assert!(matches!(
            jwt_service.validate_token(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_non_uuid_subject_is_invalid() {
        let jwt_service = JwtService::new("test_secret");
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test_secret"),
        )
        .unwrap();

        assert!(matches!(
            jwt_service.extract_user_session(&token),
            Err(AuthError::InvalidToken)
        ));
    }
}
