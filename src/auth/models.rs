use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::UserSummary;

/// JWT token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn normalized(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self
    }
}

/// Body returned by signup and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Authenticated caller, inserted into request extensions by the JWT middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserSession {
    pub user_id: Uuid,
}

impl UserSession {
    pub fn from_claims(claims: &Claims) -> Result<Self, uuid::Error> {
        Ok(Self {
            user_id: Uuid::parse_str(&claims.sub)?,
        })
    }
}
