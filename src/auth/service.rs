use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::auth::password::verify_password;
use crate::auth::{AuthError, AuthResponse, JwtService, LoginRequest};
use crate::models::{validation_message, CreateUser, UserSummary};
use crate::services::user_service::{is_unique_violation, UserService};

/// Field order used when joining signup validation messages
const SIGNUP_FIELD_ORDER: &[&str] = &[
    "name",
    "email",
    "password",
    "age",
    "height",
    "weight",
    "primary_goal",
    "gender",
    "activity_level",
];

const LOGIN_FIELD_ORDER: &[&str] = &["email", "password"];

#[derive(Debug, Clone)]
pub struct AuthService {
    jwt_service: JwtService,
    users: UserService,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_secret: &str) -> Self {
        Self {
            jwt_service: JwtService::new(jwt_secret),
            users: UserService::new(db),
        }
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// Register a new user and issue a token
    pub async fn signup(&self, request: CreateUser) -> Result<AuthResponse, AuthError> {
        let request = request.normalized();
        request
            .validate()
            .map_err(|errors| AuthError::Validation(validation_message(&errors, SIGNUP_FIELD_ORDER)))?;

        if self.users.get_user_by_email(&request.email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }

        let user = match self.users.create_user(request).await {
            Ok(user) => user,
            // lost a race with a concurrent signup for the same address
            Err(err) if is_unique_violation(&err) => return Err(AuthError::EmailAlreadyExists),
            Err(err) => return Err(AuthError::Internal(err)),
        };

        info!(user_id = %user.id, "user registered");

        Ok(AuthResponse {
            token: self.jwt_service.create_token(user.id)?,
            user: UserSummary::from(&user),
        })
    }

    /// Check credentials and issue a token
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        let request = request.normalized();
        request
            .validate()
            .map_err(|errors| AuthError::Validation(validation_message(&errors, LOGIN_FIELD_ORDER)))?;

        let user = self
            .users
            .get_user_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthResponse {
            token: self.jwt_service.create_token(user.id)?,
            user: UserSummary::from(&user),
        })
    }
}
