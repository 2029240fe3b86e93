use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use axum_extra::extract::WithRejection;

use crate::api::error::ApiError;
use crate::auth::{AuthResponse, AuthService, LoginRequest};
use crate::models::CreateUser;

/// Authentication routes
pub fn auth_routes(auth_service: AuthService) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .with_state(auth_service)
}

/// Register a new user
#[tracing::instrument(skip_all)]
async fn signup(
    State(auth_service): State<AuthService>,
    WithRejection(Json(request), _): WithRejection<Json<CreateUser>, ApiError>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let response = auth_service.signup(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login user
#[tracing::instrument(skip_all)]
async fn login(
    State(auth_service): State<AuthService>,
    WithRejection(Json(request), _): WithRejection<Json<LoginRequest>, ApiError>,
) -> Result<Json<AuthResponse>, ApiError> {
    let response = auth_service.login(request).await?;
    Ok(Json(response))
}
