use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::get,
    Extension, Router,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::api::error::ApiError;
use crate::auth::{jwt_auth_middleware, AuthError, JwtService, UserSession};
use crate::models::{validation_message, UpdateUser, User, UserResponse};
use crate::services::UserService;

const UPDATE_FIELD_ORDER: &[&str] = &[
    "name",
    "age",
    "height",
    "weight",
    "gender",
    "activity_level",
    "primary_goal",
    "workout_location",
    "workout_days_per_week",
    "dietary_preference",
    "focus_areas",
];

/// Profile routes for the authenticated user
pub fn user_routes(user_service: UserService, jwt_service: JwtService) -> Router {
    Router::new()
        .route("/me", get(get_me).put(update_me))
        .route_layer(middleware::from_fn_with_state(jwt_service, jwt_auth_middleware))
        .with_state(user_service)
}

/// Load the row behind a session. A valid token for a deleted account is a 401.
pub(crate) async fn current_user(
    user_service: &UserService,
    session: &UserSession,
) -> Result<User, ApiError> {
    user_service
        .get_user_by_id(session.user_id)
        .await?
        .ok_or(ApiError::Auth(AuthError::InvalidToken))
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
async fn get_me(
    State(user_service): State<UserService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = current_user(&user_service, &session).await?;
    Ok(Json(UserResponse::from(user)))
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
async fn update_me(
    State(user_service): State<UserService>,
    Extension(session): Extension<UserSession>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateUser>, ApiError>,
) -> Result<Json<UserResponse>, ApiError> {
    let request = request.normalized();
    request
        .validate()
        .map_err(|errors| ApiError::Validation(validation_message(&errors, UPDATE_FIELD_ORDER)))?;

    let user = user_service
        .update_user(session.user_id, request)
        .await?
        .ok_or(ApiError::Auth(AuthError::InvalidToken))?;

    tracing::info!("profile updated");
    Ok(Json(UserResponse::from(user)))
}
