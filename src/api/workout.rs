use axum::{extract::State, middleware, response::Json, routing::get, Extension, Router};
use chrono::Local;

use crate::api::error::ApiError;
use crate::api::users::current_user;
use crate::auth::{jwt_auth_middleware, JwtService, UserSession};
use crate::models::{TodayWorkout, WorkoutPlan};
use crate::services::plan_selection_service::{todays_workout, workout_plan};
use crate::services::UserService;

pub fn workout_routes(user_service: UserService, jwt_service: JwtService) -> Router {
    Router::new()
        .route("/plan", get(get_plan))
        .route("/today", get(get_today))
        .route_layer(middleware::from_fn_with_state(jwt_service, jwt_auth_middleware))
        .with_state(user_service)
}

/// Weekly program for the caller's goal, location and frequency
#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
async fn get_plan(
    State(user_service): State<UserService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<WorkoutPlan>, ApiError> {
    let user = current_user(&user_service, &session).await?;
    Ok(Json(workout_plan(&user.profile())))
}

/// Session for the server's local calendar day
#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
async fn get_today(
    State(user_service): State<UserService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<TodayWorkout>, ApiError> {
    let user = current_user(&user_service, &session).await?;
    let today = Local::now().date_naive();
    Ok(Json(todays_workout(&user.profile(), today)))
}
