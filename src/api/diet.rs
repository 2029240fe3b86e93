use axum::{extract::State, middleware, response::Json, routing::get, Extension, Router};

use crate::api::error::ApiError;
use crate::api::users::current_user;
use crate::auth::{jwt_auth_middleware, JwtService, UserSession};
use crate::models::{DietPlan, TodayMeals};
use crate::services::plan_selection_service::{diet_plan, todays_meals};
use crate::services::UserService;

pub fn diet_routes(user_service: UserService, jwt_service: JwtService) -> Router {
    Router::new()
        .route("/plan", get(get_plan))
        .route("/today", get(get_today))
        .route_layer(middleware::from_fn_with_state(jwt_service, jwt_auth_middleware))
        .with_state(user_service)
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
async fn get_plan(
    State(user_service): State<UserService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<DietPlan>, ApiError> {
    let user = current_user(&user_service, &session).await?;
    let plan = diet_plan(&user.profile());
    tracing::debug!(band = plan.band.label(), "diet plan selected");
    Ok(Json(plan))
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
async fn get_today(
    State(user_service): State<UserService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<TodayMeals>, ApiError> {
    let user = current_user(&user_service, &session).await?;
    Ok(Json(todays_meals(&user.profile())))
}
