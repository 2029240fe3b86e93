use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::{delete, get},
    Extension, Router,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::auth::{jwt_auth_middleware, JwtService, UserSession};
use crate::models::{CreateProgressLog, ProgressLog, ProgressStats};
use crate::services::{DeleteOutcome, ProgressService};

pub fn progress_routes(progress_service: ProgressService, jwt_service: JwtService) -> Router {
    Router::new()
        .route("/", get(list_logs).post(create_log))
        .route("/stats", get(get_stats))
        .route("/:id", delete(delete_log))
        .route_layer(middleware::from_fn_with_state(jwt_service, jwt_auth_middleware))
        .with_state(progress_service)
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
async fn create_log(
    State(progress_service): State<ProgressService>,
    Extension(session): Extension<UserSession>,
    WithRejection(Json(request), _): WithRejection<Json<CreateProgressLog>, ApiError>,
) -> Result<(StatusCode, Json<ProgressLog>), ApiError> {
    let log = progress_service.create_log(session.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
async fn list_logs(
    State(progress_service): State<ProgressService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<Vec<ProgressLog>>, ApiError> {
    let logs = progress_service.list_logs(session.user_id).await?;
    Ok(Json(logs))
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
async fn get_stats(
    State(progress_service): State<ProgressService>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<ProgressStats>, ApiError> {
    let stats = progress_service.get_stats(session.user_id).await?;
    Ok(Json(stats))
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
async fn delete_log(
    State(progress_service): State<ProgressService>,
    Extension(session): Extension<UserSession>,
    WithRejection(Path(log_id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<Json<Value>, ApiError> {
    match progress_service.delete_log(session.user_id, log_id).await? {
        DeleteOutcome::Deleted => Ok(Json(json!({ "message": "Progress log deleted" }))),
        DeleteOutcome::NotFound => Err(ApiError::NotFound("Progress log not found".to_string())),
        DeleteOutcome::NotOwner => Err(ApiError::Forbidden("Not authorized".to_string())),
    }
}
