use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use super::auth::auth_routes;
use super::diet::diet_routes;
use super::health::health_check;
use super::progress::progress_routes;
use super::users::user_routes;
use super::workout::workout_routes;
use crate::auth::{cors_layer, AuthService};
use crate::services::{ProgressService, UserService};

pub fn create_routes(db: PgPool, jwt_secret: &str) -> Router {
    let auth_service = AuthService::new(db.clone(), jwt_secret);
    let jwt_service = auth_service.jwt_service().clone();
    let user_service = UserService::new(db.clone());
    let progress_service = ProgressService::new(db);

    Router::new()
        .route("/api/health", get(health_check))
        .nest("/api/auth", auth_routes(auth_service))
        .nest("/api/users", user_routes(user_service.clone(), jwt_service.clone()))
        .nest("/api/workout", workout_routes(user_service.clone(), jwt_service.clone()))
        .nest("/api/diet", diet_routes(user_service, jwt_service.clone()))
        .nest("/api/progress", progress_routes(progress_service, jwt_service))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
