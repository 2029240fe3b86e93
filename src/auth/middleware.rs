use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tower_http::cors::{Any, CorsLayer};

use crate::auth::{extract_bearer_token, AuthError, JwtService};

/// JWT authentication middleware.
///
/// Only the token is checked here; handlers that need the user row load it
/// themselves from the inserted [`UserSession`](crate::auth::UserSession).
pub async fn jwt_auth_middleware(
    State(jwt_service): State<JwtService>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(AuthError::MissingAuthHeader)?;

    let token = extract_bearer_token(auth_header)?;
    let session = jwt_service.extract_user_session(token)?;

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Permissive CORS for the browser client
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
