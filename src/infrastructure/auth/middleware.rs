use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{domain::auth::JwtManager, error::AppError};

/// Caller context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub subject: String,
}

/// Authentication middleware
pub async fn auth_middleware(
    State(jwt_manager): State<Arc<JwtManager>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

    let claims = jwt_manager.validate_token(token)?;
    if claims.sub.is_empty() {
        return Err(AppError::Unauthorized("Token has no subject".to_string()));
    }

    request.extensions_mut().insert(AuthUser { subject: claims.sub });

    Ok(next.run(request).await)
}
