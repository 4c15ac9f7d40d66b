use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::security::AccessPolicy;
use crate::utils::error::ApiError;

/// Require a valid bearer token before any handler runs.
pub async fn require_bearer(request: Request, next: Next) -> Result<Response, ApiError> {
    let policy = request
        .extensions()
        .get::<Arc<AccessPolicy>>()
        .ok_or_else(|| ApiError::Internal("Access policy not configured".to_string()))?
        .clone();

    policy.authorize(request.headers())?;

    Ok(next.run(request).await)
}
