//! Static shared-token access check. Modeled as a collaborator invoked
//! before any service call, not as part of the services themselves.

use axum::http::{header, HeaderMap};
use tracing::warn;

use crate::utils::error::ApiError;

pub struct AccessPolicy {
    admin_token: String,
}

impl AccessPolicy {
    pub fn new(admin_token: String) -> Self {
        Self { admin_token }
    }

    pub fn authorize(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        let value = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = value
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Expected a Bearer token".to_string()))?;

        if token != self.admin_token {
            warn!("rejected request with invalid access token");
            return Err(ApiError::Unauthorized("Invalid access token".to_string()));
        }
        Ok(())
    }
}
