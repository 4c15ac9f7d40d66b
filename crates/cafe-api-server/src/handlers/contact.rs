//! Contact-form endpoints.

use axum::{extract::Extension, Json};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use cafe_core::domain::{ContactForm, ContactSubmission};
use cafe_core::services::ContactService;

use crate::utils::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub submission_id: Uuid,
}

pub async fn submit(
    Extension(contact): Extension<Arc<ContactService>>,
    Json(form): Json<ContactForm>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let stored = contact.submit(form).await?;

    Ok(Json(SubmitResponse {
        success: true,
        message: "Thank you for your message! We will get back to you shortly.".to_string(),
        submission_id: stored.id,
    }))
}

#[derive(Serialize)]
pub struct SubmissionsResponse {
    pub success: bool,
    pub submissions: Vec<ContactSubmission>,
}

pub async fn list_submissions(
    Extension(contact): Extension<Arc<ContactService>>,
) -> Result<Json<SubmissionsResponse>, ApiError> {
    let submissions = contact.submissions().await?;
    Ok(Json(SubmissionsResponse {
        success: true,
        submissions,
    }))
}
