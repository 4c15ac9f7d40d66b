//! Contact-form service: validates and normalizes submissions before
//! handing them to the relational store.

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::info;

use crate::domain::{ContactForm, ContactSubmission, NewContactSubmission};
use crate::error::DomainError;
use crate::repositories::ContactStore;
use crate::services::require;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub struct ContactService {
    store: Arc<dyn ContactStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Validate and store a contact form submission. Fields are trimmed,
    /// the email is lowercased, and new rows start in status "new".
    pub async fn submit(&self, form: ContactForm) -> Result<ContactSubmission, DomainError> {
        let name = require("name", &form.name)?;
        let email = require("email", &form.email)?.to_lowercase();
        let subject = require("subject", &form.subject)?;
        let message = require("message", &form.message)?;

        if !EMAIL_RE.is_match(&email) {
            return Err(DomainError::Validation("Invalid email address".to_string()));
        }

        let phone = form
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let stored = self
            .store
            .insert(NewContactSubmission {
                name,
                email,
                phone,
                subject,
                message,
                status: "new".to_string(),
            })
            .await?;

        info!(id = %stored.id, "contact form submitted");
        Ok(stored)
    }

    /// All submissions, newest first (admin dashboard view).
    pub async fn submissions(&self) -> Result<Vec<ContactSubmission>, DomainError> {
        self.store.list_recent().await
    }
}
