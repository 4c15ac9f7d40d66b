//! Postgres contact-submission store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};
use uuid::Uuid;

use cafe_core::domain::{ContactSubmission, NewContactSubmission};
use cafe_core::error::DomainError;
use cafe_core::repositories::ContactStore;

pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubmissionRow {
    id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    subject: String,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl From<SubmissionRow> for ContactSubmission {
    fn from(row: SubmissionRow) -> Self {
        ContactSubmission {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            subject: row.subject,
            message: row.message,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

fn storage_err(e: sqlx::Error) -> DomainError {
    error!("contact store query failed: {e}");
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn insert(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, DomainError> {
        let row: SubmissionRow = sqlx::query_as(
            r#"
            INSERT INTO contact_submissions (name, email, phone, subject, message, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, subject, message, status, created_at
            "#,
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.phone)
        .bind(&submission.subject)
        .bind(&submission.message)
        .bind(&submission.status)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_err)?;

        info!(id = %row.id, "contact submission stored");
        Ok(row.into())
    }

    async fn list_recent(&self) -> Result<Vec<ContactSubmission>, DomainError> {
        let rows: Vec<SubmissionRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, subject, message, status, created_at
            FROM contact_submissions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
