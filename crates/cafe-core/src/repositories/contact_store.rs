//! Contact submission store trait (port)

use async_trait::async_trait;

use crate::domain::{ContactSubmission, NewContactSubmission};
use crate::error::DomainError;

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, DomainError>;

    /// All submissions, newest first.
    async fn list_recent(&self) -> Result<Vec<ContactSubmission>, DomainError>;
}
