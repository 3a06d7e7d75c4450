//! Profile store: accounts keyed by email plus each user's latest analysis.
//!
//! `AppState` holds an `Arc<dyn ProfileStore>`: `PgProfileStore` when a database is
//! configured, `InMemoryProfileStore` otherwise and in tests.

pub mod auth;
pub mod handlers;
pub mod memory;
pub mod postgres;
pub mod progress;

use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::models::{AnalysisReport, AnalysisResult};
use crate::models::user::UserRecord;
use crate::profiles::progress::ProgressError;

pub use memory::InMemoryProfileStore;
pub use postgres::PgProfileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User already exists. Please login.")]
    UserExists,

    #[error("User not found.")]
    UserNotFound,

    #[error("Incorrect password.")]
    IncorrectPassword,

    #[error("No completed analysis for {0}")]
    NoAnalysis(String),

    #[error(transparent)]
    Edit(#[from] ProgressError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// An in-place change to a stored report, applied while the store holds the row.
pub type ReportEdit = Box<dyn FnOnce(&mut AnalysisReport) -> Result<(), ProgressError> + Send>;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Creates an account with no stored profile.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<(), StoreError>;

    async fn find_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Replaces the user's stored snapshot. Only the latest analysis is kept.
    async fn save_profile(&self, email: &str, result: &AnalysisResult) -> Result<(), StoreError>;

    /// Reads, edits and writes back the stored successful analysis as one atomic step.
    /// Fails with `NoAnalysis` when the stored snapshot is absent or a failure.
    async fn update_report(
        &self,
        email: &str,
        edit: ReportEdit,
    ) -> Result<AnalysisReport, StoreError>;

    async fn load_profile(&self, email: &str) -> Result<Option<AnalysisResult>, StoreError> {
        Ok(self
            .find_user(email)
            .await?
            .and_then(|user| user.profile()))
    }

    /// Checks the password hash and returns the stored profile, if any.
    async fn verify_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<AnalysisResult>, StoreError> {
        let user = self
            .find_user(email)
            .await?
            .ok_or(StoreError::UserNotFound)?;
        if user.password_hash != password_hash {
            return Err(StoreError::IncorrectPassword);
        }
        Ok(user.profile())
    }
}

/// Decodes the user's snapshot as a successful report and applies `edit` to it.
fn apply_edit(user: &UserRecord, edit: ReportEdit) -> Result<AnalysisReport, StoreError> {
    let mut report = user
        .profile()
        .and_then(AnalysisResult::into_report)
        .ok_or_else(|| StoreError::NoAnalysis(user.user_id.clone()))?;
    edit(&mut report)?;
    Ok(report)
}
