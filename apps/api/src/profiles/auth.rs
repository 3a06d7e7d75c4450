//! Credential handling: hashing and the register/login flows over a `ProfileStore`.

use sha2::{Digest, Sha256};
use tracing::info;

use crate::analysis::models::AnalysisResult;
use crate::profiles::{ProfileStore, StoreError};

/// Hex-encoded SHA-256 of the password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Emails are stored and looked up trimmed.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_string()
}

pub async fn register(
    store: &dyn ProfileStore,
    email: &str,
    password: &str,
) -> Result<(), StoreError> {
    let email = normalize_email(email);
    store.create_user(&email, &hash_password(password)).await?;
    info!("Created account for {email}");
    Ok(())
}

/// Verifies credentials and returns the last stored analysis, if any.
pub async fn login(
    store: &dyn ProfileStore,
    email: &str,
    password: &str,
) -> Result<Option<AnalysisResult>, StoreError> {
    store
        .verify_user(&normalize_email(email), &hash_password(password))
        .await
}
