use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;

use crate::analysis::models::AnalysisResult;

/// A stored account and its latest analysis snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    /// The user's email address.
    pub user_id: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(email: &str, password_hash: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: email.to_string(),
            password_hash: password_hash.to_string(),
            data: None,
            created_at: Utc::now(),
        }
    }

    /// Decodes the stored snapshot. A snapshot that no longer parses counts as absent.
    pub fn profile(&self) -> Option<AnalysisResult> {
        let data = self.data.as_ref()?;
        match serde_json::from_value(data.clone()) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!("Discarding unreadable profile for {}: {e}", self.user_id);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_user_has_no_profile() {
        assert!(UserRecord::new("a@b.com", "hash").profile().is_none());
    }

    #[test]
    fn test_unreadable_profile_is_absent() {
        let mut user = UserRecord::new("a@b.com", "hash");
        user.data = Some(json!({"unexpected": true}));
        assert!(user.profile().is_none());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let value = serde_json::to_value(UserRecord::new("a@b.com", "secret-hash")).unwrap();
        assert!(value.get("password_hash").is_none());
    }
}
