use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::analysis::models::{AnalysisReport, AnalysisResult};
use crate::models::user::UserRecord;
use crate::profiles::{apply_edit, ProfileStore, ReportEdit, StoreError};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryProfileStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(email) {
            return Err(StoreError::UserExists);
        }
        users.insert(email.to_string(), UserRecord::new(email, password_hash));
        Ok(())
    }

    async fn find_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn save_profile(&self, email: &str, result: &AnalysisResult) -> Result<(), StoreError> {
        let data = serde_json::to_value(result)?;
        let mut users = self.users.write().await;
        let user = users.get_mut(email).ok_or(StoreError::UserNotFound)?;
        user.data = Some(data);
        Ok(())
    }

    async fn update_report(
        &self,
        email: &str,
        edit: ReportEdit,
    ) -> Result<AnalysisReport, StoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(email).ok_or(StoreError::UserNotFound)?;
        let report = apply_edit(user, edit)?;
        user.data = Some(serde_json::to_value(AnalysisResult::Success(report.clone()))?);
        Ok(report)
    }
}
