use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::analysis::models::{AnalysisReport, AnalysisResult};
use crate::models::user::UserRecord;
use crate::profiles::{apply_edit, ProfileStore, ReportEdit, StoreError};

/// PostgreSQL-backed store over the `user_profiles` table.
#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates `user_profiles` if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_profiles (
                id            UUID PRIMARY KEY,
                user_id       TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                data          JSONB,
                created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        info!("user_profiles table ready");
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<(), StoreError> {
        let user = UserRecord::new(email, password_hash);
        let inserted = sqlx::query(
            r#"
            INSERT INTO user_profiles (id, user_id, password_hash, data, created_at)
            VALUES ($1, $2, $3, NULL, $4)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.user_id)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if inserted == 0 {
            return Err(StoreError::UserExists);
        }
        Ok(())
    }

    async fn find_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, user_id, password_hash, data, created_at FROM user_profiles WHERE user_id = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn save_profile(&self, email: &str, result: &AnalysisResult) -> Result<(), StoreError> {
        let data = serde_json::to_value(result)?;
        // Only the data column changes; credentials and created_at are kept.
        let updated = sqlx::query("UPDATE user_profiles SET data = $1 WHERE user_id = $2")
            .bind(data)
            .bind(email)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if updated == 0 {
            return Err(StoreError::UserNotFound);
        }
        Ok(())
    }

    async fn update_report(
        &self,
        email: &str,
        edit: ReportEdit,
    ) -> Result<AnalysisReport, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Row lock held until commit; concurrent saves wait for the edit.
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, user_id, password_hash, data, created_at
            FROM user_profiles
            WHERE user_id = $1
            FOR UPDATE
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StoreError::UserNotFound)?;

        let report = apply_edit(&user, edit)?;
        let data = serde_json::to_value(AnalysisResult::Success(report.clone()))?;
        sqlx::query("UPDATE user_profiles SET data = $1 WHERE user_id = $2")
            .bind(data)
            .bind(email)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(report)
    }
}
