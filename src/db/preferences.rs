//! Locale preference storage.
//!
//! Values are stored as raw locale codes and validated by the caller on
//! read-back, so a row written by an older build cannot select an
//! unsupported locale.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::i18n::Locale;

#[derive(Clone)]
pub struct PreferenceStore {
    pool: SqlitePool,
}

impl PreferenceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Stored locale code for a client, unvalidated.
    pub async fn load_locale(&self, client_id: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT locale FROM locale_preferences WHERE client_id = ?")
            .bind(client_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| row.get("locale")))
    }

    pub async fn save_locale(&self, client_id: &str, locale: Locale) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO locale_preferences (client_id, locale, updated_at) VALUES (?, ?, ?) \
             ON CONFLICT(client_id) DO UPDATE SET locale = excluded.locale, updated_at = excluded.updated_at",
        )
        .bind(client_id)
        .bind(locale.code())
        .bind(&now)
        .execute(&self.pool)
        .await?;

        tracing::debug!(client_id, locale = locale.code(), "Saved locale preference");
        Ok(())
    }

    #[cfg(test)]
    pub async fn save_raw(&self, client_id: &str, code: &str) -> Result<(), AppError> {
        sqlx::query(
            "INSERT OR REPLACE INTO locale_preferences (client_id, locale, updated_at) VALUES (?, ?, ?)",
        )
        .bind(client_id)
        .bind(code)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
