use serde::Deserialize;

use crate::errors::GatewayError;
use crate::models::{Entry, EntryDraft, EntryPatch};
use crate::utils::config::StoreConfig;

/// Thin client over the remote `collection` table. Every operation is one
/// request/response exchange; mutations are gated by the administrator
/// password before anything goes on the wire.
pub struct RecordStore {
    config: StoreConfig,
}

impl RecordStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Result<Self, GatewayError> {
        StoreConfig::from_env()
            .map(Self::new)
            .map_err(GatewayError::Config)
    }

    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/collection",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Single-row filter with the id percent-encoded, so opaque ids with
    /// reserved characters cannot corrupt the query string.
    fn row_url(&self, id: &str) -> Result<reqwest::Url, GatewayError> {
        let mut url = reqwest::Url::parse(&self.table_url())
            .map_err(|e| GatewayError::Config(format!("STORE_URL 無效：{}", e)))?;
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{}", id));
        Ok(url)
    }

    /// Exact string equality against the configured secret. On a mismatch
    /// no request is issued at all.
    fn check_password(&self, password: &str) -> Result<(), GatewayError> {
        if password == self.config.admin_password {
            Ok(())
        } else {
            Err(GatewayError::Unauthorized)
        }
    }

    /// Fetches every row, store-native order. A failure is surfaced as an
    /// error, never silently turned into an empty shelf.
    pub async fn list(&self) -> Result<Vec<Entry>, GatewayError> {
        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}?select=*", self.table_url()))
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::Store(store_message(response).await));
        }
        Ok(response.json().await?)
    }

    /// Inserts one row. The store assigns `id` and `createdAt`; the caller
    /// re-lists to observe the new record.
    pub async fn create(&self, draft: EntryDraft, password: &str) -> Result<(), GatewayError> {
        self.check_password(password)?;
        let record = draft.into_record();

        let client = reqwest::Client::new();
        let response = client
            .post(self.table_url())
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Prefer", "return=minimal")
            .json(&record)
            .send()
            .await?;

        ensure_acknowledged(response).await
    }

    /// Patches the mutable fields of one row. `id` and `createdAt` cannot
    /// appear in the patch by construction.
    pub async fn update(
        &self,
        id: &str,
        patch: EntryPatch,
        password: &str,
    ) -> Result<(), GatewayError> {
        self.check_password(password)?;
        let changes = patch.into_changes();

        let client = reqwest::Client::new();
        let response = client
            .patch(self.row_url(id)?)
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Prefer", "return=minimal")
            .json(&changes)
            .send()
            .await?;

        ensure_acknowledged(response).await
    }

    /// Removes one row permanently. No cascade, no soft delete.
    pub async fn delete(&self, id: &str, password: &str) -> Result<(), GatewayError> {
        self.check_password(password)?;

        let client = reqwest::Client::new();
        let response = client
            .delete(self.row_url(id)?)
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await?;

        ensure_acknowledged(response).await
    }
}

async fn ensure_acknowledged(response: reqwest::Response) -> Result<(), GatewayError> {
    if response.status().is_success() {
        Ok(())
    } else {
        let message = store_message(response).await;
        log::warn!("record store rejected the operation: {}", message);
        Err(GatewayError::Store(message))
    }
}

/// Pulls the store's own error message out of a rejection body when there
/// is one, otherwise falls back to the HTTP status.
async fn store_message(response: reqwest::Response) -> String {
    #[derive(Deserialize)]
    struct Rejection {
        message: Option<String>,
    }

    let status = response.status();
    match response.json::<Rejection>().await {
        Ok(Rejection { message: Some(m) }) if !m.is_empty() => m,
        _ => format!("HTTP {}", status),
    }
}
