use crate::config::RemoteConfig;
use crate::models::{CreatedRecord, MediaPayload};
use crate::services::store::{RecordStore, StoreError, StoreResult};
use reqwest::blocking::{Client, RequestBuilder};
use std::time::Duration;

/// Creates records through a CMS collection endpoint (`POST /api/{collection}`).
///
/// Uses the blocking client, so it must not be driven from inside an async
/// task; the CLI runs the seeding pass under `spawn_blocking`.
pub struct RemoteStore {
    client: Client,
    api_url: String,
    authorization: Option<String>,
}

impl RemoteStore {
    pub fn new(config: &RemoteConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("media-seed/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let authorization = config
            .api_key
            .as_ref()
            .map(|key| format!("{} API-Key {}", config.auth_scheme, key));

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            authorization,
        })
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/api/{}", self.api_url, collection)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.authorization {
            Some(value) => request.header("Authorization", value),
            None => request,
        }
    }
}

impl RecordStore for RemoteStore {
    fn ensure_ready(&self, collection: &str) -> StoreResult<()> {
        let request = self
            .client
            .get(self.collection_url(collection))
            .query(&[("limit", "1")]);
        let resp = self.authorize(request).send()?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::UnknownCollection(collection.to_string()));
        }
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(StoreError::Rejected(format!("{}: {}", status, body)));
        }
        Ok(())
    }

    fn create(&self, collection: &str, payload: &MediaPayload) -> StoreResult<CreatedRecord> {
        let request = self.client.post(self.collection_url(collection)).json(payload);
        let resp = self.authorize(request).send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(StoreError::Rejected(format!("{}: {}", status, body)));
        }

        let body: serde_json::Value = resp.json()?;
        let id = extract_id(&body).ok_or_else(|| {
            StoreError::Rejected(format!("response for '{}' has no id", payload.filename))
        })?;
        Ok(CreatedRecord { id })
    }
}

/// Collection endpoints answer either `{ "doc": { "id": .. } }` or a bare
/// document; ids may be strings or numbers.
pub fn extract_id(body: &serde_json::Value) -> Option<String> {
    let id = body
        .get("doc")
        .and_then(|doc| doc.get("id"))
        .or_else(|| body.get("id"))?;

    match id {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
