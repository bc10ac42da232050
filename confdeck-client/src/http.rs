//! HTTP transport over the shared response envelope.
//!
//! Every call resolves with the envelope's `data` payload or fails with a
//! tagged error, so downstream callers never inspect wire codes themselves.

use crate::config::ClientConfig;
use confdeck_core::Envelope;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Business { code: i64, message: String },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

#[derive(Clone)]
pub struct Http {
    client: reqwest::Client,
    base_url: String,
}

impl Http {
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Default,
        Q: Serialize + ?Sized,
    {
        let mut request = self.client.get(self.url(path));
        if let Some(query) = query {
            request = request.query(query);
        }
        self.execute("GET", path, request).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.execute("POST", path, request).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let request = self.client.put(self.url(path)).json(body);
        self.execute("PUT", path, request).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let request = self.client.patch(self.url(path)).json(body);
        self.execute("PATCH", path, request).await
    }

    pub async fn delete<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let request = self.client.delete(self.url(path)).json(body);
        self.execute("DELETE", path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned + Default>(
        &self,
        method: &'static str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, HttpError> {
        debug!(method, path, "issuing request");
        let response = request.send().await?.error_for_status()?;
        let text = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&text)?;
        match envelope.code {
            0 => envelope.data.ok_or_else(|| {
                HttpError::InvalidResponse("success envelope without data".to_string())
            }),
            code => {
                warn!(method, path, code, msg = %envelope.msg, "business rejection");
                Err(HttpError::Business {
                    code,
                    message: envelope.msg,
                })
            }
        }
    }
}
