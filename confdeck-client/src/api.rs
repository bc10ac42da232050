//! REST resource accessors.

use crate::http::{Http, HttpError};
use confdeck_core::ConfigMap;

const CONFIG_PATH: &str = "/config";

/// Accessor for the remote `/config` resource.
///
/// Fixes the endpoint path and verb for each operation so callers never
/// handle URL literals. No validation or translation happens here.
#[derive(Clone)]
pub struct ConfigApi {
    http: Http,
}

impl ConfigApi {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// Fetch the full configuration snapshot.
    pub async fn load(&self) -> Result<ConfigMap, HttpError> {
        self.http.get::<ConfigMap, ()>(CONFIG_PATH, None).await
    }

    /// Persist the full configuration. Resolves with the server
    /// acknowledgement payload, typically an empty object.
    pub async fn save(&self, config: &ConfigMap) -> Result<serde_json::Value, HttpError> {
        self.http.post(CONFIG_PATH, config).await
    }
}
