//! Client-side configuration store.
//!
//! Owns the last-loaded configuration snapshot and mediates load/save
//! against the REST accessor. The snapshot is replaced wholesale on every
//! successful load, never merged. Constructed explicitly at application
//! start and passed by reference to whatever needs it.

use crate::alert::Alert;
use crate::api::ConfigApi;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{Http, HttpError};
use confdeck_core::ConfigMap;
use std::path::Path;
use tracing::warn;

pub struct ConfigStore {
    api: ConfigApi,
    data: ConfigMap,
    alert: Option<Alert>,
}

impl ConfigStore {
    pub fn new(api: ConfigApi) -> Self {
        Self {
            api,
            data: ConfigMap::new(),
            alert: None,
        }
    }

    /// Wire a store from a client settings file.
    pub fn from_config_path(path: &Path) -> Result<Self, ClientError> {
        let config = ClientConfig::from_path(path)?;
        let http = Http::new(&config)?;
        Ok(Self::new(ConfigApi::new(http)))
    }

    /// Current configuration snapshot. Written only by a successful `load`.
    pub fn data(&self) -> &ConfigMap {
        &self.data
    }

    /// Pending alert from the last failed save, if any. Taking it clears
    /// the slot; the UI presents it as a modal dialog.
    pub fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    /// Fetch the configuration and commit it as the new snapshot.
    ///
    /// A failure leaves the snapshot untouched and raises no alert; the
    /// caller receives the error and decides whether to surface it.
    pub async fn load(&mut self) -> Result<(), HttpError> {
        let config = self.api.load().await?;
        self.commit(config);
        Ok(())
    }

    /// Persist `payload` server-side.
    ///
    /// A successful save does not touch the local snapshot; the server copy
    /// is picked up by the next `load`. A failed save raises an error alert
    /// carrying the rejection reason.
    pub async fn save(&mut self, payload: ConfigMap) {
        if let Err(err) = self.api.save(&payload).await {
            warn!(error = %err, "config save failed");
            self.alert = Some(Alert::error(err.to_string()));
        }
    }

    fn commit(&mut self, config: ConfigMap) {
        self.data = config;
    }
}
