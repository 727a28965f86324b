//! Shared application state for the workerstat host.

use std::sync::Arc;

use workerstat_core::MetricsPublisher;

use crate::config::HostConfig;

/// The one publisher for this process plus its config. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<HostConfig>,
    publisher: Arc<MetricsPublisher>,
}

impl AppState {
    pub fn new(cfg: HostConfig) -> Self {
        Self {
            cfg: Arc::new(cfg),
            publisher: Arc::new(MetricsPublisher::new()),
        }
    }

    pub fn cfg(&self) -> &HostConfig {
        &self.cfg
    }

    pub fn publisher(&self) -> Arc<MetricsPublisher> {
        Arc::clone(&self.publisher)
    }
}
