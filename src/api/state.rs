use std::sync::Arc;

use crate::accessibility::{AutomationService, ServiceHandle};
use crate::error::{BridgeError, Result};

/// Shared application state
pub struct AppState {
    /// Registration slot for the platform automation service
    pub service: ServiceHandle,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            service: ServiceHandle::new(),
        }
    }

    pub fn with_service(service: &Arc<dyn AutomationService>) -> Self {
        Self {
            service: ServiceHandle::attached(service),
        }
    }

    /// The running automation service, or `ServiceNotStarted`
    pub async fn require_service(&self) -> Result<Arc<dyn AutomationService>> {
        self.service.current().await.ok_or_else(|| {
            tracing::warn!("Command rejected: automation service not started");
            BridgeError::ServiceNotStarted
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
