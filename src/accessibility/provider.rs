use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Weak};
use tokio::sync::RwLock;

use super::gesture::Gesture;
use super::types::{GlobalAction, NodeAttributes};

/// Shared reference to a live hierarchy node
pub type NodeRef = Arc<dyn AccessibilityNode>;

/// One node of the platform's on-screen hierarchy.
///
/// Implementations wrap whatever the accessibility API hands out. Both calls
/// may block on the platform; callers run traversal off the async executor.
pub trait AccessibilityNode: Send + Sync {
    /// Snapshot of this node's attributes
    fn attributes(&self) -> NodeAttributes;

    /// Children in their native index order. Children the platform can no
    /// longer resolve are omitted.
    fn children(&self) -> Vec<NodeRef>;
}

/// Platform automation capability (tree access, gestures, global actions)
#[async_trait]
pub trait AutomationService: Send + Sync {
    /// Root of the active window, or `None` when no window is available
    async fn root_in_active_window(&self) -> Result<Option<NodeRef>>;

    /// Dispatch a gesture. `Ok(false)` means the platform refused it.
    async fn dispatch_gesture(&self, gesture: &Gesture) -> Result<bool>;

    /// Replace the text of the focused input field.
    /// `Ok(false)` when nothing accepts input focus.
    async fn set_focused_text(&self, text: &str) -> Result<bool>;

    async fn perform_global_action(&self, action: GlobalAction) -> Result<bool>;
}

/// Slot holding the currently registered automation service.
///
/// The platform owns the service; the bridge only keeps a weak reference.
/// An empty slot or a reference that no longer upgrades both mean the
/// service is unavailable.
#[derive(Default)]
pub struct ServiceHandle {
    slot: RwLock<Option<Weak<dyn AutomationService>>>,
}

impl ServiceHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that starts out with `service` registered
    pub fn attached(service: &Arc<dyn AutomationService>) -> Self {
        Self {
            slot: RwLock::new(Some(Arc::downgrade(service))),
        }
    }

    /// Register the service once the platform has connected it
    pub async fn attach(&self, service: &Arc<dyn AutomationService>) {
        *self.slot.write().await = Some(Arc::downgrade(service));
        tracing::info!("Automation service attached");
    }

    /// Clear the registration when the platform tears the service down
    pub async fn detach(&self) {
        if self.slot.write().await.take().is_some() {
            tracing::info!("Automation service detached");
        }
    }

    pub async fn current(&self) -> Option<Arc<dyn AutomationService>> {
        self.slot.read().await.as_ref().and_then(Weak::upgrade)
    }

    pub async fn is_available(&self) -> bool {
        self.current().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullService;

    #[async_trait]
    impl AutomationService for NullService {
        async fn root_in_active_window(&self) -> Result<Option<NodeRef>> {
            Ok(None)
        }

        async fn dispatch_gesture(&self, _gesture: &Gesture) -> Result<bool> {
            Ok(true)
        }

        async fn set_focused_text(&self, _text: &str) -> Result<bool> {
            Ok(false)
        }

        async fn perform_global_action(&self, _action: GlobalAction) -> Result<bool> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_attach_and_detach() {
        let handle = ServiceHandle::new();
        assert!(!handle.is_available().await);

        let service: Arc<dyn AutomationService> = Arc::new(NullService);
        handle.attach(&service).await;
        assert!(handle.is_available().await);

        handle.detach().await;
        assert!(handle.current().await.is_none());
    }

    #[tokio::test]
    async fn test_dropped_service_is_unavailable() {
        let service: Arc<dyn AutomationService> = Arc::new(NullService);
        let handle = ServiceHandle::attached(&service);
        assert!(handle.is_available().await);

        drop(service);
        assert!(!handle.is_available().await);
    }
}
