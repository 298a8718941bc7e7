use anyhow::anyhow;
use axum::{extract::State, Json};
use std::sync::Arc;

use crate::accessibility::{capture_snapshot, SceneSnapshot};
use crate::api::state::AppState;
use crate::error::{BridgeError, Result};

/// Flatten the active window's hierarchy
pub async fn dump(State(state): State<Arc<AppState>>) -> Result<Json<SceneSnapshot>> {
    let service = state.require_service().await?;

    let root = service
        .root_in_active_window()
        .await
        .map_err(|e| anyhow!("Failed to read UI tree: {}", e))?
        .ok_or_else(|| {
            tracing::warn!("Dump requested with no active window");
            BridgeError::NoActiveWindow
        })?;

    // Node access blocks on the platform
    let snapshot = tokio::task::spawn_blocking(move || capture_snapshot(&root))
        .await
        .map_err(|e| {
            tracing::error!("UI tree traversal failed: {}", e);
            anyhow!("Failed to read UI tree: {}", e)
        })?;

    tracing::debug!(
        "Dumped {} elements from {}",
        snapshot.elements.len(),
        snapshot.package_name
    );

    Ok(Json(snapshot))
}
