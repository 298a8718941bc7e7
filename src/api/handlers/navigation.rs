use axum::{extract::State, Json};
use std::sync::Arc;

use crate::accessibility::GlobalAction;
use crate::api::state::AppState;
use crate::error::Result;
use crate::models::CommandOutcome;

async fn perform(state: &AppState, action: GlobalAction) -> Result<Json<CommandOutcome>> {
    let service = state.require_service().await?;
    let success = service.perform_global_action(action).await?;
    tracing::debug!("Global action {}: {}", action.as_str(), success);
    Ok(Json(CommandOutcome::new(success)))
}

pub async fn back(State(state): State<Arc<AppState>>) -> Result<Json<CommandOutcome>> {
    perform(&state, GlobalAction::Back).await
}

pub async fn home(State(state): State<Arc<AppState>>) -> Result<Json<CommandOutcome>> {
    perform(&state, GlobalAction::Home).await
}

/// Power key
pub async fn wake(State(state): State<Arc<AppState>>) -> Result<Json<CommandOutcome>> {
    perform(&state, GlobalAction::Power).await
}
