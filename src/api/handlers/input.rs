use axum::{extract::State, http::Uri, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::error::Result;
use crate::models::{CommandOutcome, CommandParams};

/// Replace the text of the focused input field.
/// Reports `success: false` when nothing has input focus.
pub async fn input_text(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Json<CommandOutcome>> {
    let service = state.require_service().await?;
    let params = CommandParams::from_uri(&uri);
    let text = params.require_str("text", "text")?;

    let success = service.set_focused_text(text).await?;
    if !success {
        tracing::debug!("Text input declined: no focused input field");
    }

    Ok(Json(CommandOutcome::new(success)))
}
