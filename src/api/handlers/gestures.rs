use axum::{extract::State, http::Uri, Json};
use std::sync::Arc;

use crate::accessibility::{Gesture, Point, DEFAULT_SWIPE_DURATION};
use crate::api::state::AppState;
use crate::error::Result;
use crate::models::{CommandOutcome, CommandParams};

/// Tap at `x`, `y`
pub async fn tap(State(state): State<Arc<AppState>>, uri: Uri) -> Result<Json<CommandOutcome>> {
    let service = state.require_service().await?;
    let [x, y] = CommandParams::from_uri(&uri).require_ints(["x", "y"], "x, y")?;

    let success = service.dispatch_gesture(&Gesture::tap(Point::new(x, y))).await?;
    tracing::debug!("Tap at ({}, {}): {}", x, y, success);

    Ok(Json(CommandOutcome::new(success)))
}

/// Swipe from `x1`,`y1` to `x2`,`y2` over `duration` milliseconds
pub async fn swipe(State(state): State<Arc<AppState>>, uri: Uri) -> Result<Json<CommandOutcome>> {
    let service = state.require_service().await?;
    let params = CommandParams::from_uri(&uri);
    let [x1, y1, x2, y2] = params.require_ints(["x1", "y1", "x2", "y2"], "x1, y1, x2, y2")?;
    let duration = params.millis_or("duration", DEFAULT_SWIPE_DURATION);

    let gesture = Gesture::swipe(Point::new(x1, y1), Point::new(x2, y2), duration);
    let success = service.dispatch_gesture(&gesture).await?;
    tracing::debug!(
        "Swipe ({}, {}) -> ({}, {}) over {:?}: {}",
        x1,
        y1,
        x2,
        y2,
        duration,
        success
    );

    Ok(Json(CommandOutcome::new(success)))
}
