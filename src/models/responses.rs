use serde::{Deserialize, Serialize};

/// Liveness marker returned by `/ping`
#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
    pub timestamp: String,
}

/// Outcome of a device command. `success: false` means the platform
/// declined the command, not that the request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    pub success: bool,
}

impl CommandOutcome {
    pub fn new(success: bool) -> Self {
        Self { success }
    }
}
