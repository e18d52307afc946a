use serde::{Deserialize, Serialize};

/// How long `run` waits for a freshly spawned compiler to produce its artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct WaitConfig {
    pub timeout_secs: u64,
    pub initial_poll_ms: u64,
    pub max_poll_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 120,
            initial_poll_ms: 10,
            max_poll_ms: 500,
        }
    }
}
