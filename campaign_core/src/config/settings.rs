//! Dashboard settings

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[settings]` table of a campaign file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Shared secret unlocking mutating game-master actions
    #[serde(default = "default_master_secret")]
    pub master_secret: String,
    /// Directory the dashboard writes its log file to
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            master_secret: default_master_secret(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_master_secret() -> String {
    "dm123".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Settings {
    pub fn verify_master_secret(&self, candidate: &str) -> bool {
        !self.master_secret.is_empty() && candidate == self.master_secret
    }
}
