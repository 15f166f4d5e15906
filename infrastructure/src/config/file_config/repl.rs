//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Interactive session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show per-stage spinners while a report is generated
    pub show_progress: bool,
    /// History file; defaults to `<data dir>/jobshift/history.txt`
    pub history_file: Option<String>,
    /// Entries kept in the history file
    pub history_size: usize,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            history_size: 500,
        }
    }
}
