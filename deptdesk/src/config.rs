//! Application settings loaded via OrthoConfig.
//!
//! Layers, lowest first: defaults, `DEPTDESK_*` environment variables,
//! command-line flags (`--database-path`, `--log-json`).

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE_PATH: &str = "deptdesk.db";

/// Runtime settings for the `deptdesk` binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DEPTDESK")]
pub struct AppSettings {
    /// SQLite store location.
    pub database_path: Option<PathBuf>,
    /// Emit log lines as JSON.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl AppSettings {
    /// Configured store path, falling back to `deptdesk.db` in the working
    /// directory.
    pub fn database_path(&self) -> &Path {
        self.database_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATABASE_PATH))
    }
}
