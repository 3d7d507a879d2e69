//! Service configuration.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the data directory.
///
/// This allows tests and CI to point the service at an isolated data root
/// without touching real data.
pub const DATA_DIR_ENV: &str = "SHOPFILE_DATA";

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Configuration the service is opened with.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Root directory the document namespaces live under.
    pub data_dir: PathBuf,
}

impl ServiceConfig {
    /// Configuration over an explicit data directory.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        ServiceConfig {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve the data directory from the environment.
    ///
    /// `SHOPFILE_DATA` takes precedence; otherwise the default relative
    /// directory is used.
    #[must_use]
    pub fn from_env() -> Self {
        match env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => ServiceConfig::new(dir),
            _ => ServiceConfig::new(DEFAULT_DATA_DIR),
        }
    }
}
