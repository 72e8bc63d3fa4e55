use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{LocatorError, LocatorResult};
use crate::locator::ReinitPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// env_logger filter, overridden by `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub reinit: ReinitPolicy,

    /// Capabilities bound to their database implementation at startup.
    /// Everything else stays on its null service.
    #[serde(default = "default_provide")]
    pub provide: Vec<String>,
}

fn default_log_filter() -> String {
    "info".to_string()
}
fn default_provide() -> Vec<String> {
    vec!["audio".to_string()]
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            reinit: ReinitPolicy::default(),
            provide: default_provide(),
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(s: &str) -> LocatorResult<Self> {
        toml::from_str(s).map_err(|e| LocatorError::Config(e.to_string()))
    }

    /// A missing or unreadable file yields defaults; malformed TOML is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> LocatorResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => toml::from_str(&s)
                .map_err(|e| LocatorError::Config(format!("parse {}: {}", path.display(), e))),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn provides(&self, capability: &str) -> bool {
        self.provide.iter().any(|name| name == capability)
    }
}
