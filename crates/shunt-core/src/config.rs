//! Config file loader.
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [[action]]
//! path = "/saveSubscription"
//! parameter = "save,back,recalc=recalculate,default=save"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ActionMapping;
use crate::observability::LoggingConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("action path '{0}' is defined more than once")]
    DuplicatePath(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuntConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default, rename = "action")]
    pub actions: Vec<ActionMapping>,
}

impl ShuntConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), actions = config.actions.len(), "loaded config");
        Ok(config)
    }

    /// Parse and validate. Blank dispatch parameters are allowed here; they
    /// are reported when a request hits the route.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for action in &self.actions {
            if !seen.insert(action.path.as_str()) {
                return Err(ConfigError::DuplicatePath(action.path.clone()));
            }
        }
        Ok(())
    }

    pub fn mapping(&self, path: &str) -> Option<&ActionMapping> {
        self.actions.iter().find(|a| a.path == path)
    }
}
