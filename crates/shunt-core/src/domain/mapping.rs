//! ActionMapping - the host's view of one route.

use serde::{Deserialize, Serialize};

/// A route as the dispatcher sees it.
///
/// `path` only shows up in error messages. `parameter` is the raw dispatch
/// configuration string; the host may leave it unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMapping {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl ActionMapping {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parameter: None,
        }
    }

    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }
}
