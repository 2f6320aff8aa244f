//! Outcome model: the named result an action hands back to the host.
//!
//! The host translates the name into its next route or view, so the wire
//! form is just the lowercase name.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Success,
    Failed,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running one action.
///
/// `reason` is free text for logs; the host only looks at `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Outcome {
    pub fn success() -> Self {
        Self {
            kind: OutcomeKind::Success,
            reason: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Failed,
            reason: Some(reason.into()),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Forward name for the host (`success` / `failed`).
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_kind_serializes_as_forward_names() {
        let s = serde_json::to_string(&OutcomeKind::Success).unwrap();
        assert_eq!(s, "\"success\"");

        let s = serde_json::to_string(&OutcomeKind::Failed).unwrap();
        assert_eq!(s, "\"failed\"");
    }

    #[test]
    fn success_omits_reason_in_json() {
        let v = serde_json::to_value(Outcome::success()).unwrap();
        assert_eq!(v, serde_json::json!({ "kind": "success" }));
    }

    #[test]
    fn failed_carries_reason() {
        let o = Outcome::failed("no channel");
        assert_eq!(o.name(), "failed");
        assert!(!o.is_success());
        assert_eq!(o.reason.as_deref(), Some("no channel"));
    }
}
