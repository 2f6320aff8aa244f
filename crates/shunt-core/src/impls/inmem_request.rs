//! InMemoryRequest - 開発・テスト用の Request 実装
//!
//! Parameters keep submission order so multi-valued lookups behave like a
//! form post.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ports::{Request, RequestParams, Session};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemorySession {
    attributes: BTreeMap<String, String>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Session for InMemorySession {
    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn set_attribute(&mut self, key: &str, value: String) {
        self.attributes.insert(key.to_string(), value);
    }

    fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRequest {
    params: Vec<(String, String)>,
    session: Option<InMemorySession>,
}

impl InMemoryRequest {
    /// A request without parameters and without a session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_parameter(name, value);
        self
    }

    pub fn with_session(mut self, session: InMemorySession) -> Self {
        self.session = Some(session);
        self
    }

    pub fn add_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push((name.into(), value.into()));
    }

    /// Inspect the session without going through the `Request` port.
    pub fn existing_session(&self) -> Option<&InMemorySession> {
        self.session.as_ref()
    }

    pub fn into_session(self) -> Option<InMemorySession> {
        self.session
    }
}

impl RequestParams for InMemoryRequest {
    fn parameter(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn parameter_values(&self, name: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    fn parameter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (name, _) in &self.params {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }
        names
    }
}

impl Request for InMemoryRequest {
    fn params(&self) -> &dyn RequestParams {
        self
    }

    fn session(&mut self) -> Option<&mut dyn Session> {
        self.session.as_mut().map(|s| s as &mut dyn Session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_still_present() {
        let req = InMemoryRequest::new().with_parameter("save", "");
        assert_eq!(req.parameter("save"), Some(""));
        assert!(req.contains("save"));
        assert!(!req.contains("back"));
    }

    #[test]
    fn multi_valued_parameters_keep_order() {
        let req = InMemoryRequest::new()
            .with_parameter("tag", "b")
            .with_parameter("other", "x")
            .with_parameter("tag", "a");
        assert_eq!(req.parameter("tag"), Some("b"));
        assert_eq!(req.parameter_values("tag"), vec!["b", "a"]);
        assert_eq!(req.parameter_names(), vec!["tag", "other"]);
    }

    #[test]
    fn session_is_absent_unless_attached() {
        let mut req = InMemoryRequest::new();
        assert!(req.session().is_none());

        let mut req = req.with_session(InMemorySession::new());
        let session = req.session().unwrap();
        session.set_attribute("k", "v".to_string());
        assert_eq!(session.attribute("k"), Some("v"));
        assert_eq!(session.remove_attribute("k").as_deref(), Some("v"));
    }
}
