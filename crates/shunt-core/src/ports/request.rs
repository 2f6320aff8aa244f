//! Request / Session ports - ホスト側 HTTP リクエストの抽象化
//!
//! The host framework owns parsing, sessions and their lifecycle. The core
//! only reads parameters and, when a session already exists, writes to it.

/// Read-only view of a request's parameters.
///
/// A parameter that was submitted with an empty value is still present:
/// `parameter("save")` returns `Some("")`.
pub trait RequestParams: Sync {
    /// First value submitted under `name`.
    fn parameter(&self, name: &str) -> Option<&str>;

    /// Every value submitted under `name`, in submission order.
    fn parameter_values(&self, name: &str) -> Vec<&str>;

    fn parameter_names(&self) -> Vec<&str>;

    fn contains(&self, name: &str) -> bool {
        self.parameter(name).is_some()
    }
}

/// Per-user attribute store owned by the host.
pub trait Session: Send {
    fn attribute(&self, key: &str) -> Option<&str>;

    /// Overwrites any prior value under `key`.
    fn set_attribute(&mut self, key: &str, value: String);

    fn remove_attribute(&mut self, key: &str) -> Option<String>;
}

/// An inbound request: parameters plus the session, if one already exists.
pub trait Request: Send {
    fn params(&self) -> &dyn RequestParams;

    /// The existing session. Never creates one.
    fn session(&mut self) -> Option<&mut dyn Session>;
}
