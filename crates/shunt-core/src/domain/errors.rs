//! Errors - dispatch エラー型と分類
//!
//! Resolver failures are deterministic: the same mapping and the same request
//! always fail the same way, so nothing here is retryable.

use thiserror::Error;

/// ErrorKind は dispatch エラーの運用分類
///
/// - Configuration: the route is set up wrong; surface to the operator.
/// - Request: a live request matched nothing; surface as a server error.
/// - Handler: the invoked handler itself failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Request,
    Handler,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The route has no dispatch configuration string, or it is blank.
    #[error("DispatchMapping[{path}] does not define a handler property")]
    MissingDispatchParameter { path: String },

    /// No configured key matched the request and there is no usable default.
    #[error("Request[{path}] does not contain handler parameter named '{parameter}'")]
    MissingDispatchTarget { path: String, parameter: String },

    #[error("Action[{path}] does not contain method named '{method}'")]
    MethodNotFound { method: String, path: String },

    #[error("duplicate handler for method={0}")]
    DuplicateHandler(String),

    #[error("{0}")]
    Handler(String),
}

impl DispatchError {
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingDispatchParameter { .. }
            | Self::MethodNotFound { .. }
            | Self::DuplicateHandler(_) => ErrorKind::Configuration,
            Self::MissingDispatchTarget { .. } => ErrorKind::Request,
            Self::Handler(_) => ErrorKind::Handler,
        }
    }
}
