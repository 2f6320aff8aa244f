//! EventDispatch - 押されたボタン（パラメータ）で method を選ぶ DispatchStrategy
//!
//! Useful when one form has several submit buttons, images or links and the
//! code behind each lives in the same action. The route's configuration
//! string names the candidates:
//!
//! ```text
//! save,back,recalc=recalculate,default=save
//! ```
//!
//! `recalc=recalculate` exposes the `recalculate` method under the form name
//! `recalc`. `default` is optional and is used when nothing matches, such as
//! the user pressing enter.

use crate::domain::{ActionMapping, DispatchError, DispatchSpec};
use crate::ports::{DispatchStrategy, RequestParams};

#[derive(Debug, Clone, Copy, Default)]
pub struct EventDispatch;

impl EventDispatch {
    pub fn new() -> Self {
        Self
    }

    /// The route's configuration string. Absent and blank are both a setup
    /// error.
    pub fn parameter<'a>(&self, mapping: &'a ActionMapping) -> Result<&'a str, DispatchError> {
        match mapping.parameter() {
            Some(parameter) if !parameter.trim().is_empty() => Ok(parameter),
            _ => Err(missing_parameter(mapping)),
        }
    }
}

fn missing_parameter(mapping: &ActionMapping) -> DispatchError {
    let err = DispatchError::MissingDispatchParameter {
        path: mapping.path().to_string(),
    };
    tracing::error!(path = %mapping.path(), "{err}");
    err
}

impl DispatchStrategy for EventDispatch {
    fn method_name(
        &self,
        mapping: &ActionMapping,
        params: &dyn RequestParams,
    ) -> Result<String, DispatchError> {
        let spec = mapping
            .parameter()
            .and_then(DispatchSpec::parse)
            .ok_or_else(|| missing_parameter(mapping))?;

        match spec.resolve(params) {
            Some(method) => {
                tracing::debug!(path = %mapping.path(), method, "resolved dispatch method");
                Ok(method.to_string())
            }
            None => {
                let err = DispatchError::MissingDispatchTarget {
                    path: mapping.path().to_string(),
                    parameter: spec.raw().to_string(),
                };
                tracing::error!(path = %mapping.path(), parameter = spec.raw(), "{err}");
                Err(err)
            }
        }
    }
}
