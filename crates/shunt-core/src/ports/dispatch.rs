//! DispatchStrategy port - リクエストから handler 名へのマッピング
//!
//! - EventDispatch: `key[=target]` list driven by which parameters are present

use crate::domain::{ActionMapping, DispatchError};

use super::RequestParams;

/// DispatchStrategy は 1 リクエストを 1 つの method 名に解決
///
/// Implementations are pure: they never mutate the request, and the same
/// mapping plus the same parameters always give the same answer.
pub trait DispatchStrategy: Send + Sync {
    fn method_name(
        &self,
        mapping: &ActionMapping,
        params: &dyn RequestParams,
    ) -> Result<String, DispatchError>;
}
