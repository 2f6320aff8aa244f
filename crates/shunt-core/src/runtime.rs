use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ActionMapping, DispatchError, Outcome};
use crate::impls::EventDispatch;
use crate::ports::{DispatchStrategy, Request};

/// A handler method an action exposes to the dispatcher.
///
/// Takes the same inputs as the action itself, so any handler can also be
/// mounted directly on a route.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn handle(
        &self,
        mapping: &ActionMapping,
        request: &mut dyn Request,
    ) -> Result<Outcome, DispatchError>;
}

/// Registry of handlers (method name -> handler).
///
/// Design:
/// - Built during initialization (mutable).
/// - Used during runtime (immutable).
/// This avoids locks; share it behind an `Arc`.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under a method name. Names are unique.
    pub fn register(
        &mut self,
        method: impl Into<String>,
        handler: Arc<dyn ActionHandler>,
    ) -> Result<(), DispatchError> {
        let method = method.into();
        if self.handlers.contains_key(&method) {
            return Err(DispatchError::DuplicateHandler(method));
        }
        self.handlers.insert(method, handler);
        Ok(())
    }

    pub fn get(&self, method: &str) -> Option<&Arc<dyn ActionHandler>> {
        self.handlers.get(method)
    }

    /// Registered method names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Resolves a method name for each request and invokes the registered
/// handler for it.
pub struct ActionDispatcher {
    registry: Arc<HandlerRegistry>,
    strategy: Box<dyn DispatchStrategy>,
}

impl ActionDispatcher {
    /// Dispatcher using [`EventDispatch`].
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self::with_strategy(registry, Box::new(EventDispatch::new()))
    }

    pub fn with_strategy(
        registry: Arc<HandlerRegistry>,
        strategy: Box<dyn DispatchStrategy>,
    ) -> Self {
        Self { registry, strategy }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Name of the method that would run, without running it.
    pub fn method_name(
        &self,
        mapping: &ActionMapping,
        request: &dyn Request,
    ) -> Result<String, DispatchError> {
        self.strategy.method_name(mapping, request.params())
    }

    /// Execute one request.
    pub async fn execute(
        &self,
        mapping: &ActionMapping,
        request: &mut dyn Request,
    ) -> Result<Outcome, DispatchError> {
        let method = self.method_name(mapping, request)?;
        let handler = self.registry.get(&method).ok_or_else(|| {
            let err = DispatchError::MethodNotFound {
                method: method.clone(),
                path: mapping.path().to_string(),
            };
            tracing::error!(path = %mapping.path(), method = %method, "{err}");
            err
        })?;

        tracing::debug!(path = %mapping.path(), method = %method, "dispatching");
        handler.handle(mapping, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutcomeKind;
    use crate::impls::InMemoryRequest;
    use crate::ports::RequestParams;

    struct Named(&'static str);

    #[async_trait]
    impl ActionHandler for Named {
        async fn handle(
            &self,
            _mapping: &ActionMapping,
            _request: &mut dyn Request,
        ) -> Result<Outcome, DispatchError> {
            Ok(Outcome::success().with_reason(self.0))
        }
    }

    struct Broken;

    #[async_trait]
    impl ActionHandler for Broken {
        async fn handle(
            &self,
            _mapping: &ActionMapping,
            _request: &mut dyn Request,
        ) -> Result<Outcome, DispatchError> {
            Err(DispatchError::handler("boom"))
        }
    }

    /// Always picks the same method, whatever the request says.
    struct Fixed(&'static str);

    impl DispatchStrategy for Fixed {
        fn method_name(
            &self,
            _mapping: &ActionMapping,
            _params: &dyn RequestParams,
        ) -> Result<String, DispatchError> {
            Ok(self.0.to_string())
        }
    }

    fn subscription_registry() -> Arc<HandlerRegistry> {
        let mut reg = HandlerRegistry::new();
        reg.register("save", Arc::new(Named("save"))).unwrap();
        reg.register("recalculate", Arc::new(Named("recalculate"))).unwrap();
        reg.register("back", Arc::new(Broken)).unwrap();
        Arc::new(reg)
    }

    fn subscription_mapping() -> ActionMapping {
        ActionMapping::new("/saveSubscription")
            .with_parameter("save,back,recalc=recalculate,default=save")
    }

    #[tokio::test]
    async fn dispatcher_invokes_resolved_handler() {
        let dispatcher = ActionDispatcher::new(subscription_registry());
        let mut request = InMemoryRequest::new().with_parameter("recalc", "");

        let outcome = dispatcher
            .execute(&subscription_mapping(), &mut request)
            .await
            .unwrap();
        assert_eq!(outcome.kind, OutcomeKind::Success);
        assert_eq!(outcome.reason.as_deref(), Some("recalculate"));
    }

    #[tokio::test]
    async fn dispatcher_falls_back_to_default() {
        let dispatcher = ActionDispatcher::new(subscription_registry());
        let mut request = InMemoryRequest::new();

        let outcome = dispatcher
            .execute(&subscription_mapping(), &mut request)
            .await
            .unwrap();
        assert_eq!(outcome.reason.as_deref(), Some("save"));
    }

    #[tokio::test]
    async fn handler_errors_propagate() {
        let dispatcher = ActionDispatcher::new(subscription_registry());
        let mut request = InMemoryRequest::new().with_parameter("back", "");

        let err = dispatcher
            .execute(&subscription_mapping(), &mut request)
            .await
            .unwrap_err();
        assert!(matches!(err, DispatchError::Handler(ref m) if m == "boom"));
    }

    #[tokio::test]
    async fn unregistered_method_is_method_not_found() {
        let dispatcher = ActionDispatcher::new(subscription_registry());
        let mapping = ActionMapping::new("/delete").with_parameter("remove=delete");
        let mut request = InMemoryRequest::new().with_parameter("remove", "");

        let err = dispatcher.execute(&mapping, &mut request).await.unwrap_err();
        match err {
            DispatchError::MethodNotFound { method, path } => {
                assert_eq!(method, "delete");
                assert_eq!(path, "/delete");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn custom_strategy_is_used() {
        let dispatcher =
            ActionDispatcher::with_strategy(subscription_registry(), Box::new(Fixed("save")));
        let mut request = InMemoryRequest::new().with_parameter("recalc", "");

        let outcome = dispatcher
            .execute(&ActionMapping::new("/anything"), &mut request)
            .await
            .unwrap();
        assert_eq!(outcome.reason.as_deref(), Some("save"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut reg = HandlerRegistry::new();
        reg.register("save", Arc::new(Named("a"))).unwrap();
        let err = reg.register("save", Arc::new(Named("b"))).unwrap_err();
        assert!(matches!(err, DispatchError::DuplicateHandler(ref m) if m == "save"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn names_are_sorted() {
        let reg = subscription_registry();
        assert_eq!(reg.names(), vec!["back", "recalculate", "save"]);
    }

    #[tokio::test]
    async fn empty_alias_target_is_method_not_found() {
        let dispatcher = ActionDispatcher::new(subscription_registry());
        let mapping =
            ActionMapping::new("/saveSubscription").with_parameter("save=,default=back");
        let mut request = InMemoryRequest::new().with_parameter("save", "");

        assert_eq!(dispatcher.method_name(&mapping, &request).unwrap(), "");
        let err = dispatcher.execute(&mapping, &mut request).await.unwrap_err();
        assert!(matches!(
            err,
            DispatchError::MethodNotFound { ref method, .. } if method.is_empty()
        ));
    }

    #[test]
    fn dispatcher_exposes_its_registry() {
        let dispatcher = ActionDispatcher::new(subscription_registry());
        assert_eq!(dispatcher.registry().len(), 3);
        assert!(dispatcher.registry().get("save").is_some());
    }
}
