//! SelectChannel - チャンネル（テーマ）選択を session に保存する action
//!
//! Reads the `channel` parameter and stores it under [`FACTORY_SELECTOR_KEY`]
//! in the caller's session. The value is not validated here; whatever reads
//! the key later decides what a legal channel is.

use async_trait::async_trait;

use crate::domain::{ActionMapping, DispatchError, Outcome};
use crate::ports::Request;
use crate::runtime::ActionHandler;

/// Session attribute key shared by every component that reads the selection.
pub const FACTORY_SELECTOR_KEY: &str = "ChannelFactorySet.factorySelectorKey";

/// Request parameter carrying the selection.
pub const CHANNEL_PARAMETER: &str = "channel";

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectChannel;

impl SelectChannel {
    pub fn new() -> Self {
        Self
    }

    /// `failed` when the parameter is absent. Otherwise `success`, with the
    /// value written to the session only if one already exists.
    pub fn select(&self, request: &mut dyn Request) -> Outcome {
        let Some(requested) = request.params().parameter(CHANNEL_PARAMETER).map(str::to_string)
        else {
            return Outcome::failed(format!("missing '{CHANNEL_PARAMETER}' parameter"));
        };

        match request.session() {
            Some(session) => session.set_attribute(FACTORY_SELECTOR_KEY, requested.clone()),
            None => tracing::debug!("no session, channel selection not stored"),
        }
        tracing::info!(channel = %requested, "Set channel to '{requested}'");
        Outcome::success()
    }
}

#[async_trait]
impl ActionHandler for SelectChannel {
    async fn handle(
        &self,
        _mapping: &ActionMapping,
        request: &mut dyn Request,
    ) -> Result<Outcome, DispatchError> {
        Ok(self.select(request))
    }
}
