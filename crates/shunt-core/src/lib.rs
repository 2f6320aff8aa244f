//! shunt-core
//!
//! Request-parameter driven dispatch for web actions.
//!
//! # モジュール構成
//! - **domain**: DispatchSpec, ActionMapping, Outcome, errors
//! - **ports**: host 側の抽象（Request, Session, DispatchStrategy）
//! - **impls**: EventDispatch, in-memory request/session
//! - **runtime**: handler registry と ActionDispatcher
//! - **app**: actions (SelectChannel)
//! - **config / observability**: TOML config と tracing の初期化

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod observability;
pub mod ports;
pub mod runtime;

pub use crate::config::{ConfigError, ShuntConfig};
pub use crate::domain::{ActionMapping, DispatchError, DispatchSpec, Outcome, OutcomeKind};
pub use crate::runtime::{ActionDispatcher, ActionHandler, HandlerRegistry};
