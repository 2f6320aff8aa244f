//! Impls - ports の実装
//!
//! - **EventDispatch**: parameter-driven DispatchStrategy
//! - **InMemoryRequest / InMemorySession**: for tests and the CLI
//!
//! Adapters for real HTTP frameworks belong in their own crates.

pub mod dispatch;
pub mod inmem_request;

pub use self::dispatch::EventDispatch;
pub use self::inmem_request::{InMemoryRequest, InMemorySession};
