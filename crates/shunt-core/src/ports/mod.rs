//! Ports - ホストフレームワークとの境界
//!
//! The HTTP server, session store and routing table all live in the host.
//! These traits are the only shape the core assumes of them.

pub mod dispatch;
pub mod request;

pub use self::dispatch::DispatchStrategy;
pub use self::request::{Request, RequestParams, Session};
