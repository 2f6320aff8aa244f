//! App - アプリケーション層
//!
//! Concrete actions built on the ports and the dispatcher runtime.

pub mod channel;

pub use self::channel::{CHANNEL_PARAMETER, FACTORY_SELECTOR_KEY, SelectChannel};
