//! Dispatch spec: the parsed form of a route's `key[=target]` list.
//!
//! ```text
//! save,back,recalc=recalculate,default=save
//! ```
//!
//! Entries keep their source order. Resolution is a linear scan and the first
//! entry whose key shows up in the request wins, so duplicates are legal but
//! only the first one is reachable.

use crate::ports::RequestParams;

/// Reserved key whose target is used when nothing else matches.
pub const DEFAULT_METHOD_KEY: &str = "default";

/// Suffix an HTML image submit adds to its name (`name.x` / `name.y`).
pub const IMAGE_BUTTON_SUFFIX: &str = ".x";

/// One `key[=target]` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchEntry {
    pub key: String,
    pub target: String,
}

impl DispatchEntry {
    /// Parse a single token. Splits at the first `=`; without one the key
    /// doubles as the target.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.split_once('=') {
            Some((key, target)) => Self {
                key: key.trim().to_string(),
                target: target.trim().to_string(),
            },
            None => Self {
                key: token.to_string(),
                target: token.to_string(),
            },
        }
    }

    pub fn is_default(&self) -> bool {
        self.key == DEFAULT_METHOD_KEY
    }

    /// True if the request carries `key` or `key.x`, with any value.
    pub fn matches(&self, params: &dyn RequestParams) -> bool {
        params.contains(&self.key)
            || params.contains(&format!("{}{IMAGE_BUTTON_SUFFIX}", self.key))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSpec {
    raw: String,
    entries: Vec<DispatchEntry>,
    default_target: Option<String>,
}

impl DispatchSpec {
    /// Parse a configuration string. Returns `None` when it is blank.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        let entries: Vec<DispatchEntry> = raw
            .split(',')
            .filter(|token| !token.trim().is_empty())
            .map(DispatchEntry::parse)
            .collect();

        // last `default` wins; an empty target means there is no fallback
        let default_target = entries
            .iter()
            .rev()
            .find(|entry| entry.is_default())
            .map(|entry| entry.target.clone())
            .filter(|target| !target.is_empty());

        Some(Self {
            raw: raw.to_string(),
            entries,
            default_target,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn entries(&self) -> &[DispatchEntry] {
        &self.entries
    }

    pub fn default_target(&self) -> Option<&str> {
        self.default_target.as_deref()
    }

    /// First matching entry's target, else the default, else `None`.
    pub fn resolve(&self, params: &dyn RequestParams) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.matches(params))
            .map(|entry| entry.target.as_str())
            .or(self.default_target())
    }
}
