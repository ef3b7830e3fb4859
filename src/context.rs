// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key/value data attached to every message logged through a manager.
//!
//! Each [`Manager`](crate::Manager) owns a local map of global data.  When a message is
//! logged, the maps along the path from the root down to the logging manager are merged,
//! with entries closer to the logging manager shadowing entries of the same key further up,
//! and the result is appended to the message as one line of JSON.
//!
//! Values are [`serde_json::Value`]s, so anything stored is JSON by construction.  Values
//! that are not already JSON go through
//! [`Manager::try_add_global_data`](crate::Manager::try_add_global_data), which rejects them
//! up front if they cannot be encoded.

pub use serde_json::Value as ContextValue;

/// A set of global data entries.
pub type ContextData = serde_json::Map<String, ContextValue>;

/// Overlays `local` onto `base`.  On key collision the entry from `local` wins.
pub(crate) fn overlay(base: &mut ContextData, local: &ContextData) {
    for (key, value) in local {
        base.insert(key.clone(), value.clone());
    }
}

/// Encodes merged global data as a single line of JSON.
///
/// # Panics
///
/// Panics if the data cannot be encoded.  A `ContextData` only ever holds
/// `serde_json::Value`s, so this indicates a bug rather than a runtime condition.
pub(crate) fn encode(data: &ContextData) -> String {
    match serde_json::to_string(data) {
        Ok(json) => json,
        Err(e) => panic!("could not encode the global data to JSON: {e}"),
    }
}
