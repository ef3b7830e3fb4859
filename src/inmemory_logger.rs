// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Logger
//!
//! This module provides an in-memory backend for testing and debugging purposes.
//! The `InMemoryLogger` appends every message it receives to an ordered buffer rather than
//! writing it anywhere, making it ideal for:
//!
//! - Unit testing code that logs through a [`Manager`](crate::Manager)
//! - Programmatically examining log output
//! - Capturing logs in environments where stderr is redirected or unavailable
//!
//! Each message is stored exactly as the manager composed it, prefixed by the severity tag
//! (`[ERROR]`, `[INFO]`, `[DEBUG]`, nothing for plain messages).

use crate::backend::Backend;
use crate::error::BoxError;
use crate::level::Level;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// A backend that stores messages in a `Vec<String>`.
///
/// Intended for tests.  Lines are kept in the order they were written; when several
/// threads log through the same instance that order is whatever order the writes happened
/// to land in.
///
/// # Example
///
/// ```rust
/// use logtree::{InMemoryLogger, Manager};
/// use std::sync::Arc;
///
/// let manager = Manager::new();
/// let logger = Arc::new(InMemoryLogger::new());
/// manager.add(logger.clone()).unwrap();
///
/// logtree::error!(manager, "a", "b");
/// assert_eq!(logger.logs(), vec!["[ERROR]a b\n"]);
///
/// // Two backends on one manager need distinct ids
/// manager.add(Arc::new(InMemoryLogger::with_id("second"))).unwrap();
/// assert!(manager.add(Arc::new(InMemoryLogger::new())).is_err());
/// ```
#[derive(Debug)]
pub struct InMemoryLogger {
    id: String,
    logs: Mutex<Vec<String>>,
    closed: AtomicBool,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for InMemoryLogger trait implementations:
//
// - Debug: Derived for diagnostic purposes and required by Backend trait
// - Default: Implemented with obvious zero-value (default id, empty log buffer)
// - Clone: NOT implemented - two copies sharing an id would fight over a manager slot
// - PartialEq/Eq: NOT implemented - equality semantics unclear for loggers
// - Hash: NOT implemented - requires Eq
// - Display: NOT implemented - no meaningful display representation
// - Send/Sync: Automatically implemented due to Mutex usage (required for Backend trait)

impl Default for InMemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogger {
    /// Identifier used when none is given.
    pub const DEFAULT_ID: &'static str = "slice-logger";

    /// Creates a logger with the default id, `"slice-logger"`.
    pub fn new() -> Self {
        Self::with_id(Self::DEFAULT_ID)
    }

    /// Creates a logger with a custom id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            logs: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// A copy of every stored message, oldest first.
    pub fn logs(&self) -> Vec<String> {
        self.logs.lock().unwrap().clone()
    }

    /// Drains all logs into a single string, clearing the internal buffer.
    ///
    /// Messages are concatenated as-is; each one already ends with a newline.
    pub fn drain_logs(&self) -> String {
        let mut logs = self.logs.lock().unwrap();
        let result = logs.concat();
        logs.clear();
        result
    }

    pub fn clear(&self) {
        self.logs.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.logs.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flushes all logs to the console, clearing the internal buffer.
    ///
    /// - On native platforms: written to stderr
    /// - On WASM: written using `console.log`
    pub fn drain_to_console(&self) {
        let mut logs = self.logs.lock().unwrap();
        for log in logs.iter() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&wasm_bindgen::JsValue::from(log.as_str()));
            #[cfg(not(target_arch = "wasm32"))]
            eprint!("{}", log);
        }
        logs.clear();
    }

    fn write_level(&self, msg: &str, level: Level) {
        let line = format!("{}{}", level.tag(), msg);
        self.logs.lock().unwrap().push(line);
    }
}

impl Backend for InMemoryLogger {
    fn id(&self) -> &str {
        &self.id
    }

    /// Marks the logger closed and drops everything stored so far.
    fn close(&self) -> Result<(), BoxError> {
        self.logs.lock().unwrap().clear();
        self.closed.store(true, Ordering::Release);
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn error(&self, msg: &str) {
        self.write_level(msg, Level::Error)
    }

    fn info(&self, msg: &str) {
        self.write_level(msg, Level::Info)
    }

    fn debug(&self, msg: &str) {
        self.write_level(msg, Level::Debug)
    }

    fn log(&self, msg: &str) {
        self.write_level(msg, Level::Plain)
    }
}
