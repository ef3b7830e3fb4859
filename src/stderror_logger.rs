// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::backend::Backend;
use crate::error::BoxError;
use crate::level::Level;
use std::sync::atomic::{AtomicBool, Ordering};

/**
A reference backend that writes to stderr.

Every message is written unbuffered, prefixed by its severity tag.  On wasm32 the browser
console is used instead, with the console method matching the level.
 */
#[derive(Debug)]
pub struct StdErrorLogger {
    id: String,
    closed: AtomicBool,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for StdErrorLogger trait implementations:
//
// - Debug: Derived - required by Backend trait
// - Clone/Copy: NOT implemented - closed state belongs to one instance
// - Default: Implemented - provides convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation for stderr logger
// - Send/Sync: Automatically implemented - atomics only

impl Default for StdErrorLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl StdErrorLogger {
    /// Identifier used when none is given.
    pub const DEFAULT_ID: &'static str = "stderr-logger";

    pub fn new() -> Self {
        Self::with_id(Self::DEFAULT_ID)
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            closed: AtomicBool::new(false),
        }
    }

    fn write_level(&self, msg: &str, level: Level) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut lock = std::io::stderr().lock();
            // nowhere to report a failed write to stderr
            let _ = lock
                .write_all(level.tag().as_bytes())
                .and_then(|_| lock.write_all(msg.as_bytes()));
        }
        #[cfg(target_arch = "wasm32")]
        {
            let line = wasm_bindgen::JsValue::from(format!(
                "{}{}",
                level.tag(),
                msg.trim_end_matches('\n')
            ));
            match level {
                Level::Error => web_sys::console::error_1(&line),
                Level::Info => web_sys::console::info_1(&line),
                Level::Debug => web_sys::console::debug_1(&line),
                Level::Plain => web_sys::console::log_1(&line),
            }
        }
    }
}

impl Backend for StdErrorLogger {
    fn id(&self) -> &str {
        &self.id
    }

    fn close(&self) -> Result<(), BoxError> {
        //nothing to flush since we are unbuffered
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
