// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default manager.
//!
//! Callers that don't want to manage a tree themselves can use the functions in this
//! module, which all forward to a single root [`Manager`] shared by the whole process.
//!
//! # Lifetime
//!
//! The default manager is created on first use and is never torn down.  [`close`] detaches
//! and closes its backends and sub-managers, but the manager itself stays usable: backends
//! can be added again afterwards.
//!
//! # Default Behavior
//!
//! The default manager starts with an empty tag, no global data and no backends, so
//! messages are dropped until a backend is added.
//!
//! # Examples
//!
//! ```
//! use logtree::{global, StdErrorLogger};
//! use std::sync::Arc;
//!
//! global::add(Arc::new(StdErrorLogger::new())).unwrap();
//! global::info(&[&"service", &"started"]);
//!
//! let db = global::new_sub_manager("[db]");
//! logtree::infof!(db, "connected to {}", "primary");
//! # global::close();
//! ```

use crate::backend::Backend;
use crate::context::ContextValue;
use crate::error::{Error, ManagerResult};
use crate::manager::Manager;
use std::fmt::{self, Display};
use std::sync::{Arc, OnceLock};

static DEFAULT_MANAGER: OnceLock<Manager> = OnceLock::new();

/// The manager every function in this module forwards to.
///
/// Useful with the logging macros: `logtree::info!(global::default_manager(), "x")`.
pub fn default_manager() -> &'static Manager {
    DEFAULT_MANAGER.get_or_init(Manager::new)
}

pub fn id() -> &'static str {
    default_manager().id()
}

/// Adds data that is appended to every message logged through the default manager
/// and its sub-managers.
pub fn add_global_data(key: impl Into<String>, value: impl Into<ContextValue>) {
    default_manager().add_global_data(key, value)
}

pub fn remove_global_data(key: &str) {
    default_manager().remove_global_data(key)
}

/// Attaches a backend to the default manager.
///
/// Returns [`Error::AlreadyExists`] if a backend with the same id is already attached.
pub fn add(backend: Arc<dyn Backend>) -> ManagerResult<()> {
    default_manager().add(backend)
}

/// Detaches and closes a backend.  See [`Manager::remove`].
pub fn remove(backend_id: &str) -> ManagerResult<()> {
    default_manager().remove(backend_id)
}

/// Closes every backend and sub-manager of the default manager.  See [`Manager::close`].
pub fn close() -> Vec<Error> {
    default_manager().close()
}

pub fn new_sub_manager(tag: impl Into<String>) -> Manager {
    default_manager().new_sub_manager(tag)
}

pub fn set_tag(tag: impl Into<String>) {
    default_manager().set_tag(tag)
}

pub fn tag() -> String {
    default_manager().tag()
}

pub fn full_tag() -> String {
    default_manager().full_tag()
}

pub fn error(args: &[&dyn Display]) {
    default_manager().error(args)
}

pub fn error_fmt(args: fmt::Arguments<'_>) {
    default_manager().error_fmt(args)
}

pub fn info(args: &[&dyn Display]) {
    default_manager().info(args)
}

pub fn info_fmt(args: fmt::Arguments<'_>) {
    default_manager().info_fmt(args)
}

pub fn debug(args: &[&dyn Display]) {
    default_manager().debug(args)
}

pub fn debug_fmt(args: fmt::Arguments<'_>) {
    default_manager().debug_fmt(args)
}

pub fn log(args: &[&dyn Display]) {
    default_manager().log(args)
}

pub fn log_fmt(args: fmt::Arguments<'_>) {
    default_manager().log_fmt(args)
}
