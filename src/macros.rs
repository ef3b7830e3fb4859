// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging macros.
//!
//! Two families, both taking the manager to log on as their first argument:
//!
//! - `error!`, `info!`, `debug!`, `log!` take any number of [`Display`](std::fmt::Display)
//!   operands and print them separated by single spaces, like `println!("{} {}", a, b)`.
//! - `errorf!`, `infof!`, `debugf!`, `logf!` take a format string and arguments, like
//!   `format!`.
//!
//! ```
//! use logtree::{InMemoryLogger, Manager};
//! use std::sync::Arc;
//!
//! let m = Manager::new();
//! let logger = Arc::new(InMemoryLogger::new());
//! m.add(logger.clone()).unwrap();
//!
//! logtree::debug!(m, "retrying in", 3, "seconds");
//! logtree::debugf!(m, "retrying in {}s", 3);
//! assert_eq!(
//!     logger.logs(),
//!     vec!["[DEBUG]retrying in 3 seconds\n", "[DEBUG]retrying in 3s\n"]
//! );
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($method:ident, $manager:expr $(, $arg:expr)* $(,)?) => {
        $manager.$method(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Logs an error message on a manager.  Operands are joined with spaces.
#[macro_export]
macro_rules! error {
    ($manager:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!(error, $manager $(, $arg)*)
    };
}

/// Logs an info message on a manager.  Operands are joined with spaces.
#[macro_export]
macro_rules! info {
    ($manager:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!(info, $manager $(, $arg)*)
    };
}

/// Logs a debug message on a manager.  Operands are joined with spaces.
#[macro_export]
macro_rules! debug {
    ($manager:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!(debug, $manager $(, $arg)*)
    };
}

/// Logs a message without severity prefix on a manager.  Operands are joined with spaces.
#[macro_export]
macro_rules! log {
    ($manager:expr $(, $arg:expr)* $(,)?) => {
        $crate::__emit!(log, $manager $(, $arg)*)
    };
}

/// Logs a formatted error message on a manager.
#[macro_export]
macro_rules! errorf {
    ($manager:expr, $($arg:tt)+) => {
        $manager.error_fmt(::std::format_args!($($arg)+))
    };
}

/// Logs a formatted info message on a manager.
#[macro_export]
macro_rules! infof {
    ($manager:expr, $($arg:tt)+) => {
        $manager.info_fmt(::std::format_args!($($arg)+))
    };
}

/// Logs a formatted debug message on a manager.
#[macro_export]
macro_rules! debugf {
    ($manager:expr, $($arg:tt)+) => {
        $manager.debug_fmt(::std::format_args!($($arg)+))
    };
}

/// Logs a formatted message without severity prefix on a manager.
#[macro_export]
macro_rules! logf {
    ($manager:expr, $($arg:tt)+) => {
        $manager.log_fmt(::std::format_args!($($arg)+))
    };
}
