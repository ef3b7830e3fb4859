// SPDX-License-Identifier: MIT OR Apache-2.0

/// Severity selector attached to every write.
///
/// Severity is cosmetic: every backend receives every message, and the level only
/// decides which of the backend's four write methods is called and which prefix a
/// backend prepends.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Plain output, written without a prefix
    Plain,
    /// Intended for development while actively debugging a subsystem
    Debug,
    /// Helpful, but not essential, for troubleshooting
    Info,
    /// Something failed
    Error,
}

impl Level {
    /// The bracketed prefix backends put in front of a message.
    ///
    /// ```
    /// use logtree::Level;
    /// assert_eq!(Level::Error.tag(), "[ERROR]");
    /// assert_eq!(Level::Plain.tag(), "");
    /// ```
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Plain => "",
            Level::Debug => "[DEBUG]",
            Level::Info => "[INFO]",
            Level::Error => "[ERROR]",
        }
    }
}
