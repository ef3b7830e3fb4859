//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::error::BoxError;
use crate::level::Level;
use std::fmt::Debug;

/**
A destination for composed log messages.

Backends are attached to a [crate::Manager] and receive every message logged at that
manager or at any of its descendants.  The message handed to a write method is already
fully composed (tag, text, trailing context line); the backend only decides where it goes.

Write methods have no way to report failure.  A backend that can fail to write is
expected to swallow the failure itself.
*/
pub trait Backend: Debug + Send + Sync {
    /**
    Identifier of the backend.

    Must be stable for the backend's lifetime.  A manager refuses a second backend with
    the same identifier.
    */
    fn id(&self) -> &str;

    /**
    Frees any resource held by the backend.

    The backend may not be reusable afterwards.  Calling this more than once must not
    corrupt the backend.
    */
    fn close(&self) -> Result<(), BoxError>;

    fn is_closed(&self) -> bool;

    fn error(&self, msg: &str);

    fn info(&self, msg: &str);

    fn debug(&self, msg: &str);

    fn log(&self, msg: &str);

    /**
    Routes the message to the write method matching `level`.
    */
    fn write(&self, level: Level, msg: &str) {
        match level {
            Level::Error => self.error(msg),
            Level::Info => self.info(msg),
            Level::Debug => self.debug(msg),
            Level::Plain => self.log(msg),
        }
    }
}

/*
Boilerplate notes.

# Backend

Clone makes little sense, a backend usually owns a resource (a file, a socket).  Managers share
backends through Arc instead.
PartialEq/Eq are ambiguous: the id is what a manager compares, and it does that itself.
Default is not necessarily sensible since who knows how the backend is constructed.
Send/Sync are required since any thread holding a manager may write to its backends.
*/
