// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors returned by manager operations.

use crate::backend::Backend;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by a backend's own `close`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while managing a tree of loggers.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// A backend with this identifier is already attached to the manager.
    #[error("logger {0:?} already added")]
    AlreadyExists(String),

    /// A backend failed to close.  It has been detached regardless.
    #[error("logger {id:?} could not be closed: {source}")]
    BackendClose {
        id: String,
        backend: Arc<dyn Backend>,
        #[source]
        source: BoxError,
    },

    /// A global data value could not be represented as JSON.
    #[error("global data {key:?} cannot be encoded to JSON: {source}")]
    Encoding {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn backend_close(backend: Arc<dyn Backend>, source: BoxError) -> Self {
        Error::BackendClose {
            id: backend.id().to_string(),
            backend,
            source,
        }
    }

    /// The backend this error is about, if any.
    pub fn backend(&self) -> Option<&Arc<dyn Backend>> {
        match self {
            Error::BackendClose { backend, .. } => Some(backend),
            _ => None,
        }
    }
}

/// Result type for manager operations.
pub type ManagerResult<T> = Result<T, Error>;
