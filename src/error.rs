//! Error types for loading snapshots and building the cluster graph.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while turning scheduler snapshots into a graph.
///
/// Every variant is fatal: the graph is never emitted partially.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The document could not be read or is not well-formed XML.
    #[error("Unexpected error opening {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    /// A required element is absent from an otherwise valid document.
    #[error("{}: missing <{element}>", .path.display())]
    MissingElement { path: PathBuf, element: String },

    /// A field that must be numeric holds something else.
    #[error("{}: invalid value for {field}: {value:?}", .path.display())]
    InvalidValue {
        path: PathBuf,
        field: String,
        value: String,
    },

    /// A queue instance name without the `queue@host` separator.
    #[error("malformed queue instance name: {0:?}")]
    MalformedQueueName(String),

    /// No host in the host listing matches the queue's execution host.
    #[error("host {fqdn} not found in host listing")]
    HostNotFound { fqdn: String },

    /// The host exists but reports no numeric load average.
    #[error("host {fqdn} reports no load_avg")]
    LoadUnavailable { fqdn: String },

    /// A queue with no slots cannot normalize its host load.
    #[error("queue {queue} has zero total slots")]
    ZeroSlots { queue: String },
}

impl GraphError {
    pub(crate) fn invalid(path: &Path, field: &str, value: &str) -> Self {
        GraphError::InvalidValue {
            path: path.to_path_buf(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
