//! Error types for the wallet API client.
//!
//! # Design
//! Every call settles into exactly one of four failure kinds, checked in this
//! order: the transport never produced a response, the response carried a
//! non-2xx status, the 2xx body was not a valid envelope, or the backend
//! declared failure through the `Left` arm. Each variant's `Display` starts
//! with a stable marker (`TransportError`, `HTTPStatusError`, `DecodeError`,
//! `ServerError`) so callers that only see the message can still tell them
//! apart.

use std::error::Error as StdError;

use thiserror::Error;

/// The transport failed before any HTTP response was obtained (DNS, connect,
/// timeout, ...). The underlying cause is kept as the error source.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a lower-level error, keeping it reachable through `source()`.
    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Which terminal failure state a call ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    HttpStatus,
    Decode,
    Server,
    Serialization,
}

/// Errors returned by `WalletClient` and the response normalizer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No HTTP exchange completed.
    #[error("TransportError: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a status outside 2xx. The body is kept
    /// verbatim and never parsed.
    #[error("HTTPStatusError: status {status}")]
    HttpStatus { status: u16, body: String },

    /// A 2xx body that is not JSON, not an envelope, or whose `Right` payload
    /// does not match the operation's type.
    #[error("DecodeError: {0}")]
    Decode(String),

    /// The backend declared failure through `{"Left": ...}`.
    #[error("ServerError: {0}")]
    Server(String),

    /// The request payload could not be serialized to JSON.
    #[error("SerializationError: {0}")]
    Serialization(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Transport(_) => ErrorKind::Transport,
            ClientError::HttpStatus { .. } => ErrorKind::HttpStatus,
            ClientError::Decode(_) => ErrorKind::Decode,
            ClientError::Server(_) => ErrorKind::Server,
            ClientError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// HTTP status for `HttpStatus` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
