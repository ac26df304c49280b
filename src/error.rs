//! Error types for kvwire
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for kvwire operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Command Errors (raised before any network activity)
    // -------------------------------------------------------------------------
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Wrong number of arguments for '{name}' (arity {arity}, got {got})")]
    WrongArity {
        name: &'static str,
        arity: i32,
        got: usize,
    },

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Connect: {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Connection closed by server")]
    ConnectionClosed,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Length out of range: {len} bytes (max {max})")]
    OutOfRange { len: u64, max: u64 },

    // -------------------------------------------------------------------------
    // Usage / Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KvError {
    /// True when the connection failed or ended in the middle of a reply
    pub fn is_read_failure(&self) -> bool {
        matches!(self, KvError::Io(_) | KvError::ConnectionClosed)
    }

    /// True for errors detected before a connection is opened
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            KvError::UnknownCommand(_) | KvError::WrongArity { .. } | KvError::Usage(_) | KvError::Config(_)
        )
    }
}
