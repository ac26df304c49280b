//! Reply definitions
//!
//! Represents one decoded server reply.

use bytes::Bytes;

/// A single bulk value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkReply {
    /// Payload bytes, `None` when the server sent an absent value
    pub payload: Option<Bytes>,

    /// Set when the server sent a negative length (error payload)
    pub error: bool,
}

impl BulkReply {
    /// A present value
    pub fn value(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: Some(payload.into()),
            error: false,
        }
    }

    /// An error payload
    pub fn error(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: Some(payload.into()),
            error: true,
        }
    }

    /// An absent value
    pub fn nil() -> Self {
        Self {
            payload: None,
            error: false,
        }
    }

    pub fn is_nil(&self) -> bool {
        self.payload.is_none()
    }
}

/// A decoded reply; exactly one shape per decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Free-form line, bytes as received
    SingleLine(Bytes),

    /// Numeric line. `value` is `None` when the line is not a number.
    Integer { line: Bytes, value: Option<i64> },

    /// Status line, including its leading marker character
    Status(Bytes),

    Bulk(BulkReply),

    /// `None` for the nil sentinel. Decoding stops at the first error
    /// element, so an error element can only be the last one.
    MultiBulk(Option<Vec<BulkReply>>),
}

impl Reply {
    /// Whether the server signalled a failure in this reply
    pub fn is_failure(&self) -> bool {
        match self {
            Reply::SingleLine(_) => false,
            Reply::Integer { value, .. } => value.is_some_and(|v| v < 0),
            Reply::Status(line) => line.first() == Some(&b'-'),
            Reply::Bulk(bulk) => bulk.error,
            Reply::MultiBulk(elements) => elements
                .as_deref()
                .is_some_and(|items| items.iter().any(|item| item.error)),
        }
    }
}
