//! Command definitions
//!
//! Describes how each command is framed on the wire and which reply shape
//! the server answers it with.

use crate::error::{KvError, Result};

/// How the final argument of a request is framed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// Every argument is a space-separated token on the header line
    PlainInline,

    /// The last argument is sent as a length-prefixed binary segment
    TrailingBulk,
}

/// Shape of the reply a command produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    /// One line, printed as-is, never a failure
    SingleLine,

    /// One line holding a number, negative means failure
    Integer,

    /// One line, a leading `-` means failure
    Status,

    /// Length line followed by a binary payload
    Bulk,

    /// Count line followed by that many bulk replies
    MultiBulk,
}

/// Static description of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Lowercase command name
    pub name: &'static str,

    /// Positive: exact argument count (command name included).
    /// Negative: minimum argument count.
    pub arity: i32,

    pub request_mode: RequestMode,

    pub reply_kind: ReplyKind,
}

impl CommandSpec {
    pub const fn new(
        name: &'static str,
        arity: i32,
        request_mode: RequestMode,
        reply_kind: ReplyKind,
    ) -> Self {
        Self {
            name,
            arity,
            request_mode,
            reply_kind,
        }
    }

    /// Whether `argc` arguments (command name included) satisfy the arity
    pub fn accepts(&self, argc: usize) -> bool {
        let required = self.arity.unsigned_abs() as usize;
        if self.arity >= 0 {
            argc == required
        } else {
            argc >= required
        }
    }

    /// Validate the argument count, returning `WrongArity` on mismatch
    pub fn check_arity(&self, argc: usize) -> Result<()> {
        if self.accepts(argc) {
            Ok(())
        } else {
            Err(KvError::WrongArity {
                name: self.name,
                arity: self.arity,
                got: argc,
            })
        }
    }
}
