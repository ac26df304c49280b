//! Reply printer
//!
//! Writes a decoded [`Reply`] in the client's textual output format and
//! reports whether it signals success.

use std::io::Write;

use super::reply::{BulkReply, Reply};
use crate::error::Result;

/// Placeholder printed for absent values
pub const NIL_TEXT: &[u8] = b"(nil)";

/// Outcome of a printed reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    /// Process exit status for this outcome
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => 1,
        }
    }
}

impl From<bool> for Outcome {
    fn from(failure: bool) -> Self {
        if failure {
            Outcome::Failure
        } else {
            Outcome::Success
        }
    }
}

/// Renders replies to an output stream
pub struct ReplyPrinter<W> {
    out: W,

    /// Output is an interactive terminal
    interactive: bool,
}

impl<W: Write> ReplyPrinter<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self { out, interactive }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a reply and return its outcome
    pub fn print(&mut self, reply: &Reply) -> Result<Outcome> {
        match reply {
            Reply::SingleLine(line) | Reply::Status(line) | Reply::Integer { line, .. } => {
                self.out.write_all(line)?;
                self.out.write_all(b"\n")?;
            }
            Reply::Bulk(bulk) => self.print_bulk(bulk)?,
            Reply::MultiBulk(None) => {
                self.out.write_all(NIL_TEXT)?;
                self.out.write_all(b"\n")?;
            }
            Reply::MultiBulk(Some(elements)) => {
                for (i, element) in elements.iter().enumerate() {
                    self.begin_element(i + 1)?;
                    self.finish_element(element)?;
                    if element.error {
                        break;
                    }
                }
            }
        }
        self.out.flush()?;
        Ok(Outcome::from(reply.is_failure()))
    }

    /// Top-level bulk: newline after nil, and after a payload on a terminal
    fn print_bulk(&mut self, bulk: &BulkReply) -> Result<()> {
        match &bulk.payload {
            None => {
                self.out.write_all(NIL_TEXT)?;
                self.out.write_all(b"\n")?;
            }
            Some(payload) => {
                self.out.write_all(payload)?;
                if self.interactive && payload.last() != Some(&b'\n') {
                    self.out.write_all(b"\n")?;
                }
            }
        }
        Ok(())
    }

    /// Write the `<index>. ` prefix of a multi-bulk element
    pub fn begin_element(&mut self, index: usize) -> Result<()> {
        write!(self.out, "{}. ", index)?;
        Ok(())
    }

    /// Write a multi-bulk element after its prefix
    ///
    /// An error element ends the reply and gets no newline.
    pub fn finish_element(&mut self, bulk: &BulkReply) -> Result<()> {
        match &bulk.payload {
            None => self.out.write_all(NIL_TEXT)?,
            Some(payload) => self.out.write_all(payload)?,
        }
        if !bulk.error {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
