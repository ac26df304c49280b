//! Reply decoder
//!
//! Reads exactly one reply from a buffered stream. Which shape to expect is
//! decided by the [`ReplyKind`] of the command that was sent; the decoder
//! never inspects the reply to guess it.
//!
//! ## Wire Format
//! ```text
//! SingleLine / Integer / Status:   <line>\r\n
//! Bulk:                            <len>\r\n<len bytes>\r\n   (or nil\r\n)
//! MultiBulk:                       <count>\r\n<bulk>...       (or nil\r\n)
//! ```
//!
//! A negative bulk length `-n` announces an `n` byte error payload. Inside a
//! multi-bulk reply a length of `-1` is an absent element.

use std::io::{BufRead, Read, Write};

use bytes::Bytes;

use super::command::ReplyKind;
use super::printer::{Outcome, ReplyPrinter};
use super::reply::{BulkReply, Reply};
use crate::config::DEFAULT_MAX_BULK_LEN;
use crate::error::{KvError, Result};

/// Longest accepted reply line, terminator included (64 KB)
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Textual sentinel for an absent bulk or multi-bulk reply
pub const NIL_SENTINEL: &str = "nil";

/// Size of the terminator following every bulk payload
const TERMINATOR_LEN: usize = 2;

/// Decodes replies from a buffered reader
pub struct ReplyDecoder<R> {
    reader: R,
    max_bulk_len: u64,
}

impl<R: BufRead> ReplyDecoder<R> {
    /// Create a decoder with the default bulk length bound
    pub fn new(reader: R) -> Self {
        Self::with_max_bulk_len(reader, DEFAULT_MAX_BULK_LEN)
    }

    /// Create a decoder rejecting bulk payloads longer than `max_bulk_len`
    pub fn with_max_bulk_len(reader: R, max_bulk_len: u64) -> Self {
        Self {
            reader,
            max_bulk_len,
        }
    }

    /// Give back the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decode one reply of the given kind
    pub fn decode(&mut self, kind: ReplyKind) -> Result<Reply> {
        tracing::debug!(?kind, "Decoding reply");
        match kind {
            ReplyKind::SingleLine => Ok(Reply::SingleLine(self.read_line()?)),
            ReplyKind::Integer => {
                let line = self.read_line()?;
                let value = parse_integer(&line);
                if value.is_none() {
                    tracing::warn!(line = %String::from_utf8_lossy(&line), "Integer reply is not a number");
                }
                Ok(Reply::Integer { line, value })
            }
            ReplyKind::Status => Ok(Reply::Status(self.read_line()?)),
            ReplyKind::Bulk => Ok(Reply::Bulk(self.read_bulk(false)?)),
            ReplyKind::MultiBulk => self.read_multi_bulk(),
        }
    }

    /// Decode one reply of the given kind, printing it as it arrives
    ///
    /// Multi-bulk elements are printed one by one, so elements received
    /// before a read failure are already on the printer's output when the
    /// error is returned.
    pub fn decode_into<W: Write>(
        &mut self,
        kind: ReplyKind,
        printer: &mut ReplyPrinter<W>,
    ) -> Result<Outcome> {
        if kind != ReplyKind::MultiBulk {
            let reply = self.decode(kind)?;
            return printer.print(&reply);
        }

        tracing::debug!(?kind, "Decoding reply");
        let Some(count) = self.read_multi_bulk_count()? else {
            return printer.print(&Reply::MultiBulk(None));
        };

        for index in 1..=count {
            printer.begin_element(index)?;
            let element = self.read_bulk(true)?;
            printer.finish_element(&element)?;
            if element.error {
                return Ok(Outcome::Failure);
            }
        }
        Ok(Outcome::Success)
    }

    /// Read one line, without its `\n` and at most one trailing `\r`
    ///
    /// The bytes are returned as received. Fails with `ConnectionClosed` if
    /// the stream ends before a newline.
    pub fn read_line(&mut self) -> Result<Bytes> {
        let mut line = Vec::new();
        let limit = MAX_LINE_LEN as u64 + 1;
        let read = (&mut self.reader).take(limit).read_until(b'\n', &mut line)?;

        if line.last() != Some(&b'\n') {
            if read as u64 >= limit {
                return Err(KvError::OutOfRange {
                    len: read as u64,
                    max: MAX_LINE_LEN as u64,
                });
            }
            return Err(KvError::ConnectionClosed);
        }
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        tracing::trace!(line = %String::from_utf8_lossy(&line), "Read line");
        Ok(Bytes::from(line))
    }

    /// Read a bulk reply; `nested` is set for elements of a multi-bulk reply
    fn read_bulk(&mut self, nested: bool) -> Result<BulkReply> {
        let line = self.read_line()?;
        if is_nil(&line) {
            return Ok(BulkReply::nil());
        }

        let len = parse_number(&line, "bulk length")?;
        if nested && len == -1 {
            return Ok(BulkReply::nil());
        }

        let payload = self.read_payload(len.unsigned_abs())?;
        if len < 0 {
            Ok(BulkReply::error(payload))
        } else {
            Ok(BulkReply::value(payload))
        }
    }

    /// Read `len` payload bytes followed by the 2-byte terminator
    fn read_payload(&mut self, len: u64) -> Result<Bytes> {
        if len > self.max_bulk_len {
            return Err(KvError::OutOfRange {
                len,
                max: self.max_bulk_len,
            });
        }

        // Grow with the bytes actually received rather than trusting `len`
        let mut payload = Vec::new();
        let read = (&mut self.reader).take(len).read_to_end(&mut payload)?;
        if (read as u64) < len {
            return Err(KvError::ConnectionClosed);
        }

        let mut terminator = [0u8; TERMINATOR_LEN];
        self.reader
            .read_exact(&mut terminator)
            .map_err(closed_on_eof)?;

        Ok(Bytes::from(payload))
    }

    fn read_multi_bulk(&mut self) -> Result<Reply> {
        let Some(count) = self.read_multi_bulk_count()? else {
            return Ok(Reply::MultiBulk(None));
        };

        let mut elements = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            let element = self.read_bulk(true)?;
            let stop = element.error;
            elements.push(element);
            if stop {
                break;
            }
        }
        Ok(Reply::MultiBulk(Some(elements)))
    }

    /// Read the count line of a multi-bulk reply, `None` for the nil sentinel
    fn read_multi_bulk_count(&mut self) -> Result<Option<usize>> {
        let line = self.read_line()?;
        if is_nil(&line) {
            return Ok(None);
        }

        let count = parse_number(&line, "multi-bulk count")?;
        usize::try_from(count)
            .map(Some)
            .map_err(|_| KvError::Protocol(format!("negative multi-bulk count: {}", count)))
    }
}

fn is_nil(line: &[u8]) -> bool {
    line == NIL_SENTINEL.as_bytes()
}

/// Integer value of a line, ignoring surrounding whitespace
fn parse_integer(line: &[u8]) -> Option<i64> {
    std::str::from_utf8(line)
        .ok()
        .and_then(|text| text.trim().parse::<i64>().ok())
}

fn parse_number(line: &[u8], what: &str) -> Result<i64> {
    parse_integer(line).ok_or_else(|| {
        let line = String::from_utf8_lossy(line);
        tracing::warn!(%line, "Unparsable {}", what);
        KvError::Protocol(format!("invalid {}: {:?}", what, line))
    })
}

fn closed_on_eof(err: std::io::Error) -> KvError {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
        KvError::ConnectionClosed
    } else {
        KvError::Io(err)
    }
}
