//! Request codec
//!
//! Builds the bytes sent to the server for one command.
//!
//! ## Wire Format
//!
//! ### Inline request
//! ```text
//! get mykey\r\n
//! ```
//!
//! ### Trailing bulk request
//! The last header token is the byte length of the final argument, whose raw
//! bytes follow on their own segment:
//! ```text
//! set mykey 5\r\n
//! value\r\n
//! ```
//!
//! Non-trailing arguments are joined with single spaces and are not escaped,
//! so they must not contain whitespace. The trailing bulk argument may hold
//! arbitrary bytes.

use std::io::Write;

use bytes::{BufMut, Bytes, BytesMut};

use super::command::{CommandSpec, RequestMode};
use crate::error::Result;

/// Line terminator used by every request and reply line
pub const CRLF: &[u8] = b"\r\n";

/// Encode a request
///
/// `args[0]` is the command name. The caller is expected to have validated
/// the argument count against `spec` already.
pub fn encode_request<A: AsRef<[u8]>>(spec: &CommandSpec, args: &[A]) -> Bytes {
    let trailing = match (spec.request_mode, args.last()) {
        (RequestMode::TrailingBulk, Some(last)) => Some(last.as_ref()),
        _ => None,
    };
    let inline_count = if trailing.is_some() {
        args.len() - 1
    } else {
        args.len()
    };

    let header_len: usize = args[..inline_count]
        .iter()
        .map(|arg| arg.as_ref().len() + 1)
        .sum();
    let payload_len = trailing.map_or(0, |bulk| bulk.len() + 24);
    let mut message = BytesMut::with_capacity(header_len + payload_len + CRLF.len());

    for (i, arg) in args[..inline_count].iter().enumerate() {
        if i != 0 {
            message.put_u8(b' ');
        }
        message.put_slice(arg.as_ref());
    }

    if let Some(bulk) = trailing {
        if inline_count != 0 {
            message.put_u8(b' ');
        }
        message.put_slice(bulk.len().to_string().as_bytes());
        message.put_slice(CRLF);
        message.put_slice(bulk);
    }
    message.put_slice(CRLF);

    message.freeze()
}

/// Encode a request and write it to a stream
pub fn write_request<W: Write, A: AsRef<[u8]>>(
    writer: &mut W,
    spec: &CommandSpec,
    args: &[A],
) -> Result<()> {
    let bytes = encode_request(spec, args);
    tracing::trace!(command = spec.name, bytes = bytes.len(), "Writing request");
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
