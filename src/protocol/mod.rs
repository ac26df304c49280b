//! Protocol Module
//!
//! Line-and-length-prefixed request/reply protocol.
//!
//! ## Request Format
//! ```text
//! <cmd> <arg1> ... <argN>\r\n                       (inline)
//! <cmd> <arg1> ... <len(argN)>\r\n<argN bytes>\r\n   (trailing bulk)
//! ```
//!
//! ## Reply Shapes
//! - SingleLine: one line, printed verbatim
//! - Integer:    one line, negative means failure
//! - Status:     one line, leading `-` means failure
//! - Bulk:       length line + payload + `\r\n`, or `nil`
//! - MultiBulk:  count line + that many bulk replies, or `nil`

mod command;
mod registry;
mod codec;
mod reply;
mod decoder;
mod printer;

pub use command::{CommandSpec, ReplyKind, RequestMode};
pub use registry::{lookup, CommandRegistry, COMMAND_TABLE};
pub use codec::{encode_request, write_request, CRLF};
pub use reply::{BulkReply, Reply};
pub use decoder::{ReplyDecoder, MAX_LINE_LEN, NIL_SENTINEL};
pub use printer::{Outcome, ReplyPrinter, NIL_TEXT};
