//! Printer Tests
//!
//! Tests for the textual output of each reply shape.

use bytes::Bytes;
use kvwire::protocol::{BulkReply, Outcome, Reply, ReplyPrinter};

// =============================================================================
// Helper Functions
// =============================================================================

fn render(reply: &Reply, interactive: bool) -> (String, Outcome) {
    let mut out = Vec::new();
    let outcome = ReplyPrinter::new(&mut out, interactive).print(reply).unwrap();
    (String::from_utf8(out).unwrap(), outcome)
}

// =============================================================================
// Inline Replies
// =============================================================================

#[test]
fn test_print_single_line() {
    let (out, outcome) = render(&Reply::SingleLine(Bytes::from_static(b"list")), false);
    assert_eq!(out, "list\n");
    assert_eq!(outcome, Outcome::Success);
}

#[test]
fn test_print_single_line_writes_raw_bytes() {
    let mut out = Vec::new();
    let reply = Reply::SingleLine(Bytes::from_static(b"k\xff\xfey"));
    let outcome = ReplyPrinter::new(&mut out, false).print(&reply).unwrap();

    assert_eq!(out, b"k\xff\xfey\n");
    assert_eq!(outcome, Outcome::Success);
}

#[test]
fn test_print_status_keeps_marker() {
    let (out, outcome) = render(&Reply::Status(Bytes::from_static(b"+OK")), false);
    assert_eq!(out, "+OK\n");
    assert_eq!(outcome, Outcome::Success);

    let (out, outcome) = render(&Reply::Status(Bytes::from_static(b"-ERR bad")), false);
    assert_eq!(out, "-ERR bad\n");
    assert_eq!(outcome, Outcome::Failure);
}

#[test]
fn test_print_integer() {
    let reply = Reply::Integer {
        line: Bytes::from_static(b"-1"),
        value: Some(-1),
    };
    let (out, outcome) = render(&reply, false);
    assert_eq!(out, "-1\n");
    assert_eq!(outcome, Outcome::Failure);
    assert_eq!(outcome.exit_code(), 1);

    let reply = Reply::Integer {
        line: Bytes::from_static(b"0"),
        value: Some(0),
    };
    let (out, outcome) = render(&reply, false);
    assert_eq!(out, "0\n");
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(outcome.exit_code(), 0);
}

// =============================================================================
// Bulk Replies
// =============================================================================

#[test]
fn test_print_bulk_not_interactive() {
    let (out, outcome) = render(&Reply::Bulk(BulkReply::value(&b"hello"[..])), false);
    assert_eq!(out, "hello");
    assert!(outcome.is_success());
}

#[test]
fn test_print_bulk_interactive_adds_newline() {
    let (out, _) = render(&Reply::Bulk(BulkReply::value(&b"hello"[..])), true);
    assert_eq!(out, "hello\n");

    let (out, _) = render(&Reply::Bulk(BulkReply::value(&b"hello\n"[..])), true);
    assert_eq!(out, "hello\n");

    let (out, _) = render(&Reply::Bulk(BulkReply::value(Vec::new())), true);
    assert_eq!(out, "\n");
}

#[test]
fn test_print_bulk_nil() {
    let (out, outcome) = render(&Reply::Bulk(BulkReply::nil()), false);
    assert_eq!(out, "(nil)\n");
    assert_eq!(outcome, Outcome::Success);
}

#[test]
fn test_print_bulk_error() {
    let (out, outcome) = render(&Reply::Bulk(BulkReply::error(&b"ERR wrong type"[..])), false);
    assert_eq!(out, "ERR wrong type");
    assert_eq!(outcome, Outcome::Failure);
}

// =============================================================================
// Multi-Bulk Replies
// =============================================================================

#[test]
fn test_print_multi_bulk() {
    let reply = Reply::MultiBulk(Some(vec![
        BulkReply::value(&b"foo"[..]),
        BulkReply::value(&b"bar"[..]),
    ]));
    let (out, outcome) = render(&reply, true);
    assert_eq!(out, "1. foo\n2. bar\n");
    assert_eq!(outcome, Outcome::Success);
}

#[test]
fn test_print_multi_bulk_nil_and_nested_nil() {
    let (out, outcome) = render(&Reply::MultiBulk(None), false);
    assert_eq!(out, "(nil)\n");
    assert_eq!(outcome, Outcome::Success);

    let reply = Reply::MultiBulk(Some(vec![BulkReply::nil(), BulkReply::value(&b"x"[..])]));
    let (out, _) = render(&reply, false);
    assert_eq!(out, "1. (nil)\n2. x\n");
}

#[test]
fn test_print_multi_bulk_empty() {
    let (out, outcome) = render(&Reply::MultiBulk(Some(Vec::new())), false);
    assert_eq!(out, "");
    assert_eq!(outcome, Outcome::Success);
}

#[test]
fn test_print_multi_bulk_error_element() {
    let reply = Reply::MultiBulk(Some(vec![
        BulkReply::value(&b"foo"[..]),
        BulkReply::error(&b"ERR"[..]),
    ]));
    let (out, outcome) = render(&reply, false);
    assert_eq!(out, "1. foo\n2. ERR");
    assert_eq!(outcome, Outcome::Failure);
}
