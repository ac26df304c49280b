//! Codec Tests
//!
//! Tests for request encoding.

use kvwire::protocol::{encode_request, lookup, write_request};

// =============================================================================
// Inline Requests
// =============================================================================

#[test]
fn test_encode_inline_get() {
    let spec = lookup("get").unwrap();
    let encoded = encode_request(spec, &["get", "mykey"]);
    assert_eq!(&encoded[..], b"get mykey\r\n");
}

#[test]
fn test_encode_inline_no_arguments() {
    let spec = lookup("ping").unwrap();
    let encoded = encode_request(spec, &["PING"]);
    assert_eq!(&encoded[..], b"PING\r\n");
}

#[test]
fn test_encode_inline_keeps_argument_order() {
    let spec = lookup("sinter").unwrap();
    let encoded = encode_request(spec, &["sinter", "a", "b", "c"]);
    assert_eq!(&encoded[..], b"sinter a b c\r\n");
}

// =============================================================================
// Trailing Bulk Requests
// =============================================================================

#[test]
fn test_encode_trailing_bulk_set() {
    let spec = lookup("set").unwrap();
    let encoded = encode_request(spec, &["set", "key", "value"]);
    assert_eq!(&encoded[..], b"set key 5\r\nvalue\r\n");
}

#[test]
fn test_encode_trailing_bulk_with_whitespace_and_newlines() {
    let spec = lookup("set").unwrap();
    let encoded = encode_request(spec, &["set", "k", "a b\r\nc"]);
    assert_eq!(&encoded[..], b"set k 6\r\na b\r\nc\r\n");
}

#[test]
fn test_encode_trailing_bulk_binary() {
    let spec = lookup("echo").unwrap();
    let payload: Vec<u8> = vec![0x00, 0xFF, b'\n', 0x80];
    let args: Vec<Vec<u8>> = vec![b"echo".to_vec(), payload.clone()];
    let encoded = encode_request(spec, &args);

    let mut expected = b"echo 4\r\n".to_vec();
    expected.extend_from_slice(&payload);
    expected.extend_from_slice(b"\r\n");
    assert_eq!(&encoded[..], &expected[..]);
}

#[test]
fn test_encode_trailing_bulk_empty_value() {
    let spec = lookup("set").unwrap();
    let encoded = encode_request(spec, &["set", "key", ""]);
    assert_eq!(&encoded[..], b"set key 0\r\n\r\n");
}

#[test]
fn test_encode_trailing_bulk_length_is_bytes_not_chars() {
    let spec = lookup("sadd").unwrap();
    let encoded = encode_request(spec, &["sadd", "s", "héllo"]);
    assert_eq!(&encoded[..], "sadd s 6\r\nhéllo\r\n".as_bytes());
}

// =============================================================================
// Stream Writes
// =============================================================================

#[test]
fn test_write_request_to_stream() {
    let spec = lookup("lset").unwrap();
    let mut buffer = Vec::new();
    write_request(&mut buffer, spec, &["lset", "list", "0", "new"]).unwrap();
    assert_eq!(buffer, b"lset list 0 3\r\nnew\r\n");
}
