//! Protocol Tests
//!
//! Registry lookups, request encoding, reply decoding and printing.

mod codec_tests;
mod printer_tests;
