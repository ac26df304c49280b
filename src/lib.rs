//! # kvwire
//!
//! A one-shot client for a line-and-length-prefixed key-value protocol:
//! - Command registry mapping names to arity and wire framing
//! - Request encoder with binary-safe trailing bulk arguments
//! - Reply decoder for five reply shapes
//! - Exactly one request and one reply per invocation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CLI (kvwire-cli)                         │
//! │            flags, stdin argument, exit status                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ args
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Dispatcher                              │
//! │        lookup → arity → connect → write → decode             │
//! └──────┬──────────────┬──────────────────┬────────────────────┘
//!        │              │                  │
//!        ▼              ▼                  ▼
//!   ┌──────────┐  ┌─────────────┐   ┌──────────────┐
//!   │ Registry │  │   Encoder   │   │   Decoder    │
//!   │ (static) │  │ (codec.rs)  │   │ + Printer    │
//!   └──────────┘  └──────┬──────┘   └──────▲───────┘
//!                        │                 │
//!                        ▼                 │
//!                  ┌─────────────────────────────┐
//!                  │   Connection (TcpStream)     │
//!                  └─────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod dispatcher;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use dispatcher::Dispatcher;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
