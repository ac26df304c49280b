//! Network Module
//!
//! Client side TCP transport.
//!
//! ## Lifecycle
//! - Resolve `host:port`, connect to the first address that answers
//! - Exactly one request written, one reply read
//! - Stream closed when the [`Connection`] is dropped

mod connection;
mod connector;

pub use connection::Connection;
pub use connector::{Connector, TcpConnector};
