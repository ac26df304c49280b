//! Connectors
//!
//! Seam between the dispatcher and the transport, so a request can be run
//! against anything that reads and writes bytes.

use std::io::{Read, Write};

use super::Connection;
use crate::config::Config;
use crate::error::Result;

/// Opens the stream a single request/reply exchange runs over
pub trait Connector {
    type Stream: Read + Write;

    /// Open a new stream; dropping it closes the connection
    fn connect(&self) -> Result<Self::Stream>;
}

/// Connects over TCP using a [`Config`]
#[derive(Debug, Clone)]
pub struct TcpConnector<'a> {
    config: &'a Config,
}

impl<'a> TcpConnector<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl Connector for TcpConnector<'_> {
    type Stream = Connection;

    fn connect(&self) -> Result<Connection> {
        Connection::open(self.config)
    }
}
