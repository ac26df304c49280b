//! Dispatcher Module
//!
//! Runs one command end to end.
//!
//! ## Responsibilities
//! - Resolve the command spec and validate the argument count
//! - Open the connection only once the request is known to be valid
//! - Write the request, decode the reply and print it as it arrives
//! - Close the connection on every path after it was opened
//! - Map the result to a process exit status

use std::io::{BufReader, Write};

use crate::config::Config;
use crate::error::{KvError, Result};
use crate::network::{Connector, TcpConnector};
use crate::protocol::{write_request, CommandRegistry, Outcome, ReplyDecoder, ReplyPrinter};

/// Executes single commands against a server
pub struct Dispatcher<'r, C> {
    /// Command table used for lookups
    registry: &'r CommandRegistry,

    /// Opens the connection for each command
    connector: C,

    /// Largest bulk payload accepted from the server
    max_bulk_len: u64,

    /// Standard output is an interactive terminal
    interactive: bool,
}

impl<'a> Dispatcher<'static, TcpConnector<'a>> {
    /// Dispatcher talking TCP to the configured server
    pub fn tcp(config: &'a Config) -> Self {
        Dispatcher::new(TcpConnector::new(config), config)
    }
}

impl<C: Connector> Dispatcher<'static, C> {
    /// Create a dispatcher over the built-in command table
    pub fn new(connector: C, config: &Config) -> Self {
        Self::with_registry(CommandRegistry::global(), connector, config)
    }
}

impl<'r, C: Connector> Dispatcher<'r, C> {
    /// Create a dispatcher over a custom command table
    pub fn with_registry(registry: &'r CommandRegistry, connector: C, config: &Config) -> Self {
        Self {
            registry,
            connector,
            max_bulk_len: config.max_bulk_len,
            interactive: false,
        }
    }

    /// Mark the output as an interactive terminal
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Execute one command, printing the reply to `out`
    ///
    /// `args[0]` is the command name. Server-signalled failures come back as
    /// `Ok(Outcome::Failure)`; local and transport failures as `Err`.
    pub fn execute<A, W>(&self, args: &[A], out: W) -> Result<Outcome>
    where
        A: AsRef<[u8]>,
        W: Write,
    {
        // Step 1: Resolve the command
        let name = args
            .first()
            .map(|arg| String::from_utf8_lossy(arg.as_ref()).into_owned())
            .ok_or_else(|| KvError::Usage("no command given".to_string()))?;
        let spec = self.registry.lookup(&name)?;

        // Step 2: Validate the argument count before touching the network
        spec.check_arity(args.len())?;

        // Step 3: Open the connection; it is closed when `decoder` is dropped
        let mut stream = self.connector.connect()?;

        // Step 4: Send the request
        write_request(&mut stream, spec, args)?;

        // Step 5: Decode the reply from the same connection, printing as it
        // arrives; output already received survives a read failure
        let mut decoder = ReplyDecoder::with_max_bulk_len(BufReader::new(stream), self.max_bulk_len);
        let mut printer = ReplyPrinter::new(out, self.interactive);
        let decoded = decoder.decode_into(spec.reply_kind, &mut printer);
        drop(decoder);

        // Step 6: Flush partial output before reporting a failure
        printer.flush()?;
        let outcome = decoded?;
        tracing::debug!(command = spec.name, ?outcome, "Command finished");
        Ok(outcome)
    }

    /// Execute one command and return the process exit status
    ///
    /// Errors are reported on `err`.
    pub fn run<A, W, E>(&self, args: &[A], out: W, mut err: E) -> i32
    where
        A: AsRef<[u8]>,
        W: Write,
        E: Write,
    {
        match self.execute(args, out) {
            Ok(outcome) => outcome.exit_code(),
            Err(e) => {
                if e.is_local() {
                    tracing::debug!("Rejected before connecting: {}", e);
                } else if e.is_read_failure() {
                    tracing::warn!("Read failure: {}", e);
                }
                let _ = writeln!(err, "{}", e);
                Outcome::Failure.exit_code()
            }
        }
    }
}
