//! kvwire CLI Client
//!
//! Sends one command to the server and prints the reply.
//!
//! ```text
//! kvwire-cli [-h host] [-p port] cmd arg1 arg2 ... argN
//! echo "argN" | kvwire-cli [-h host] [-p port] cmd arg1 ... arg(N-1)
//! ```

use std::ffi::OsString;
use std::io::{self, IsTerminal, Read};
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use kvwire::config::{DEFAULT_HOST, DEFAULT_MAX_BULK_LEN, DEFAULT_PORT};
use kvwire::{Config, Dispatcher};
use tracing_subscriber::{fmt, EnvFilter};

/// kvwire CLI
#[derive(Parser, Debug)]
#[command(name = "kvwire-cli")]
#[command(about = "One-shot client for the kvwire key-value protocol")]
#[command(version)]
#[command(disable_help_flag = true)]
struct Args {
    /// Server host
    #[arg(short = 'h', long, default_value = DEFAULT_HOST)]
    host: String,

    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Connect/read/write timeout in milliseconds (0 = wait forever)
    #[arg(long, default_value_t = 0)]
    timeout: u64,

    /// Largest bulk reply accepted, in bytes
    #[arg(long = "max-bulk", default_value_t = DEFAULT_MAX_BULK_LEN)]
    max_bulk: u64,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,

    /// Command name followed by its arguments
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    command: Vec<OsString>,
}

const USAGE: &str = "\
usage: kvwire-cli [-h host] [-p port] cmd arg1 arg2 arg3 ... argN
usage: echo \"argN\" | kvwire-cli [-h host] [-p port] cmd arg1 arg2 ... arg(N-1)
example: cat /etc/passwd | kvwire-cli set my_passwd
example: kvwire-cli get my_passwd";

fn main() {
    // Logs go to stderr; stdout carries only reply output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(1),
            }
        }
    };

    // Build config from args
    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .timeout_ms(args.timeout)
        .max_bulk_len(args.max_bulk)
        .build();

    tracing::debug!("Server address: {}", config.addr());

    let mut request: Vec<Vec<u8>> = args
        .command
        .into_iter()
        .map(OsString::into_encoded_bytes)
        .collect();

    // Piped standard input becomes the last argument
    if !io::stdin().is_terminal() {
        match read_stdin_arg() {
            Ok(arg) => request.push(arg),
            Err(e) => {
                eprintln!("Reading from standard input: {}", e);
                process::exit(1);
            }
        }
    }

    if request.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let dispatcher = Dispatcher::tcp(&config).interactive(io::stdout().is_terminal());
    let code = dispatcher.run(&request, io::stdout().lock(), io::stderr());
    process::exit(code);
}

/// Read all of standard input as one argument
fn read_stdin_arg() -> io::Result<Vec<u8>> {
    let mut arg = Vec::new();
    io::stdin().lock().read_to_end(&mut arg)?;
    Ok(arg)
}
