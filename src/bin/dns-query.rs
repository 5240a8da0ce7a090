//! Sends a single query to a resolver and prints the response.
use clap::Parser;
use dnsmsg::base::name::MAX_NAME_LEN;
use dnsmsg::base::{Header, HexDump};
use dnsmsg::client::{Config, Connection, DEF_SERVER};
use dnsmsg::logging::init_logging;
use dnsmsg::{decode_message, encode_query, QueryType};
use std::net::SocketAddr;
use std::process::ExitCode;
use std::time::Duration;
use tracing::warn;

/// Arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The host name to query for.
    #[arg(value_parser = parse_hostname)]
    hostname: String,

    /// The record type to query for: a, aaaa, mx, txt, or any.
    #[arg(value_name = "TYPE")]
    qtype: QueryType,

    /// The resolver to send the query to.
    #[arg(long, default_value_t = DEF_SERVER)]
    server: SocketAddr,

    /// Seconds to wait for the response, 0 to wait forever.
    #[arg(long, default_value_t = 5)]
    timeout: u64,

    /// Size of the buffer the response is received into.
    #[arg(long, default_value_t = 1024)]
    bufsize: usize,

    /// Transaction ID of the query; random if not given.
    #[arg(long)]
    id: Option<u16>,

    /// Print the query before sending it.
    #[arg(long)]
    show_query: bool,

    /// Print every octet of the messages.
    #[arg(long)]
    raw: bool,
}

fn parse_hostname(s: &str) -> Result<String, String> {
    if s.len() > MAX_NAME_LEN {
        Err(format!("host name longer than {} characters", MAX_NAME_LEN))
    } else {
        Ok(s.into())
    }
}

fn random_id() -> u16 {
    let mut header = Header::new();
    header.set_random_id();
    header.id()
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let id = args.id.unwrap_or_else(random_id);
    let query = match encode_query(id, &args.hostname, args.qtype) {
        Ok(query) => query,
        Err(err) => {
            eprintln!("Cannot build query for {}: {}", args.hostname, err);
            return ExitCode::FAILURE;
        }
    };
    let sent = match decode_message(&query) {
        Ok(msg) => msg,
        Err(err) => {
            eprintln!("Built a broken query: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if args.show_query {
        println!("Query ({} bytes):", query.len());
        if args.raw {
            print!("{}", HexDump(&query));
        }
        println!("{}", sent.display_dig_style());
    }

    let mut config = Config::with_server(args.server);
    config.set_read_timeout(Some(Duration::from_secs(args.timeout)));
    config.set_recv_size(args.bufsize);
    let conn = Connection::with_config(config);

    let response = match conn.request(&query) {
        Ok(response) => response,
        Err(err) => {
            eprintln!("Query to {} failed: {}", args.server, err);
            return ExitCode::FAILURE;
        }
    };
    println!("Received {} bytes from {}.", response.len(), args.server);
    if args.raw {
        print!("{}", HexDump(&response));
    }

    let msg = match decode_message(&response) {
        Ok(msg) => msg,
        Err(err) => {
            eprintln!("Malformed response: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if !msg.is_answer(&sent) {
        warn!(
            id = msg.header().id(),
            expected = id,
            "response does not match the query"
        );
    }
    if msg.header().tc() {
        warn!("response has the TC flag set and may be incomplete");
    }
    println!("{}", msg.display_dig_style());
    ExitCode::SUCCESS
}
