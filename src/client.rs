//! A blocking DNS over UDP transport.
//!
//! This is the minimal transport needed to get a query to a resolver and
//! its response back: one datagram out, one datagram in. There are no
//! retries and no fallback to TCP; a response with the TC flag set is
//! returned as is.

use core::{cmp, fmt};
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::sync::Arc;
use std::time::Duration;
use std::vec::Vec;
use tracing::{debug, warn};

//------------ Configuration Constants ----------------------------------------

/// The resolver queried if nothing else is configured.
pub const DEF_SERVER: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(Ipv4Addr::new(208, 67, 222, 222)),
    53,
);

/// Configuration limits for the size of the receive buffer.
const RECV_SIZE: DefMinMax<usize> = DefMinMax::new(1024, 512, 65535);

/// The default read timeout.
const DEF_READ_TIMEOUT: Duration = Duration::from_secs(5);

//------------ Config ---------------------------------------------------------

/// Configuration for a UDP transport.
#[derive(Clone, Debug)]
pub struct Config {
    /// The address of the resolver.
    server: SocketAddr,

    /// Read timeout, or `None` to wait forever.
    read_timeout: Option<Duration>,

    /// The size of the buffer a response is received into.
    recv_size: usize,
}

impl Config {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a new config with default values for the given server.
    pub fn with_server(server: SocketAddr) -> Self {
        Config {
            server,
            ..Default::default()
        }
    }

    /// Returns the address of the resolver.
    pub fn server(&self) -> SocketAddr {
        self.server
    }

    /// Sets the address of the resolver.
    pub fn set_server(&mut self, server: SocketAddr) {
        self.server = server
    }

    /// Returns the read timeout.
    ///
    /// The read timeout is the maximum amount of time to wait for a
    /// response after the request was sent. If it is `None`, the transport
    /// waits forever.
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    /// Sets the read timeout.
    ///
    /// A zero duration is the same as `None`.
    pub fn set_read_timeout(&mut self, value: Option<Duration>) {
        self.read_timeout = value.filter(|value| !value.is_zero())
    }

    /// Returns the size of the receive buffer.
    ///
    /// Any part of a response beyond this size is lost.
    pub fn recv_size(&self) -> usize {
        self.recv_size
    }

    /// Sets the size of the receive buffer.
    ///
    /// If this value is too small or too large, it will be caped.
    pub fn set_recv_size(&mut self, value: usize) {
        self.recv_size = RECV_SIZE.limit(value)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: DEF_SERVER,
            read_timeout: Some(DEF_READ_TIMEOUT),
            recv_size: RECV_SIZE.default(),
        }
    }
}

//------------ Connection -----------------------------------------------------

/// A UDP transport to a single resolver.
#[derive(Clone, Debug)]
pub struct Connection {
    config: Config,
}

impl Connection {
    /// Creates a new transport with default configuration.
    pub fn new(server: SocketAddr) -> Self {
        Self::with_config(Config::with_server(server))
    }

    /// Creates a new transport with the given configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends a request and waits for the response.
    ///
    /// The request has to be a complete DNS message. The first datagram
    /// received from the server is returned as the response without looking
    /// at it. Datagrams from other addresses are ignored.
    pub fn request(&self, request: &[u8]) -> Result<Vec<u8>, Error> {
        let server = self.config.server;
        let local: SocketAddr = if server.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let sock = UdpSocket::bind(local).map_err(Error::udp_bind)?;
        sock.set_read_timeout(self.config.read_timeout)
            .map_err(Error::udp_config)?;

        let sent = sock.send_to(request, server).map_err(Error::udp_send)?;
        if sent != request.len() {
            return Err(Error::ShortSend);
        }
        debug!(%server, len = sent, "sent request");

        let mut buf = vec![0u8; self.config.recv_size];
        loop {
            let (len, from) = match sock.recv_from(&mut buf) {
                Ok(res) => res,
                Err(err)
                    if matches!(
                        err.kind(),
                        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
                    ) =>
                {
                    return Err(Error::Timeout)
                }
                Err(err) => return Err(Error::udp_receive(err)),
            };
            if from != server {
                warn!(%from, %server, "ignoring datagram from unexpected source");
                continue;
            }
            debug!(%from, len, "received response");
            buf.truncate(len);
            return Ok(buf);
        }
    }
}

//------------ Error ----------------------------------------------------------

/// Error type for the UDP transport.
#[derive(Clone, Debug)]
pub enum Error {
    /// Binding a UDP socket gave an error.
    UdpBind(Arc<io::Error>),

    /// UDP configuration error.
    UdpConfig(Arc<io::Error>),

    /// Sending over a UDP socket gave an error.
    UdpSend(Arc<io::Error>),

    /// Receiving from a UDP socket gave an error.
    UdpReceive(Arc<io::Error>),

    /// The request was sent only partially.
    ShortSend,

    /// No response arrived within the read timeout.
    Timeout,
}

impl Error {
    fn udp_bind(err: io::Error) -> Self {
        Error::UdpBind(Arc::new(err))
    }

    fn udp_config(err: io::Error) -> Self {
        Error::UdpConfig(Arc::new(err))
    }

    fn udp_send(err: io::Error) -> Self {
        Error::UdpSend(Arc::new(err))
    }

    fn udp_receive(err: io::Error) -> Self {
        Error::UdpReceive(Arc::new(err))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UdpBind(err) => write!(f, "error binding UDP socket: {}", err),
            Error::UdpConfig(err) => {
                write!(f, "error configuring UDP socket: {}", err)
            }
            Error::UdpSend(err) => write!(f, "error sending request: {}", err),
            Error::UdpReceive(err) => {
                write!(f, "error receiving response: {}", err)
            }
            Error::ShortSend => f.write_str("request was sent partially"),
            Error::Timeout => f.write_str("timeout waiting for response"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::UdpBind(err)
            | Error::UdpConfig(err)
            | Error::UdpSend(err)
            | Error::UdpReceive(err) => Some(err.as_ref()),
            Error::ShortSend | Error::Timeout => None,
        }
    }
}

//------------ DefMinMax ------------------------------------------------------

/// The default, minimum, and maximum values for a config variable.
#[derive(Clone, Copy)]
struct DefMinMax<T> {
    def: T,
    min: T,
    max: T,
}

impl<T> DefMinMax<T> {
    const fn new(def: T, min: T, max: T) -> Self {
        Self { def, min, max }
    }

    fn default(self) -> T {
        self.def
    }

    fn limit(self, value: T) -> T
    where
        T: Ord,
    {
        cmp::max(self.min, cmp::min(self.max, value))
    }
}

//============ Testing ========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn config() {
        let mut config = Config::new();
        assert_eq!(config.server(), "208.67.222.222:53".parse().unwrap());
        assert_eq!(config.read_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.recv_size(), 1024);

        config.set_recv_size(10);
        assert_eq!(config.recv_size(), 512);
        config.set_recv_size(4096);
        assert_eq!(config.recv_size(), 4096);
        config.set_recv_size(1_000_000);
        assert_eq!(config.recv_size(), 65535);

        config.set_read_timeout(Some(Duration::ZERO));
        assert_eq!(config.read_timeout(), None);
    }

    #[test]
    fn request_and_response() {
        let server = UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = server.local_addr().unwrap();
        let handle = std::thread::spawn(move || {
            let mut buf = [0u8; 512];
            let (len, from) = server.recv_from(&mut buf).unwrap();
            let mut response = buf[..len].to_vec();
            response[2] |= 0x80;
            server.send_to(&response, from).unwrap();
        });

        let mut config = Config::with_server(addr);
        config.set_read_timeout(Some(Duration::from_secs(5)));
        let conn = Connection::with_config(config);
        let response = conn.request(b"\x12\x34\x01\x00request").unwrap();
        assert_eq!(response, b"\x12\x34\x81\x00request");
        handle.join().unwrap();
    }

    #[test]
    fn timeout() {
        // Nobody answers on this socket.
        let server = UdpSocket::bind("127.0.0.1:0").unwrap();
        let mut config = Config::with_server(server.local_addr().unwrap());
        config.set_read_timeout(Some(Duration::from_millis(50)));
        let conn = Connection::with_config(config);
        assert!(matches!(conn.request(b"\x00\x00"), Err(Error::Timeout)));
    }
}
