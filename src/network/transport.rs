//! Transport abstraction
//!
//! A session talks to the registry through a connected bidirectional byte
//! stream. The trait keeps the session testable against scripted streams
//! and swappable onto a TLS-wrapped socket without touching the framing
//! logic.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use crate::error::{Result, RrpError};

/// A connected byte stream a [`Session`](crate::Session) can drive
pub trait Transport: Read + Write {
    /// Cap the time a single read may block. `None` blocks indefinitely.
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()>;

    /// Close both directions of the stream
    fn shutdown(&mut self) -> io::Result<()>;
}

/// TCP transport over `std::net::TcpStream`
#[derive(Debug)]
pub struct TcpTransport {
    stream: TcpStream,

    /// Peer address for logging
    peer_addr: String,
}

impl TcpTransport {
    /// Resolve `host:port` and connect.
    ///
    /// Disables Nagle's algorithm; command blocks are small and the
    /// protocol is strictly request/response.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let addr = format!("{}:{}", host, port);

        let stream = TcpStream::connect((host, port)).map_err(|source| RrpError::Connect {
            addr: addr.clone(),
            source,
        })?;
        stream.set_nodelay(true).map_err(|source| RrpError::Connect {
            addr: addr.clone(),
            source,
        })?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        Ok(Self { stream, peer_addr })
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Read for TcpTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl Write for TcpTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

impl Transport for TcpTransport {
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        self.stream.set_read_timeout(timeout)
    }

    fn shutdown(&mut self) -> io::Result<()> {
        self.stream.shutdown(Shutdown::Both)
    }
}
