//! RRP Session
//!
//! Owns one transport and serializes the command/response cycle: write a
//! command block, read until the block terminator appears, parse the
//! accumulated text. Establishing a session consumes the server greeting
//! before the first command can be issued.

use std::io::{self, ErrorKind};
use std::time::{Duration, Instant};

use bytes::BytesMut;

use crate::config::SessionConfig;
use crate::error::{Result, RrpError};
use crate::network::transport::{TcpTransport, Transport};
use crate::protocol::{Response, TERMINATOR};

/// Bytes requested from the transport per read. Sizing is a throughput
/// knob only; block boundaries never align with it.
const READ_CHUNK_SIZE: usize = 256;

/// A blocking RRP session over one transport
///
/// Exactly one request is in flight at a time; `submit` takes `&mut self`
/// for the full write+read round trip. Independent sessions on separate
/// threads do not share state.
#[derive(Debug)]
pub struct Session<T: Transport> {
    transport: T,

    /// Idle-read timeout; `None` blocks indefinitely
    timeout: Option<Duration>,

    /// Greeting block consumed at connection establishment
    greeting: Response,

    /// Cleared on close and on read failure
    open: bool,
}

impl Session<TcpTransport> {
    /// Connect to the configured server and consume its greeting.
    ///
    /// Fails if the host is empty, the socket cannot be established, or
    /// the greeting cannot be read within the configured timeout.
    pub fn connect(config: &SessionConfig) -> Result<Self> {
        config.validate()?;

        let transport = TcpTransport::connect(&config.host, config.port)?;
        tracing::debug!("connected to {}", transport.peer_addr());

        Self::with_transport(transport, config.timeout)
    }
}

impl<T: Transport> Session<T> {
    /// Establish a session over an already-connected transport.
    ///
    /// Performs the greeting read exactly as [`Session::connect`] does.
    /// This is the seam for driving a session over anything other than a
    /// plain TCP stream.
    pub fn with_transport(mut transport: T, timeout: Option<Duration>) -> Result<Self> {
        if timeout.is_some() {
            transport.set_read_timeout(timeout)?;
        }

        let block = receive_block(&mut transport, timeout).map_err(|source| RrpError::Greeting {
            source: Box::new(source),
        })?;

        let greeting = Response::parse(&block).map_err(|source| RrpError::Greeting {
            source: Box::new(RrpError::MalformedResponse(source)),
        })?;

        tracing::debug!(code = greeting.code(), "server greeting received");

        Ok(Self {
            transport,
            timeout,
            greeting,
            open: true,
        })
    }

    /// The greeting block the server sent on connect
    pub fn greeting(&self) -> &Response {
        &self.greeting
    }

    /// Whether the session can still issue commands
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Send one command block and receive its response.
    ///
    /// `command` must be a fully formed, dot-terminated block; the session
    /// does not validate protocol grammar on write. Blocks the calling
    /// thread for the full round trip. After a read failure the connection
    /// is considered dead and later calls fail with [`RrpError::Closed`];
    /// write, timeout and parse failures leave the session usable.
    pub fn submit(&mut self, command: &str) -> Result<Response> {
        if !self.open {
            return Err(RrpError::Closed);
        }
        if command.is_empty() {
            return Err(RrpError::InvalidArgument("command must not be empty"));
        }

        self.transport
            .write_all(command.as_bytes())
            .and_then(|_| self.transport.flush())
            .map_err(|source| RrpError::Write { source })?;
        tracing::trace!(bytes = command.len(), "command block sent");

        let block = match receive_block(&mut self.transport, self.timeout) {
            Ok(block) => block,
            Err(err) => {
                if matches!(err, RrpError::Read { .. }) {
                    self.open = false;
                }
                return Err(err);
            }
        };
        tracing::trace!(bytes = block.len(), "response block received");

        Ok(Response::parse(&block)?)
    }

    /// Release the transport. Later calls fail with [`RrpError::Closed`].
    pub fn close(&mut self) -> Result<()> {
        if !self.open {
            return Err(RrpError::Closed);
        }
        self.open = false;
        self.transport.shutdown()?;
        tracing::debug!("session closed");
        Ok(())
    }
}

/// Read chunks until the accumulated bytes end with the block terminator.
///
/// An interrupted or timed-out low-level read is not an error: with an
/// idle timeout configured, the elapsed time since the last data arrival
/// decides between resuming and failing with `Timeout`; with none, the
/// read is retried indefinitely. Any successful delivery of bytes resets
/// the idle clock, so a slow but steady stream never times out. A read
/// returning zero bytes means the peer closed mid-block and is fatal.
fn receive_block<T: Transport>(transport: &mut T, timeout: Option<Duration>) -> Result<String> {
    let mut chunk = [0u8; READ_CHUNK_SIZE];
    let mut block = BytesMut::with_capacity(READ_CHUNK_SIZE);
    let mut last_activity = Instant::now();

    loop {
        let count = match transport.read(&mut chunk) {
            Ok(0) => {
                return Err(RrpError::Read {
                    source: io::Error::new(
                        ErrorKind::UnexpectedEof,
                        "connection closed before response terminator",
                    ),
                });
            }
            Ok(count) => count,
            Err(err)
                if matches!(
                    err.kind(),
                    ErrorKind::Interrupted | ErrorKind::WouldBlock | ErrorKind::TimedOut
                ) =>
            {
                if let Some(limit) = timeout {
                    let elapsed = last_activity.elapsed();
                    if elapsed >= limit {
                        return Err(RrpError::Timeout { elapsed });
                    }
                }
                continue;
            }
            Err(source) => return Err(RrpError::Read { source }),
        };

        for &byte in &chunk[..count] {
            block.extend_from_slice(&[byte]);

            // The terminator always ends in LF, so the tail check only
            // needs to run there
            if byte == b'\n' && block.ends_with(TERMINATOR) {
                return Ok(String::from_utf8_lossy(&block).into_owned());
            }
        }

        last_activity = Instant::now();
    }
}
