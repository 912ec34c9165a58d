//! Error types for the RRP client
//!
//! Provides a unified error type for all session operations, plus the
//! parser-local [`FormatError`] it wraps.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Result type alias using RrpError
pub type Result<T> = std::result::Result<T, RrpError>;

/// Unified error type for RRP client operations
#[derive(Debug, Error)]
pub enum RrpError {
    // -------------------------------------------------------------------------
    // Argument Validation
    // -------------------------------------------------------------------------
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    // -------------------------------------------------------------------------
    // Connection Establishment
    // -------------------------------------------------------------------------
    /// Address resolution or socket establishment failed. Fatal, no retry.
    #[error("cannot connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The server greeting could not be received or parsed. The session
    /// never becomes usable after this.
    #[error("error reading server greeting: {source}")]
    Greeting {
        #[source]
        source: Box<RrpError>,
    },

    // -------------------------------------------------------------------------
    // Request/Response Cycle
    // -------------------------------------------------------------------------
    /// Write-side failure while sending a command block. The session stays
    /// usable for a subsequent call.
    #[error("error writing to socket: {source}")]
    Write {
        #[source]
        source: io::Error,
    },

    /// Read-side failure while receiving a response block, including the
    /// peer closing the stream mid-block. The connection is dead after this.
    #[error("error reading from socket: {source}")]
    Read {
        #[source]
        source: io::Error,
    },

    /// No data arrived within the configured idle-read timeout.
    #[error("read timed out after {elapsed:?}")]
    Timeout { elapsed: Duration },

    /// The received block was not a well-formed response.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] FormatError),

    /// Operation on a session that was closed or lost its connection.
    #[error("session is closed")]
    Closed,

    // -------------------------------------------------------------------------
    // Transport Housekeeping
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Parse failure for a response block.
///
/// Always surfaced to callers wrapped in [`RrpError::MalformedResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The block contained no lines at all.
    #[error("missing first line")]
    MissingStatusLine,

    /// The code segment of the first line is not a valid integer.
    #[error("missing response code")]
    MissingCode,

    /// The first line carries no description after the code.
    #[error("missing response description")]
    MissingDescription,

    /// An attribute line contained no colon and was not the terminator.
    #[error("invalid attribute line {0:?}")]
    MalformedAttribute(String),

    /// The lines ran out before the terminator was seen.
    #[error("response not terminated")]
    UnterminatedResponse,
}
