//! Protocol Module
//!
//! Defines the RRP wire format: command block encoding and response
//! block parsing.
//!
//! ## Wire Format
//!
//! Requests and responses are blocks of CRLF-terminated text lines, ended
//! by a line containing a single dot.
//!
//! ### Request Format
//! ```text
//! Add\r\n                          <- verb
//! EntityName:Domain\r\n            <- attribute lines
//! DomainName:example.com\r\n
//! NameServer:ns1.example.com\r\n
//! -Period:10\r\n                   <- option lines
//! .\r\n                            <- terminator
//! ```
//!
//! ### Response Format
//! ```text
//! 200 Command completed successfully\r\n
//! DomainName:example.com\r\n
//! .\r\n
//! ```
//!
//! The first response line is always `<code> <description>`. Attribute
//! keys may repeat; each occurrence carries another value for that key.

mod command;
mod response;

pub use command::{
    add_domain, add_name_server, check_domain, check_name_server, delete_domain,
    delete_name_server, describe, end_session, modify_domain, modify_name_server, renew_domain,
    start_session, status_domain, status_name_server, transfer_domain, ValueEdits,
};
pub use response::Response;

/// Line separator used throughout the protocol
pub const CRLF: &str = "\r\n";

/// Byte sequence that ends every protocol block
pub const TERMINATOR: &[u8] = b"\r\n.\r\n";
