//! Network Module
//!
//! The blocking transport abstraction and the RRP session built on it.
//!
//! ## Architecture
//! - One [`Transport`] per session, one request in flight at a time
//! - [`Session`] frames commands and reads until the block terminator
//! - [`TcpTransport`] is the production transport over `TcpStream`

mod session;
mod transport;

pub use session::Session;
pub use transport::{TcpTransport, Transport};
