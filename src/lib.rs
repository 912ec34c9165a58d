//! # rrp-client
//!
//! A client for the Registry-Registrar Protocol (RRP): the line-delimited,
//! text-based request/response protocol registrars use to manage domain
//! name and name server registrations over a persistent TCP connection.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐  command text   ┌──────────────────────────────┐
//! │   Command    │ ──────────────▶ │           Session            │
//! │   Encoders   │                 │  write block / read until    │
//! └──────────────┘                 │  \r\n.\r\n / idle timeout    │
//!                                  └──────────────┬───────────────┘
//! ┌──────────────┐   raw block                    │
//! │   Response   │ ◀──────────────────────────────┤
//! │   Parser     │                        ┌───────▼───────┐
//! └──────┬───────┘                        │   Transport   │
//!        │ Response                       │  (TcpStream)  │
//!        ▼ to caller                      └───────────────┘
//! ```
//!
//! The protocol is strictly half-duplex: one command in flight per
//! session, each response paired with the command that produced it.
//!
//! ## Example
//!
//! ```no_run
//! use rrp_client::{protocol, Session, SessionConfig};
//!
//! # fn main() -> rrp_client::Result<()> {
//! let config = SessionConfig::new("registry.example.net", 648).timeout_secs(30);
//! let mut session = Session::connect(&config)?;
//!
//! session.submit(&protocol::start_session("registrarId", "secret", None))?;
//! let response = session.submit(&protocol::check_domain("example.com"))?;
//! println!("{} {}", response.code(), response.description());
//!
//! session.submit(&protocol::end_session())?;
//! session.close()?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod network;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::SessionConfig;
pub use error::{FormatError, Result, RrpError};
pub use network::{Session, TcpTransport, Transport};
pub use protocol::{Response, ValueEdits};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rrp-client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
