//! Command encoding
//!
//! Pure string builders, one per registry operation. Each returns a full
//! command block ready for [`Session::submit`](crate::Session::submit).
//! The session itself never inspects command text, so new operations only
//! need a new builder here.

use std::fmt::Display;
use std::fmt::Write as _;

use super::CRLF;

/// Edits to a repeatable attribute in a `Mod` command.
///
/// Additions encode as `Key:value`, replacements as `Key:old=new` and
/// removals as `Key:old=`.
#[derive(Debug, Clone, Default)]
pub struct ValueEdits {
    /// Values to add
    pub added: Vec<String>,
    /// `(old, new)` value replacements
    pub replaced: Vec<(String, String)>,
    /// Values to remove
    pub removed: Vec<String>,
}

impl ValueEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value
    pub fn add(mut self, value: impl Into<String>) -> Self {
        self.added.push(value.into());
        self
    }

    /// Replace `old` with `new`
    pub fn replace(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.replaced.push((old.into(), new.into()));
        self
    }

    /// Remove a value
    pub fn remove(mut self, value: impl Into<String>) -> Self {
        self.removed.push(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.replaced.is_empty() && self.removed.is_empty()
    }
}

/// Accumulates the lines of one command block
struct CommandBuilder {
    buf: String,
}

impl CommandBuilder {
    fn new(verb: &str) -> Self {
        let mut buf = String::with_capacity(64);
        buf.push_str(verb);
        buf.push_str(CRLF);
        Self { buf }
    }

    fn line(mut self, key: &str, value: impl Display) -> Self {
        // write! to a String cannot fail
        let _ = write!(self.buf, "{}:{}{}", key, value, CRLF);
        self
    }

    fn lines<S: AsRef<str>>(mut self, key: &str, values: &[S]) -> Self {
        for value in values {
            self = self.line(key, value.as_ref());
        }
        self
    }

    fn option(self, name: &str, value: impl Display) -> Self {
        let mut this = self;
        this.buf.push('-');
        this.line(name, value)
    }

    fn edits(mut self, key: &str, edits: &ValueEdits) -> Self {
        for value in &edits.added {
            self = self.line(key, value);
        }
        for (old, new) in &edits.replaced {
            self = self.line(key, format_args!("{}={}", old, new));
        }
        for value in &edits.removed {
            self = self.line(key, format_args!("{}=", value));
        }
        self
    }

    fn finish(mut self) -> String {
        self.buf.push('.');
        self.buf.push_str(CRLF);
        self.buf
    }
}

/// Authenticate the connection. Must succeed before any other operation.
///
/// `new_password` optionally rotates the registrar password.
pub fn start_session(id: &str, password: &str, new_password: Option<&str>) -> String {
    let mut cmd = CommandBuilder::new("Session")
        .option("Id", id)
        .option("Password", password);
    if let Some(new_password) = new_password {
        cmd = cmd.option("NewPassword", new_password);
    }
    cmd.finish()
}

/// Close the session on the server side
pub fn end_session() -> String {
    CommandBuilder::new("Quit").finish()
}

/// Register a domain name, optionally naming the servers hosting it and an
/// explicit registration period in years.
pub fn add_domain<S: AsRef<str>>(
    domain: &str,
    name_servers: &[S],
    period: Option<u32>,
) -> String {
    let mut cmd = CommandBuilder::new("Add")
        .line("EntityName", "Domain")
        .line("DomainName", domain)
        .lines("NameServer", name_servers);
    if let Some(period) = period {
        cmd = cmd.option("Period", period);
    }
    cmd.finish()
}

/// Register a name server with one or more IP addresses
pub fn add_name_server<S: AsRef<str>>(host: &str, ip_addresses: &[S]) -> String {
    CommandBuilder::new("Add")
        .line("EntityName", "NameServer")
        .line("NameServer", host)
        .lines("IPAddress", ip_addresses)
        .finish()
}

/// Check the availability of a domain name
pub fn check_domain(domain: &str) -> String {
    CommandBuilder::new("Check")
        .line("EntityName", "Domain")
        .line("DomainName", domain)
        .finish()
}

/// Check the availability of a name server host name
pub fn check_name_server(host: &str) -> String {
    CommandBuilder::new("Check")
        .line("EntityName", "NameServer")
        .line("NameServer", host)
        .finish()
}

/// Delete a domain registration
pub fn delete_domain(domain: &str) -> String {
    CommandBuilder::new("Del")
        .line("EntityName", "Domain")
        .line("DomainName", domain)
        .finish()
}

/// Delete a name server registration
pub fn delete_name_server(host: &str) -> String {
    CommandBuilder::new("Del")
        .line("EntityName", "NameServer")
        .line("NameServer", host)
        .finish()
}

/// Ask the server about itself. `target` defaults to protocol information
/// when absent.
pub fn describe(target: Option<&str>) -> String {
    let mut cmd = CommandBuilder::new("Describe");
    if let Some(target) = target {
        cmd = cmd.option("Target", target);
    }
    cmd.finish()
}

/// Update a registered domain's name servers and statuses
pub fn modify_domain(domain: &str, name_servers: &ValueEdits, statuses: &ValueEdits) -> String {
    CommandBuilder::new("Mod")
        .line("EntityName", "Domain")
        .line("DomainName", domain)
        .edits("NameServer", name_servers)
        .edits("Status", statuses)
        .finish()
}

/// Update a registered name server, optionally renaming it
pub fn modify_name_server(
    host: &str,
    new_host: Option<&str>,
    ip_addresses: &ValueEdits,
) -> String {
    let mut cmd = CommandBuilder::new("Mod")
        .line("EntityName", "NameServer")
        .line("NameServer", host);
    if let Some(new_host) = new_host {
        cmd = cmd.line("NewNameServer", new_host);
    }
    cmd.edits("IPAddress", ip_addresses).finish()
}

/// Renew a domain registration, optionally for an explicit period in years
/// anchored at the given current expiration year.
pub fn renew_domain(
    domain: &str,
    period: Option<u32>,
    current_expiration_year: Option<u32>,
) -> String {
    let mut cmd = CommandBuilder::new("Renew")
        .line("EntityName", "Domain")
        .line("DomainName", domain);
    if let Some(period) = period {
        cmd = cmd.option("Period", period);
    }
    if let Some(year) = current_expiration_year {
        cmd = cmd.option("CurrentExpirationYear", year);
    }
    cmd.finish()
}

/// Query everything the registry records about a domain
pub fn status_domain(domain: &str) -> String {
    CommandBuilder::new("Status")
        .line("EntityName", "Domain")
        .line("DomainName", domain)
        .finish()
}

/// Query everything the registry records about a name server
pub fn status_name_server(host: &str) -> String {
    CommandBuilder::new("Status")
        .line("EntityName", "NameServer")
        .line("NameServer", host)
        .finish()
}

/// Request a domain transfer to this registrar, or answer a pending
/// transfer request with `approve`.
pub fn transfer_domain(domain: &str, approve: Option<bool>) -> String {
    let mut cmd = CommandBuilder::new("Transfer").line("EntityName", "Domain");
    if let Some(approve) = approve {
        cmd = cmd.option("Approve", if approve { "Yes" } else { "No" });
    }
    cmd.line("DomainName", domain).finish()
}
