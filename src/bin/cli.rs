//! RRP CLI Client
//!
//! Command-line client for issuing registry operations against an RRP
//! server: authenticates a session, runs one operation, prints the parsed
//! response and quits.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use rrp_client::protocol;
use rrp_client::{Response, RrpError, Session, SessionConfig, ValueEdits};

/// RRP CLI
#[derive(Parser, Debug)]
#[command(name = "rrp-cli")]
#[command(about = "Command-line client for the Registry-Registrar Protocol")]
#[command(version)]
struct Args {
    /// RRP server hostname
    #[arg(short, long, default_value = "localhost")]
    server: String,

    /// RRP server port
    #[arg(short, long, default_value = "648")]
    port: u16,

    /// Idle-read timeout in seconds (0 disables)
    #[arg(short, long, default_value = "30")]
    timeout: u64,

    /// Registrar ID used to authenticate
    #[arg(long)]
    id: String,

    /// Registrar password
    #[arg(long)]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the availability of a domain name
    CheckDomain {
        /// Fully qualified domain name
        domain: String,
    },

    /// Register a domain name
    AddDomain {
        /// Fully qualified domain name
        domain: String,

        /// Name server hosting the domain (repeatable)
        #[arg(short, long = "name-server")]
        name_servers: Vec<String>,

        /// Registration period in years
        #[arg(long)]
        period: Option<u32>,
    },

    /// Query a domain name
    StatusDomain {
        /// Fully qualified domain name
        domain: String,
    },

    /// Renew a domain registration
    RenewDomain {
        /// Fully qualified domain name
        domain: String,

        /// Renewal period in years
        #[arg(long)]
        period: Option<u32>,

        /// Current expiration year the renewal starts from
        #[arg(long)]
        expiration_year: Option<u32>,
    },

    /// Update a domain's name servers and statuses
    ModDomain {
        /// Fully qualified domain name
        domain: String,

        /// Name server to add (repeatable)
        #[arg(long = "add-ns")]
        add_ns: Vec<String>,

        /// Name server replacement as old=new (repeatable)
        #[arg(long = "replace-ns", value_parser = parse_pair)]
        replace_ns: Vec<(String, String)>,

        /// Name server to remove (repeatable)
        #[arg(long = "remove-ns")]
        remove_ns: Vec<String>,

        /// Status to add (repeatable)
        #[arg(long = "add-status")]
        add_status: Vec<String>,

        /// Status replacement as old=new (repeatable)
        #[arg(long = "replace-status", value_parser = parse_pair)]
        replace_status: Vec<(String, String)>,

        /// Status to remove (repeatable)
        #[arg(long = "remove-status")]
        remove_status: Vec<String>,
    },

    /// Transfer a domain to this registrar, or answer a pending transfer
    TransferDomain {
        /// Fully qualified domain name
        domain: String,

        /// Approve or deny a pending transfer instead of requesting one
        #[arg(long)]
        approve: Option<bool>,
    },

    /// Delete a domain registration
    DelDomain {
        /// Fully qualified domain name
        domain: String,
    },

    /// Register a name server
    AddNameServer {
        /// Fully qualified host name
        host: String,

        /// IP address of the name server (repeatable)
        #[arg(short, long = "ip")]
        ips: Vec<String>,
    },

    /// Check the availability of a name server
    CheckNameServer {
        /// Fully qualified host name
        host: String,
    },

    /// Query a name server
    StatusNameServer {
        /// Fully qualified host name
        host: String,
    },

    /// Update a name server's addresses, optionally renaming it
    ModNameServer {
        /// Fully qualified host name
        host: String,

        /// New host name
        #[arg(long)]
        rename: Option<String>,

        /// IP address to add (repeatable)
        #[arg(long = "add-ip")]
        add_ip: Vec<String>,

        /// IP address replacement as old=new (repeatable)
        #[arg(long = "replace-ip", value_parser = parse_pair)]
        replace_ip: Vec<(String, String)>,

        /// IP address to remove (repeatable)
        #[arg(long = "remove-ip")]
        remove_ip: Vec<String>,
    },

    /// Delete a name server registration
    DelNameServer {
        /// Fully qualified host name
        host: String,
    },

    /// Ask the server to describe itself
    Describe {
        /// Information to ask for, defaults to protocol details
        #[arg(long)]
        target: Option<String>,
    },
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(old, new)| (old.to_string(), new.to_string()))
        .ok_or_else(|| format!("expected old=new, got {:?}", raw))
}

fn edits(add: Vec<String>, replace: Vec<(String, String)>, remove: Vec<String>) -> ValueEdits {
    ValueEdits {
        added: add,
        replaced: replace,
        removed: remove,
    }
}

fn build_command(command: &Commands) -> String {
    match command {
        Commands::CheckDomain { domain } => protocol::check_domain(domain),
        Commands::AddDomain {
            domain,
            name_servers,
            period,
        } => protocol::add_domain(domain, name_servers, *period),
        Commands::StatusDomain { domain } => protocol::status_domain(domain),
        Commands::RenewDomain {
            domain,
            period,
            expiration_year,
        } => protocol::renew_domain(domain, *period, *expiration_year),
        Commands::ModDomain {
            domain,
            add_ns,
            replace_ns,
            remove_ns,
            add_status,
            replace_status,
            remove_status,
        } => protocol::modify_domain(
            domain,
            &edits(add_ns.clone(), replace_ns.clone(), remove_ns.clone()),
            &edits(
                add_status.clone(),
                replace_status.clone(),
                remove_status.clone(),
            ),
        ),
        Commands::TransferDomain { domain, approve } => {
            protocol::transfer_domain(domain, *approve)
        }
        Commands::DelDomain { domain } => protocol::delete_domain(domain),
        Commands::AddNameServer { host, ips } => protocol::add_name_server(host, ips),
        Commands::CheckNameServer { host } => protocol::check_name_server(host),
        Commands::StatusNameServer { host } => protocol::status_name_server(host),
        Commands::ModNameServer {
            host,
            rename,
            add_ip,
            replace_ip,
            remove_ip,
        } => protocol::modify_name_server(
            host,
            rename.as_deref(),
            &edits(add_ip.clone(), replace_ip.clone(), remove_ip.clone()),
        ),
        Commands::DelNameServer { host } => protocol::delete_name_server(host),
        Commands::Describe { target } => protocol::describe(target.as_deref()),
    }
}

fn print_response(response: &Response) {
    println!("Code: {}", response.code());
    println!("Description: {}", response.description());

    if !response.attributes().is_empty() {
        println!("Attributes:");
        for (key, values) in response.attributes() {
            for value in values {
                println!("{}:{}", key, value);
            }
        }
    }
}

fn run(args: &Args) -> rrp_client::Result<Response> {
    let config = SessionConfig::new(&args.server, args.port).timeout_secs(args.timeout);

    let mut session = Session::connect(&config)?;
    tracing::debug!(code = session.greeting().code(), "connected");

    let auth = session.submit(&protocol::start_session(&args.id, &args.password, None))?;
    if !auth.is_success() {
        eprintln!("authentication failed: {} {}", auth.code(), auth.description());
        std::process::exit(1);
    }

    let response = session.submit(&build_command(&args.command))?;

    // Quit triggers the server-side teardown; the socket is released
    // regardless of how the server answers it
    if let Err(err) = session.submit(&protocol::end_session()) {
        tracing::warn!("error ending session: {}", err);
    }
    match session.close() {
        Ok(()) | Err(RrpError::Closed) => {}
        Err(err) => tracing::warn!("error closing session: {}", err),
    }

    Ok(response)
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rrp_client=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    match run(&args) {
        Ok(response) => {
            print_response(&response);
            if !response.is_success() {
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
