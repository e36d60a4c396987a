use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration for the gateway binary.
///
/// Every flag can also be set through the environment, so a `.env` file
/// is enough to configure a deployment.
#[derive(Debug, Parser)]
#[command(name = "keyhole", about = "URL shortener redirect service")]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "KEYHOLE_LISTEN_ADDR", default_value = "127.0.0.1:8080")]
    pub listen_addr: SocketAddr,

    /// MySQL connection string. Falls back to the in-memory store when
    /// unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}
