//! # Sinkhole DNS
//!
//! A DNS filtering resolver: blocked domains are answered with a
//! sinkhole address, allowed domains with an empty answer, and every
//! verdict is cached in SQLite for a configurable TTL.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use sinkhole_dns_api::AppState;
use sinkhole_dns_domain::CliOverrides;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "sinkhole-dns")]
#[command(version)]
#[command(about = "DNS filtering resolver with a persisted verdict cache")]
struct Cli {
    /// Path to TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Path to the verdict database
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Sinkhole DNS starting");

    // Startup failures here are fatal; everything after is contained
    // per request.
    let pool = bootstrap::init_database(&config.database).await?;
    let context = di::build_context(&config, pool)?;

    let dns_addr = config.server.dns_addr()?;
    let web_addr = config.server.web_addr()?;

    let dns_task = tokio::spawn(server::start_dns_server(
        dns_addr,
        Arc::clone(&context.classifier),
        context.sinkhole.clone(),
    ));

    let web_task = tokio::spawn(server::start_web_server(
        web_addr,
        AppState {
            classifier: Arc::clone(&context.classifier),
        },
    ));

    // Both tasks run until the process is stopped; either one ending
    // (bind failure, listener error) is fatal.
    tokio::select! {
        result = dns_task => {
            error!("DNS server task ended");
            result??;
        }
        result = web_task => {
            error!("Web server task ended");
            result??;
        }
    }

    Ok(())
}
