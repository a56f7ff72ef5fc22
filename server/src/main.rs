//! halcms HAL API server
//!
//! Serves content, media, published content and members as
//! `application/hal+json` under `{base}/rest/v{n}/`. Without an external
//! backend it runs on an in-memory store seeded with a small demo site.
//!
//! Usage:
//!   halcms-server --config halcms.toml --port 8080

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use halcms_server::{build_router, InMemoryBackend, ServerConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "halcms-server")]
#[command(about = "HAL hypermedia API over a content repository")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long, default_value = "halcms.toml")]
    config: PathBuf,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Interface to bind (overrides the config file)
    #[arg(long)]
    bind: Option<String>,

    /// URL prefix in front of `rest/v{n}`
    #[arg(long)]
    base_path: Option<String>,

    /// API version exposed in routes and links
    #[arg(long)]
    api_version: Option<u32>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply_to(&self, config: &mut ServerConfig) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(bind) = &self.bind {
            config.bind = bind.clone();
        }
        if let Some(base_path) = &self.base_path {
            config.base_path = base_path.clone();
        }
        if let Some(version) = self.api_version {
            config.api_version = version;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("halcms server starting...");
    let mut config = ServerConfig::load_from(&args.config);
    args.apply_to(&mut config);

    let backend = InMemoryBackend::demo();
    let registry = backend
        .registry(&config)
        .context("Invalid API version in configuration")?;
    let app = build_router(&registry, &config);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    for services in registry.iter() {
        info!(
            "Serving {} at {}{}",
            services.kind,
            services.links.root_href(),
            if services.writable { "" } else { " (read-only)" }
        );
    }
    info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
