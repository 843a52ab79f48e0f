use anyhow::Result;
use axum::Router;
use clap::Parser;
use keyphrase_fetch::client::DEFAULT_USER_AGENT;
use keyphrase_fetch::FetchConfig;
use keyphrase_server::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Timeout for fetching the analyzed page, in seconds
    #[arg(long, default_value_t = 12)]
    timeout_secs: u64,
    /// User-Agent sent when fetching pages
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Largest page body accepted, in bytes
    #[arg(long, default_value_t = 2 * 1024 * 1024)]
    max_body_bytes: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = FetchConfig {
        timeout_secs: args.timeout_secs,
        user_agent: args.user_agent,
        max_body_bytes: args.max_body_bytes,
        ..FetchConfig::default()
    };
    let app: Router = build_app(config)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
