use anyhow::Result;
use clap::Parser;
use keyphrase_fetch::client::DEFAULT_USER_AGENT;
use keyphrase_fetch::{FetchConfig, PageFetcher, PageReport};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "keyphrase")]
#[command(about = "Fetch a page and rank its repeated four-word phrases")]
struct Cli {
    /// Page URL to analyze
    #[arg(long)]
    url: String,
    /// Request timeout seconds
    #[arg(long, default_value_t = 12)]
    timeout_secs: u64,
    /// User-Agent string for the page request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Pretty-print the JSON report
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Cli::parse();

    let fetcher = PageFetcher::new(FetchConfig {
        timeout_secs: args.timeout_secs,
        user_agent: args.user_agent,
        ..FetchConfig::default()
    })?;
    let signals = fetcher.fetch(&args.url).await?;
    let report = PageReport::build(signals);
    tracing::info!(winners = report.analysis.winning_keywords.len(), "analysis done");

    let json = if args.pretty { serde_json::to_string_pretty(&report)? } else { serde_json::to_string(&report)? };
    println!("{json}");
    Ok(())
}
