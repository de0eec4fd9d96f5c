use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use recommender::{RecommenderConfig, SplitPolicy};
use server::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Movie catalog (.json array/object or .jsonl)
    #[arg(long, default_value = "./data/movies.json")]
    catalog: String,
    /// Optional JSON file with recommender settings; flags below override it
    #[arg(long)]
    config: Option<String>,
    /// Number of recommendations per query
    #[arg(long)]
    top_k: Option<usize>,
    /// Include the director field in feature text
    #[arg(long, default_value_t = false)]
    include_director: bool,
    /// Keep empty-string terms produced by absent fields
    #[arg(long, default_value_t = false)]
    literal_split: bool,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn load_config(args: &Args) -> Result<RecommenderConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
            RecommenderConfig::from_json_str(&raw)?
        }
        None => RecommenderConfig::default(),
    };
    if let Some(k) = args.top_k { config = config.with_top_k(k); }
    if args.include_director { config.features.include_director = true; }
    if args.literal_split { config.features.split = SplitPolicy::Literal; }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = load_config(&args)?;
    let app: Router = build_app(&args.catalog, config).with_context(|| format!("loading catalog {}", args.catalog))?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
