use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use appstores_mcp::DirectoryService;

/// MCP server for querying the appstores.dev app store directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the pre-built store dataset (a JSON array of records)
    #[arg(long, env = "APPSTORES_DATA_FILE", default_value = "data/stores.json")]
    data_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing to stderr to avoid conflicts with stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting appstores MCP server on stdio...");
    tracing::info!("Using dataset: {}", args.data_file.display());

    let directory_service = DirectoryService::new(&args.data_file)?;

    let service = directory_service.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("serving error: {:?}", e);
    })?;

    service.waiting().await?;
    Ok(())
}
