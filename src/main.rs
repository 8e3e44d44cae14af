//! Catnub
//!
//! An MCP server for nutrition scoring and weight projection.

use catnub::build_info;
use catnub::config::Config;
use catnub::mcp::CatnubService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");
    eprintln!("Local day boundary: UTC{}", config.offset);

    tracing::info!("Today at the configured offset is {}", config.today());

    // Create the Catnub service
    let service = CatnubService::new(config);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
