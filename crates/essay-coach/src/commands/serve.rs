//! Serve command — MCP server on stdio.

use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use essay_coach_core::config::Config;

use crate::server::EssayCoachServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // No subcommand-specific arguments; transport is always stdio
}

/// Start the MCP server on stdio and block until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let server = EssayCoachServer::new(&config, max_input)?;
    info!("starting MCP server on stdio");

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    info!("MCP server stopped");
    Ok(())
}
