//! MentorGPT gateway entry point.
//!
//! Binary name: `mentor`
//!
//! Parses CLI arguments, installs tracing, then runs the requested command.

mod cli;
mod http;
mod state;

use clap::Parser;

use mentor_observe::tracing_setup::{LogFormat, TracingOptions, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&TracingOptions {
        default_filter: cli::default_filter(cli.verbose, cli.quiet).to_string(),
        format: if cli.json_logs {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        },
        enable_otel: cli.otel,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = match cli.command {
        Commands::Serve { port, host } => cli::serve::run(&cli.config, host, port).await,
    };

    shutdown_tracing();
    result
}
