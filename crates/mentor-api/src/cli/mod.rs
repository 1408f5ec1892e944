//! CLI command definitions using clap derive macros.

pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mentor_infra::config::DEFAULT_CONFIG_FILE;

/// MentorGPT -- persona-primed chat gateway in front of Google Gemini.
#[derive(Parser)]
#[command(name = "mentor", version, about, long_about = None)]
pub struct Cli {
    /// Only log errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed logs (-v for debug on the gateway crates, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to the gateway configuration file.
    #[arg(long, global = true, env = "MENTOR_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP gateway.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides `server.host`).
        #[arg(long)]
        host: Option<String>,
    },
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "info",
        1 => "info,mentor_api=debug,mentor_core=debug,mentor_infra=debug",
        _ => "trace",
    }
}
