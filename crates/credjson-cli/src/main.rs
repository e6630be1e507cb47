//! credjson — validate and build Google credential JSON documents.
//!
//! ```text
//! credjson validate path/to/credentials.json
//! credjson validate --well-known --json
//! credjson build --type authorized_user --client-id 123 \
//!     --client-secret secret --refresh-token token --include-optional-fields
//! ```

mod commands;
mod config;
mod source;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::config::CliConfig;
use crate::source::InputSource;

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(name = "credjson")]
#[command(author, version, about = "Validate and build Google credential JSON documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and validate a credential document
    Validate(ValidateArgs),
    /// Build a credential document from individual fields
    Build(BuildArgs),
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document to read; `-` or omitted reads stdin
    pub path: Option<PathBuf>,

    /// Read the application default credentials file instead of PATH
    #[arg(long)]
    pub well_known: bool,

    /// Print the back-filled document instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Credential type (`service_account` or `authorized_user`)
    #[arg(long = "type", value_name = "TYPE")]
    pub credential_type: String,

    #[arg(long)]
    pub client_id: Option<String>,

    /// Service account email
    #[arg(long)]
    pub client_email: Option<String>,

    #[arg(long)]
    pub client_secret: Option<String>,

    /// Private key, inline
    #[arg(long, conflicts_with = "private_key_file")]
    pub private_key: Option<String>,

    /// Read the private key from a file
    #[arg(long)]
    pub private_key_file: Option<PathBuf>,

    #[arg(long)]
    pub private_key_id: Option<String>,

    #[arg(long)]
    pub refresh_token: Option<String>,

    /// Write token_uri and revoke_uri into the document
    #[arg(long)]
    pub include_optional_fields: bool,

    /// Token endpoint (defaults to $CREDJSON_TOKEN_URI, then Google's)
    #[arg(long)]
    pub token_uri: Option<String>,

    /// Revoke endpoint (defaults to $CREDJSON_REVOKE_URI, then Google's)
    #[arg(long)]
    pub revoke_uri: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    debug!(?config, "configuration loaded");

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Commands::Validate(args) => {
            let source = InputSource::resolve(args.path.as_deref(), args.well_known, &config)?;
            commands::validate(&source, args.json, &mut stdout)
        }
        Commands::Build(args) => commands::build(args, &config, &mut stdout),
    }
}
