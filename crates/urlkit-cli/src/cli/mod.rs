//! CLI for the urlkit URL component toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlkit_core::config;

use commands::{run_conn_string, run_construct, run_parse, run_validate};

/// Top-level CLI for the urlkit URL component toolkit.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: parse, validate, build, and format URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a URL and print its components.
    Parse {
        /// URL to decompose.
        url: String,
        /// Print the snapshot as JSON instead of line-per-field text.
        #[arg(long)]
        json: bool,
    },

    /// Check whether a URL is well-formed.
    Validate {
        /// URL to check.
        url: String,
        /// Name the validation stage that decided.
        #[arg(long)]
        explain: bool,
    },

    /// Build a URL from individual components.
    Construct {
        /// Scheme, e.g. "https".
        #[arg(long, default_value = "")]
        scheme: String,
        /// Authority, e.g. "user@host:8080".
        #[arg(long, default_value = "")]
        netloc: String,
        /// Path, e.g. "/v1/users".
        #[arg(long, default_value = "")]
        path: String,
        /// Legacy ";" path parameters.
        #[arg(long, default_value = "")]
        params: String,
        /// Query pair; repeat for multiple pairs.
        #[arg(long = "query", value_name = "KEY=VALUE")]
        query: Vec<String>,
        /// Fragment without the leading "#".
        #[arg(long, default_value = "")]
        fragment: String,
    },

    /// Render a URL as a flat KEY=value connection string.
    ConnString {
        /// URL to parse and render.
        url: String,
        /// Key prefix for segments (default from config).
        #[arg(long)]
        prefix: Option<String>,
        /// Separator between segments (default from config).
        #[arg(long)]
        separator: Option<String>,
        /// Append the full source URL as a final segment (default from config).
        #[arg(long, value_name = "BOOL")]
        include_full_url: Option<bool>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { url, json } => run_parse(&url, json)?,
            CliCommand::Validate { url, explain } => {
                if !run_validate(&url, explain)? {
                    std::process::exit(1);
                }
            }
            CliCommand::Construct {
                scheme,
                netloc,
                path,
                params,
                query,
                fragment,
            } => run_construct(scheme, netloc, path, params, &query, fragment)?,
            CliCommand::ConnString {
                url,
                prefix,
                separator,
                include_full_url,
            } => run_conn_string(&url, &cfg, prefix, separator, include_full_url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
