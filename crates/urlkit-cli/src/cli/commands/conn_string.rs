//! `urlkit conn-string <url>` – render a URL as KEY=value segments.

use anyhow::Result;
use urlkit_core::config::UrlkitConfig;
use urlkit_core::conn_string::connection_string;
use urlkit_core::parse::parse_url;

pub fn run_conn_string(
    url: &str,
    cfg: &UrlkitConfig,
    prefix: Option<String>,
    separator: Option<String>,
    include_full_url: Option<bool>,
) -> Result<()> {
    let parsed = parse_url(url)?;

    let mut options = cfg.conn_options();
    if let Some(prefix) = prefix {
        options.prefix = prefix;
    }
    if let Some(separator) = separator {
        options.separator = separator;
    }
    if let Some(include) = include_full_url {
        options.include_full_url = include;
    }

    println!("{}", connection_string(&parsed, &options));
    Ok(())
}
