//! `urlkit construct` – build a URL from component flags.

use anyhow::{anyhow, Result};
use urlkit_core::construct::UrlComponents;

pub fn run_construct(
    scheme: String,
    netloc: String,
    path: String,
    params: String,
    query: &[String],
    fragment: String,
) -> Result<()> {
    let mut pairs = Vec::with_capacity(query.len());
    for raw in query {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| anyhow!("query pair must be KEY=VALUE, got {raw:?}"))?;
        pairs.push((key.to_string(), value.to_string()));
    }

    let components = UrlComponents {
        scheme,
        netloc,
        path,
        params,
        query: pairs,
        fragment,
    };
    println!("{}", components.build());
    Ok(())
}
