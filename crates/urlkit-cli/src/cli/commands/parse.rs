//! `urlkit parse <url>` – decompose a URL into its components.

use anyhow::Result;
use urlkit_core::parse::{parse_url, ParsedUrl};

pub fn run_parse(url: &str, json: bool) -> Result<()> {
    let parsed = parse_url(url)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        print_components(&parsed);
    }
    Ok(())
}

fn print_components(parsed: &ParsedUrl) {
    println!("scheme: {}", parsed.scheme);
    println!("netloc: {}", parsed.netloc);
    println!("hostname: {}", parsed.hostname.as_deref().unwrap_or(""));
    println!(
        "port: {}",
        parsed.port.map(|p| p.to_string()).unwrap_or_default()
    );
    println!("path: {}", parsed.path);
    println!("params: {}", parsed.params);
    println!("query_string: {}", parsed.query_string);
    for (key, values) in parsed.query_params.iter() {
        println!("query.{key}: {}", values.join(", "));
    }
    println!("fragment: {}", parsed.fragment);
    println!("full_url: {}", parsed.full_url);
}
