//! Host and port extraction from the raw authority.

use crate::error::{Result, UrlToolError};

/// Extracts `(hostname, port)` from a raw netloc.
///
/// - Userinfo is everything up to the last `@` and is discarded here.
/// - A bracketed IPv6 host keeps its colons and loses its brackets.
/// - The hostname is lowercased; an empty host yields `None`.
/// - A non-empty port substring must parse as an integer in 0-65535,
///   otherwise the whole parse fails with [`UrlToolError::MalformedPort`].
///   `host:` with nothing after the colon means "no port".
pub(crate) fn host_and_port(netloc: &str) -> Result<(Option<String>, Option<u16>)> {
    let hostinfo = match netloc.rfind('@') {
        Some(i) => &netloc[i + 1..],
        None => netloc,
    };

    let (host, port_text) = match hostinfo.split_once('[') {
        Some((_, bracketed)) => {
            let (host, after) = match bracketed.split_once(']') {
                Some((host, after)) => (host, after),
                None => (bracketed, ""),
            };
            let port = match after.split_once(':') {
                Some((_, port)) => port,
                None => "",
            };
            (host, port)
        }
        None => match hostinfo.split_once(':') {
            Some((host, port)) => (host, port),
            None => (hostinfo, ""),
        },
    };

    let port = if port_text.is_empty() {
        None
    } else {
        let parsed = port_text
            .parse::<u16>()
            .map_err(|_| UrlToolError::MalformedPort(port_text.to_string()))?;
        Some(parsed)
    };

    let hostname = if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    };

    Ok((hostname, port))
}
