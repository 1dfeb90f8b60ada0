//! Two-stage URL validation: a syntactic pattern gate, then a structural
//! parse confirming scheme and authority.
//!
//! The gate is a heuristic, not a grammar: it accepts only
//! `http(s)`/`ftp(s)` URLs with a dotted hostname, `localhost`, or a
//! dotted-quad address, and rejects everything else up front.

use std::sync::LazyLock;

use regex::Regex;

use crate::parse::parse_url;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        ^(?:http|ftp)s?://
        (?:
            (?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)
          | localhost
          | \d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}
        )
        (?::\d+)?
        (?:/?|[/?]\S+)$",
    )
    .expect("URL validation pattern is well-formed")
});

/// Where a candidate URL fell out of the two-stage check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Rejected by the syntactic pattern gate.
    SyntacticReject,
    /// Passed the gate but failed structural decomposition (or parsed
    /// without a scheme or authority).
    StructuralReject,
    /// Passed both stages.
    Accept,
}

/// Runs both validation stages and reports which one decided.
///
/// Never fails: malformed input is a rejection, not an error.
pub fn check_url(url: &str) -> ValidationOutcome {
    if !URL_PATTERN.is_match(url) {
        return ValidationOutcome::SyntacticReject;
    }

    match parse_url(url) {
        Ok(parsed) if !parsed.scheme.is_empty() && !parsed.netloc.is_empty() => {
            ValidationOutcome::Accept
        }
        _ => ValidationOutcome::StructuralReject,
    }
}

/// True when `url` passes both validation stages.
pub fn is_valid_url(url: &str) -> bool {
    check_url(url) == ValidationOutcome::Accept
}
