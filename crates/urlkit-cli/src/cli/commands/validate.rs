//! `urlkit validate <url>` – two-stage well-formedness check.

use anyhow::Result;
use urlkit_core::validate::{check_url, ValidationOutcome};

/// Prints the verdict and returns whether the URL was accepted; the caller
/// turns a rejection into a non-zero exit code.
pub fn run_validate(url: &str, explain: bool) -> Result<bool> {
    let outcome = check_url(url);
    let accepted = outcome == ValidationOutcome::Accept;

    if explain {
        let stage = match outcome {
            ValidationOutcome::Accept => "accepted by both stages",
            ValidationOutcome::SyntacticReject => "rejected by the syntactic pattern",
            ValidationOutcome::StructuralReject => "pattern matched, structural parse rejected",
        };
        println!("{url}: {stage}");
    } else {
        println!("{}", if accepted { "valid" } else { "invalid" });
    }

    Ok(accepted)
}
