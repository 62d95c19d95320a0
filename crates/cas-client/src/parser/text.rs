//! CAS 1.0 plain-text validation responses.
//!
//! ```text
//! yes
//! jdoe
//! ```
//!
//! or a single `no` line.

use crate::error::{CasError, CasResult};
use crate::types::VerificationResult;

/// Parses a `/validate` response body.
///
/// ## Errors
///
/// - [`CasError::Rejected`] (no code) when the first line is `no`
/// - [`CasError::Parse`] for any other first line, or `yes` without a username
pub fn parse_validate_response(body: &str) -> CasResult<VerificationResult> {
    let mut lines = body.lines().map(str::trim);

    match lines.next() {
        Some("yes") => {
            let username = lines
                .next()
                .filter(|user| !user.is_empty())
                .ok_or_else(|| CasError::parse("'yes' response without a username"))?;
            Ok(VerificationResult::new(username))
        }
        Some("no") => Err(CasError::rejected(None, "")),
        Some(other) => Err(CasError::parse(format!(
            "expected 'yes' or 'no', got '{}'",
            truncate(other)
        ))),
        None => Err(CasError::parse("empty response")),
    }
}

/// Bounds how much of an unexpected body ends up in an error message.
fn truncate(line: &str) -> &str {
    match line.char_indices().nth(64) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
