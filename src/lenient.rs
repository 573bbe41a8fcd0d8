//! Lenient JSON parsing: a bounded ladder of textual repair attempts applied
//! before giving up on malformed input.
//!
//! Candidates are tried in a fixed order so results are deterministic:
//! 1. the trimmed text as-is (strict);
//! 2. trailing commas stripped before a closing brace/bracket;
//! 3. the trimmed text wrapped in `{ }` (tolerates a bare property list);
//! 4. wrapped and comma-stripped.
//!
//! If every candidate fails, the error surfaced to the caller is the *first*
//! (strict) attempt's message — that one points at the real complaint.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TransformError};

static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*([}\]])").unwrap());

pub fn parse_lenient(input: &str) -> Result<serde_json::Value> {
    let trimmed = input.trim();
    let stripped = TRAILING_COMMA.replace_all(trimmed, "$1").into_owned();
    let wrapped = format!("{{{trimmed}}}");
    let wrapped_stripped = TRAILING_COMMA.replace_all(&wrapped, "$1").into_owned();

    let candidates = [trimmed, stripped.as_str(), wrapped.as_str(), wrapped_stripped.as_str()];

    let mut first_error: Option<serde_json::Error> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        match serde_json::from_str::<serde_json::Value>(candidate) {
            Ok(value) => {
                if index > 0 {
                    log::debug!("lenient parse succeeded on repair candidate {index}");
                }
                return Ok(value);
            }
            Err(error) => {
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }
    }

    match first_error {
        Some(error) => Err(TransformError::Parse(error.to_string())),
        None => Err(TransformError::Parse("empty input".to_string())),
    }
}
