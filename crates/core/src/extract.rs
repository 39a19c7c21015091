//! Response Extraction
//!
//! Locates and decodes the JSON object embedded in raw model output. Models
//! regularly ignore the "JSON only" instruction, so decoding runs an ordered
//! chain of strategies and the first success wins:
//!
//! 1. direct decode of the trimmed text
//! 2. fenced block (```` ```json ... ``` ````): decode the inner text, and on
//!    failure keep the inner text as the working text
//! 3. span from the first `{` to the last `}` of the working text
//!
//! Exhaustion raises [`ExtractionError::NoJsonFound`].

use serde_json::Value;
use tracing::debug;

use crate::error::{ExtractionError, ExtractionResult};

const FENCE: &str = "```";

/// Outcome of a single strategy.
enum Step {
    /// The strategy decoded a value; stop here.
    Decoded(Value),
    /// The strategy did not apply or failed softly; try the next one.
    Next,
    /// The strategy failed terminally.
    Fail(ExtractionError),
}

/// State shared along the strategy chain.
struct Attempt<'a> {
    /// Trimmed response text, used for the final diagnostic snippet.
    original: &'a str,
    /// Text the next strategy works on; narrowed by the fence strategy.
    working: String,
}

type Strategy = fn(&mut Attempt<'_>) -> Step;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("direct", decode_direct),
    ("fenced", decode_fenced),
    ("brace_span", decode_brace_span),
];

/// Decode the JSON value embedded in a model response.
pub fn extract_json(raw: &str) -> ExtractionResult<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ExtractionError::EmptyResponse);
    }

    let mut attempt = Attempt {
        original: trimmed,
        working: trimmed.to_string(),
    };

    for &(name, strategy) in STRATEGIES {
        match strategy(&mut attempt) {
            Step::Decoded(value) => {
                debug!(strategy = name, "extract: decoded response JSON");
                return Ok(value);
            }
            Step::Next => continue,
            Step::Fail(err) => {
                debug!(strategy = name, kind = err.kind(), "extract: strategy failed");
                return Err(err);
            }
        }
    }

    Err(ExtractionError::no_json_found(attempt.original))
}

fn decode_direct(attempt: &mut Attempt<'_>) -> Step {
    match serde_json::from_str(&attempt.working) {
        Ok(value) => Step::Decoded(value),
        Err(_) => Step::Next,
    }
}

fn decode_fenced(attempt: &mut Attempt<'_>) -> Step {
    let Some(inner) = strip_code_fence(&attempt.working) else {
        return Step::Next;
    };
    match serde_json::from_str(&inner) {
        Ok(value) => Step::Decoded(value),
        Err(_) => {
            attempt.working = inner;
            Step::Next
        }
    }
}

fn decode_brace_span(attempt: &mut Attempt<'_>) -> Step {
    let text = attempt.working.as_str();
    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Step::Next;
    };
    if start >= end {
        return Step::Next;
    }
    let span = &text[start..=end];
    match serde_json::from_str(span) {
        Ok(value) => Step::Decoded(value),
        Err(e) => Step::Fail(ExtractionError::unparsable(span, &e)),
    }
}

/// Strip a markdown code fence wrapping the whole text.
///
/// Returns `None` unless the text both starts and ends with a fence marker.
/// The optional language tag after the opening marker is dropped.
pub fn strip_code_fence(text: &str) -> Option<String> {
    let text = text.trim();
    if !text.starts_with(FENCE) {
        return None;
    }

    let lines: Vec<&str> = text.lines().collect();
    if lines.len() >= 3 && lines[lines.len() - 1].starts_with(FENCE) {
        return Some(lines[1..lines.len() - 1].join("\n").trim().to_string());
    }

    // Fence opened and closed on one or two lines: ```json {...} ```
    let body = text.strip_prefix(FENCE)?.strip_suffix(FENCE)?;
    let body = body.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    Some(body.trim().to_string())
}
