//! Structural checks on client-submitted pattern packages

use crate::codec::pattern::PatternPackage;
use crate::io::error::{LifecatError, Result};
use serde_json::Value;

fn is_integer(value: Option<&Value>) -> bool {
    value.is_some_and(|v| v.is_i64() || v.is_u64())
}

fn is_text(value: Option<&Value>) -> bool {
    value.is_some_and(Value::is_string)
}

fn is_live_cell(value: &Value) -> bool {
    is_integer(value.get("i")) && is_integer(value.get("j"))
}

/// Check that a candidate package has the expected field types
///
/// Requires string `name`, `username` and `comments`, an integer
/// `patternObject.boardArraySize`, and a `patternObject.liveCells` array whose
/// elements all carry integer `i` and `j`. Coordinate ranges are not checked
/// here; re-encoding rejects out-of-range cells.
pub fn is_valid_package(candidate: &Value) -> bool {
    let Some(pattern_object) = candidate.get("patternObject") else {
        return false;
    };

    is_text(candidate.get("name"))
        && is_text(candidate.get("username"))
        && is_text(candidate.get("comments"))
        && is_integer(pattern_object.get("boardArraySize"))
        && pattern_object
            .get("liveCells")
            .and_then(Value::as_array)
            .is_some_and(|cells| cells.iter().all(is_live_cell))
}

/// Parse and shape-check a JSON package submission
///
/// # Errors
///
/// Returns [`LifecatError::InvalidPackage`] if:
/// - The input is not JSON
/// - The package fails [`is_valid_package`]
/// - An integer field does not fit the coordinate range
pub fn parse_package(json: &str) -> Result<PatternPackage> {
    let candidate: Value = serde_json::from_str(json).map_err(|e| LifecatError::InvalidPackage {
        reason: format!("not valid JSON: {e}"),
    })?;

    if !is_valid_package(&candidate) {
        return Err(LifecatError::InvalidPackage {
            reason: "fields do not match the pattern package shape".to_string(),
        });
    }

    serde_json::from_value(candidate).map_err(|e| LifecatError::InvalidPackage {
        reason: e.to_string(),
    })
}
