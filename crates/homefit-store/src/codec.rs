//! Column encodings shared by the stores
//!
//! Ordered string lists are stored as a JSON array of strings. Timestamps
//! are stored as Unix milliseconds (UTC).

use chrono::{DateTime, Utc};
use homefit_core::types::schema::CODE_DECODE_DEGRADED;

/// Encode an ordered list for a TEXT column
pub fn encode_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored list column
///
/// NULL and empty text are an empty list. Malformed text also yields an
/// empty list so the rest of the row stays readable; the failure is only
/// logged.
pub fn decode_list(raw: Option<&str>, column: &str, code: &str) -> Vec<String> {
    let text = match raw.map(str::trim) {
        None | Some("") => return Vec::new(),
        Some(text) => text,
    };
    match serde_json::from_str::<Vec<String>>(text) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(
                column,
                code,
                err_code = CODE_DECODE_DEGRADED,
                error = %e,
                "stored list is malformed, reading as empty"
            );
            Vec::new()
        }
    }
}

pub fn to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

/// Out-of-range values fall back to the Unix epoch
pub fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_preserves_order_and_duplicates() {
        let items = vec!["b.png".to_string(), "a.png".to_string(), "b.png".to_string()];
        let encoded = encode_list(&items);
        assert_eq!(decode_list(Some(&encoded), "images", "x"), items);
    }

    #[test]
    fn test_null_and_empty_decode_to_empty() {
        assert!(decode_list(None, "images", "x").is_empty());
        assert!(decode_list(Some(""), "images", "x").is_empty());
        assert!(decode_list(Some("  "), "images", "x").is_empty());
    }

    #[test]
    fn test_malformed_decodes_to_empty() {
        assert!(decode_list(Some("not json"), "images", "x").is_empty());
        assert!(decode_list(Some("{\"a\":1}"), "images", "x").is_empty());
        assert!(decode_list(Some("[1, 2]"), "images", "x").is_empty());
    }

    #[test]
    fn test_paths_with_commas_survive() {
        let items = vec!["dir,with,commas/a.png".to_string()];
        assert_eq!(decode_list(Some(&encode_list(&items)), "images", "x"), items);
    }

    #[test]
    fn test_millis_round_trip() {
        let at = from_millis(1_700_000_000_123);
        assert_eq!(to_millis(at), 1_700_000_000_123);
    }
}
