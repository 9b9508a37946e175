//! Extraction of JSON payloads from free-form model replies.
//!
//! Models often wrap JSON in markdown fences or surround it with prose.
//! These helpers are pure text handling; no I/O.

use serde_json::Value;

/// Locate the JSON object embedded in a reply.
///
/// Tries, in order: a ```` ```json ```` fence, a bare ```` ``` ```` fence, and
/// finally the span from the first `{` to the last `}`.
pub fn extract_json_block(response: &str) -> Option<&str> {
    let response = response.trim();

    if let Some(start) = response.find("```json") {
        let body = &response[start + 7..];
        if let Some(end) = body.find("```") {
            return Some(body[..end].trim());
        }
    } else if let Some(start) = response.find("```") {
        let body = &response[start + 3..];
        if let Some(end) = body.find("```") {
            let inner = body[..end].trim();
            if inner.starts_with('{') {
                return Some(inner);
            }
        }
    }

    let start = response.find('{')?;
    let end = response.rfind('}')?;
    (end > start).then(|| &response[start..=end])
}

/// Parse the JSON object embedded in a reply, if any.
pub fn parse_json_object(response: &str) -> Option<Value> {
    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(response.trim()) {
        return Some(value);
    }
    let block = extract_json_block(response)?;
    match serde_json::from_str::<Value>(block) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json() {
        let value = parse_json_object(r#"{"a": 1}"#).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn test_fenced_json() {
        let reply = "Here is my analysis:\n```json\n{\"key_points\": [\"x\"]}\n```\nThanks";
        let value = parse_json_object(reply).unwrap();
        assert_eq!(value["key_points"][0], "x");
    }

    #[test]
    fn test_bare_fence() {
        let reply = "```\n{\"decision\": \"continue\"}\n```";
        let value = parse_json_object(reply).unwrap();
        assert_eq!(value["decision"], "continue");
    }

    #[test]
    fn test_embedded_in_prose() {
        let reply = "Sure! {\"decision\": \"end_agreement\"} Hope that helps.";
        let value = parse_json_object(reply).unwrap();
        assert_eq!(value["decision"], "end_agreement");
    }

    #[test]
    fn test_no_json() {
        assert!(parse_json_object("no structure at all").is_none());
        assert!(parse_json_object("{ broken").is_none());
        assert!(parse_json_object("[1, 2, 3]").is_none());
    }
}
