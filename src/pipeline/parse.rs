//! Reply parsing: free-text model output → [`NameList`].
//!
//! Each fragment is split on `,`, every token is trimmed, tokens failing
//! the [`NameRule`] are dropped, and the survivors are accumulated across
//! fragments and candidates in encounter order. [`NameList`] takes care of
//! first-occurrence deduplication.

use crate::error::ExtractionFailure;
use crate::names::{NameList, NameRule};
use crate::pipeline::request::GenerateResponse;

/// Trimmed tokens of one fragment that pass `rule`.
pub fn split_names<'a>(fragment: &'a str, rule: &'a NameRule) -> impl Iterator<Item = &'a str> {
    fragment
        .split(',')
        .map(str::trim)
        .filter(move |token| rule.accepts(token))
}

/// Collect the names of every fragment of `response`.
pub fn parse_response(response: &GenerateResponse, rule: &NameRule) -> NameList {
    response
        .fragments()
        .flat_map(|fragment| split_names(fragment, rule))
        .collect()
}

/// Decode a raw response body and collect its names.
pub fn parse_body(body: &str, rule: &NameRule) -> Result<NameList, ExtractionFailure> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| ExtractionFailure::MalformedResponse {
            detail: e.to_string(),
        })?;
    Ok(parse_response(&response, rule))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_with(texts: &[&str]) -> String {
        let parts: Vec<_> = texts
            .iter()
            .map(|t| serde_json::json!({ "text": t }))
            .collect();
        serde_json::json!({ "candidates": [ { "content": { "parts": parts } } ] }).to_string()
    }

    #[test]
    fn reference_example() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Alice Smith, Bob Jones, Alice Smith, X"}]}}]}"#;
        let names = parse_body(body, &NameRule::default()).unwrap();
        assert_eq!(names, ["Alice Smith", "Bob Jones"]);
    }

    #[test]
    fn single_words_dropped() {
        let names = parse_body(&body_with(&["Plato, Aristotle,  Socrates "]), &NameRule::default())
            .unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn multi_word_tokens_kept_in_order() {
        let names = parse_body(
            &body_with(&["Grace Brewster Murray Hopper ,Alan Turing"]),
            &NameRule::default(),
        )
        .unwrap();
        assert_eq!(names, ["Grace Brewster Murray Hopper", "Alan Turing"]);
    }

    #[test]
    fn dedup_spans_fragments_and_candidates() {
        let body = serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "Ada Lovelace, Alan Turing" } ] } },
                { "content": { "parts": [ { "text": "Alan Turing, Ada Lovelace, Edsger Dijkstra" } ] } }
            ]
        })
        .to_string();
        let names = parse_body(&body, &NameRule::default()).unwrap();
        assert_eq!(names, ["Ada Lovelace", "Alan Turing", "Edsger Dijkstra"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let names = parse_body(&body_with(&["Ada Lovelace, ada lovelace"]), &NameRule::default())
            .unwrap();
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn empty_tokens_and_newlines() {
        let names = parse_body(&body_with(&[",, ,\nAda Lovelace,\n"]), &NameRule::default())
            .unwrap();
        assert_eq!(names, ["Ada Lovelace"]);
    }

    #[test]
    fn tunable_rule() {
        let body = body_with(&["Plato, Ada Lovelace, Grace Murray Hopper"]);
        assert_eq!(
            parse_body(&body, &NameRule::new(1)).unwrap(),
            ["Plato", "Ada Lovelace", "Grace Murray Hopper"]
        );
        assert_eq!(
            parse_body(&body, &NameRule::new(3)).unwrap(),
            ["Grace Murray Hopper"]
        );
    }

    #[test]
    fn no_candidates_is_empty_not_error() {
        let names = parse_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#, &NameRule::default())
            .unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_body("<html>502 Bad Gateway</html>", &NameRule::default()).unwrap_err();
        assert!(matches!(err, ExtractionFailure::MalformedResponse { .. }));
    }
}
