//! Wire types of the Gemini `generateContent` endpoint.
//!
//! Only the fields the pipeline reads are modelled. Every response field is
//! optional: a reply without `candidates`, a candidate without `content`,
//! or a part without `text` simply contributes nothing.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body: `{ "contents": [ { "parts": [ { "text": … } ] } ] }`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateRequest {
    /// A request whose sole content is one text part.
    pub fn single_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: text.into() }],
            }],
        }
    }
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: Vec<Candidate>,

    #[serde(default, rename = "usageMetadata")]
    pub usage: Option<UsageMetadata>,
}

/// One alternative generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub parts: Vec<ResponsePart>,
}

/// A fragment of generated content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Token accounting reported by the API.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateResponse {
    /// Every text fragment across all candidates, in response order.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let req = GenerateRequest::single_text("hello");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "contents": [ { "parts": [ { "text": "hello" } ] } ] })
        );
    }

    #[test]
    fn fragments_across_candidates() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "a"}, {"text": "b"}]}},
                {"content": {"parts": [{"inlineData": {}}, {"text": "c"}]}},
                {"finishReason": "SAFETY"}
            ],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 3}
        }"#;
        let resp: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.fragments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        let usage = resp.usage.unwrap();
        assert_eq!(usage.prompt_token_count, 12);
        assert_eq!(usage.candidates_token_count, 3);
    }

    #[test]
    fn missing_or_null_fields_are_empty() {
        for body in [
            "{}",
            r#"{"candidates": null}"#,
            r#"{"candidates": [{"content": {"role": "model"}}]}"#,
            r#"{"candidates": [{"content": {"parts": null}}]}"#,
        ] {
            let resp: GenerateResponse = serde_json::from_str(body).unwrap();
            assert_eq!(resp.fragments().count(), 0, "body: {body}");
        }
    }
}
