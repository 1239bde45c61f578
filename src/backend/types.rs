//! Gemini `generateContent` wire types and the normalized search result
//!
//! The provider response is a loosely-typed contract. Citation entries are
//! decoded through [`GroundingChunk`], which separates well-formed web
//! sources from everything else instead of trusting nested optional fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Normalized result
// ============================================================================

/// A cited web document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSource {
    pub uri: String,
    pub title: String,
}

/// Synthesized answer plus its sources, in provider order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub text: String,
    pub sources: Vec<WebSource>,
}

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    pub tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub role: String,
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

/// Enables web grounding. Serializes to `{}`.
#[derive(Debug, Default, Serialize)]
pub struct GoogleSearch {}

impl GenerateContentRequest {
    /// Single-turn request with web grounding enabled
    pub fn grounded(query: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: query.to_string(),
                }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch::default(),
            }],
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Top-level `generateContent` response.
///
/// Candidates are kept as raw JSON so that only `candidates[0]` is ever
/// interpreted; later entries may be anything.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Value>,
}

/// One raw citation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroundingChunk {
    /// An object whose `web` member is an object with string `uri` and `title`
    Web(WebSource),
    /// Anything else: null, primitives, arrays, missing or mistyped fields
    Malformed,
}

impl From<&Value> for GroundingChunk {
    fn from(value: &Value) -> Self {
        let Some(web) = value
            .as_object()
            .and_then(|chunk| chunk.get("web"))
            .and_then(Value::as_object)
        else {
            return GroundingChunk::Malformed;
        };

        match (
            web.get("uri").and_then(Value::as_str),
            web.get("title").and_then(Value::as_str),
        ) {
            (Some(uri), Some(title)) => GroundingChunk::Web(WebSource {
                uri: uri.to_string(),
                title: title.to_string(),
            }),
            _ => GroundingChunk::Malformed,
        }
    }
}

impl<'de> Deserialize<'de> for GroundingChunk {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|value| GroundingChunk::from(&value))
    }
}

impl GroundingChunk {
    pub fn into_source(self) -> Option<WebSource> {
        match self {
            GroundingChunk::Web(web) => Some(web),
            GroundingChunk::Malformed => None,
        }
    }
}

impl GenerateContentResponse {
    /// Collapse the response into answer text and valid sources.
    ///
    /// Only the first candidate is examined. Members of the wrong shape are
    /// treated as absent. Malformed citation entries are dropped; the
    /// remaining entries keep their relative order.
    pub fn into_search_result(self) -> SearchResult {
        let Some(candidate) = self
            .candidates
            .as_ref()
            .and_then(Value::as_array)
            .and_then(|candidates| candidates.first())
        else {
            return SearchResult::default();
        };

        let text: String = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(Value::as_array)
            .map(|parts| parts.as_slice())
            .unwrap_or_default()
            .iter()
            .filter(|part| part.get("thought").and_then(Value::as_bool) != Some(true))
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect();

        let chunks = candidate
            .get("groundingMetadata")
            .and_then(|meta| meta.get("groundingChunks"))
            .and_then(Value::as_array)
            .map(|chunks| chunks.as_slice())
            .unwrap_or_default();
        let sources: Vec<WebSource> = chunks
            .iter()
            .filter_map(|chunk| GroundingChunk::from(chunk).into_source())
            .collect();

        if sources.len() < chunks.len() {
            tracing::debug!(
                "Dropped {} malformed grounding chunk(s) of {}",
                chunks.len() - sources.len(),
                chunks.len()
            );
        }

        SearchResult { text, sources }
    }
}

/// Standard Google API error envelope
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> SearchResult {
        serde_json::from_value::<GenerateContentResponse>(value)
            .unwrap()
            .into_search_result()
    }

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerateContentRequest::grounded("rust")).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "rust"}]}],
                "tools": [{"google_search": {}}]
            })
        );
    }

    #[test]
    fn test_malformed_chunks_dropped_in_order() {
        let result = parse(json!({
            "candidates": [{
                "content": {"parts": [{"text": "answer"}]},
                "groundingMetadata": {"groundingChunks": [
                    {"web": {"uri": "https://a.example", "title": "A"}},
                    null,
                    42,
                    "text",
                    {"web": {"uri": "https://missing-title.example"}},
                    {"web": {"title": "missing uri"}},
                    {"web": null},
                    {"retrievedContext": {}},
                    {"web": {"uri": "https://b.example", "title": "B", "domain": "b.example"}},
                    {"web": {"uri": 7, "title": "numeric uri"}},
                    [["https://arr.example", "Array chunk"]],
                    {"web": ["https://arr2.example", "Array web"]},
                    {"web": {"uri": "https://c.example", "title": null}}
                ]}
            }]
        }));

        assert_eq!(result.text, "answer");
        assert_eq!(
            result.sources,
            vec![
                WebSource {
                    uri: "https://a.example".into(),
                    title: "A".into()
                },
                WebSource {
                    uri: "https://b.example".into(),
                    title: "B".into()
                },
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let chunk = json!({"web": {"uri": "https://a.example", "title": "A"}});
        let result = parse(json!({
            "candidates": [{"groundingMetadata": {"groundingChunks": [chunk.clone(), chunk]}}]
        }));
        assert_eq!(result.sources.len(), 2);
    }

    #[test]
    fn test_only_first_candidate_examined() {
        let result = parse(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {
                    "content": {"parts": [{"text": "second"}]},
                    "groundingMetadata": {"groundingChunks": [
                        {"web": {"uri": "https://a.example", "title": "A"}}
                    ]}
                }
            ]
        }));
        assert_eq!(result.text, "first");
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_later_candidates_are_not_decoded() {
        let result = parse(json!({
            "candidates": [
                {
                    "content": {"parts": [{"text": "first"}]},
                    "groundingMetadata": {"groundingChunks": [
                        {"web": {"uri": "https://a.example", "title": "A"}}
                    ]}
                },
                "garbage",
                {"content": 12, "groundingMetadata": []}
            ]
        }));
        assert_eq!(result.text, "first");
        assert_eq!(result.sources.len(), 1);
    }

    #[test]
    fn test_wrong_shaped_members_are_absent() {
        let result = parse(json!({
            "candidates": [{
                "content": {"parts": [{"text": "answer"}]},
                "groundingMetadata": "not an object"
            }]
        }));
        assert_eq!(result.text, "answer");
        assert!(result.sources.is_empty());

        let result = parse(json!({
            "candidates": [{
                "content": {"parts": "not a list"},
                "groundingMetadata": {"groundingChunks": {"web": {"uri": "u", "title": "t"}}}
            }]
        }));
        assert_eq!(result, SearchResult::default());

        assert_eq!(parse(json!({"candidates": "nope"})), SearchResult::default());
    }

    #[test]
    fn test_chunk_deserializes_from_any_json() {
        let chunks: Vec<GroundingChunk> = serde_json::from_value(json!([
            {"web": {"uri": "https://a.example", "title": "A"}},
            {"web": ["https://a.example", "A"]},
            null
        ]))
        .unwrap();
        assert_eq!(
            chunks,
            vec![
                GroundingChunk::Web(WebSource {
                    uri: "https://a.example".into(),
                    title: "A".into()
                }),
                GroundingChunk::Malformed,
                GroundingChunk::Malformed,
            ]
        );
    }

    #[test]
    fn test_text_joins_parts_and_skips_thoughts() {
        let result = parse(json!({
            "candidates": [{"content": {"parts": [
                {"text": "thinking...", "thought": true},
                {"text": "Hello, "},
                {"inlineData": {}},
                {"text": "world"}
            ]}}]
        }));
        assert_eq!(result.text, "Hello, world");
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(parse(json!({})), SearchResult::default());
        assert_eq!(parse(json!({"candidates": []})), SearchResult::default());
        assert_eq!(
            parse(json!({"candidates": [{"groundingMetadata": null}]})),
            SearchResult::default()
        );
    }
}
