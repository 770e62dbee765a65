//! Image model port for the external generation capability.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::AdaptError;

/// A request to regenerate a source image for a target framing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRequest {
    /// Model identifier (e.g., `"gemini-2.5-flash-image"`).
    pub model: String,
    /// The source image travelling inline with the request.
    pub image: InlineSource,
    /// Composed instruction text.
    pub prompt: String,
    /// Aspect ratio for the generation config (e.g., `"9:16"`).
    pub aspect_ratio: String,
}

/// The encoded source image attached to a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineSource {
    /// Mime type declared for the payload.
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

/// Raw model response, decoded defensively: every layer may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Generation candidates; may be empty.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generation candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate content; absent when generation produced nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

/// Content block holding heterogeneous parts in model order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Response parts; a part may carry text, image data, or neither.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single response part.
///
/// Absent fields stay absent after decoding; an absent `text` is not the
/// same as an empty string, and classification depends on the difference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text payload, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline image payload, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Inline binary payload of a response part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// Mime type, when the model declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Base64-encoded image bytes.
    pub data: String,
}

/// Classification of a response part.
#[derive(Debug, Clone, Copy)]
pub enum PartKind<'a> {
    /// The part carries inline image data.
    Image(&'a InlineData),
    /// The part carries text (possibly empty).
    Text(&'a str),
    /// The part carries neither payload.
    Empty,
}

impl Part {
    /// Classify this part. Image data wins when both payloads are present.
    #[must_use]
    pub fn kind(&self) -> PartKind<'_> {
        if let Some(inline) = &self.inline_data {
            PartKind::Image(inline)
        } else if let Some(text) = &self.text {
            PartKind::Text(text)
        } else {
            PartKind::Empty
        }
    }
}

/// Boxed future type returned by [`ImageModel::invoke`].
pub type InvokeFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ModelResponse, AdaptError>> + Send + 'a>>;

/// The external generation capability behind the adapt pipeline.
pub trait ImageModel: Send + Sync {
    /// Issue one generation request. One call per attempt, no retries.
    fn invoke(&self, request: &ModelRequest) -> InvokeFuture<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_request_serialization_round_trip() {
        let request = ModelRequest {
            model: "gemini-2.5-flash-image".into(),
            image: InlineSource { mime_type: "image/png".into(), data: "aGVsbG8=".into() },
            prompt: "recompose".into(),
            aspect_ratio: "9:16".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: ModelRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.model, "gemini-2.5-flash-image");
        assert_eq!(deserialized.image.mime_type, "image/png");
        assert_eq!(deserialized.aspect_ratio, "9:16");
    }

    #[test]
    fn decodes_wire_response_with_inline_data() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{
                        "inlineData": {"mimeType": "image/png", "data": "aW1n"}
                    }]
                }
            }]
        }"#;
        let response: ModelResponse = serde_json::from_str(json).unwrap();
        let part = &response.candidates[0].content.as_ref().unwrap().parts[0];
        match part.kind() {
            PartKind::Image(inline) => {
                assert_eq!(inline.mime_type.as_deref(), Some("image/png"));
                assert_eq!(inline.data, "aW1n");
            }
            other => panic!("expected image part, got {other:?}"),
        }
    }

    #[test]
    fn decodes_part_without_mime_type() {
        let json = r#"{"inlineData": {"data": "aW1n"}}"#;
        let part: Part = serde_json::from_str(json).unwrap();
        match part.kind() {
            PartKind::Image(inline) => assert!(inline.mime_type.is_none()),
            other => panic!("expected image part, got {other:?}"),
        }
    }

    #[test]
    fn classifies_text_part() {
        let part: Part = serde_json::from_str(r#"{"text": "cannot comply"}"#).unwrap();
        assert!(matches!(part.kind(), PartKind::Text("cannot comply")));
    }

    #[test]
    fn empty_string_text_is_still_a_text_part() {
        // Present-but-empty must classify differently from absent.
        let part: Part = serde_json::from_str(r#"{"text": ""}"#).unwrap();
        assert!(matches!(part.kind(), PartKind::Text("")));
    }

    #[test]
    fn bare_part_is_empty() {
        let part: Part = serde_json::from_str("{}").unwrap();
        assert!(matches!(part.kind(), PartKind::Empty));
    }

    #[test]
    fn image_wins_when_both_payloads_present() {
        let json = r#"{"text": "caption", "inlineData": {"data": "aW1n"}}"#;
        let part: Part = serde_json::from_str(json).unwrap();
        assert!(matches!(part.kind(), PartKind::Image(_)));
    }

    #[test]
    fn missing_candidates_decode_as_empty() {
        let response: ModelResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }

    #[test]
    fn candidate_without_content_decodes() {
        let response: ModelResponse = serde_json::from_str(r#"{"candidates": [{}]}"#).unwrap();
        assert!(response.candidates[0].content.is_none());
    }

    #[test]
    fn response_round_trips_for_cassettes() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "here you go"},
                        {"inlineData": {"mimeType": "image/webp", "data": "d2VicA=="}}
                    ]
                }
            }]
        }"#;
        let response: ModelResponse = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&response).unwrap();
        let back: ModelResponse = serde_json::from_value(value).unwrap();
        let parts = &back.candidates[0].content.as_ref().unwrap().parts;
        assert_eq!(parts.len(), 2);
        assert!(matches!(parts[0].kind(), PartKind::Text("here you go")));
        assert!(matches!(parts[1].kind(), PartKind::Image(_)));
    }
}
