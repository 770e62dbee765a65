//! Live adapter for the Gemini `generateContent` API.

use reqwest::Client;

use crate::error::AdaptError;
use crate::ports::image_model::{ImageModel, InvokeFuture, ModelRequest, ModelResponse};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Live image model that calls the Google AI API.
pub struct GeminiModel {
    client: Client,
    api_key: String,
}

impl GeminiModel {
    /// Create a new Gemini adapter with the given API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self { client: Client::new(), api_key }
    }
}

/// Build the `generateContent` request body.
///
/// Part order matters to the model: the inline source image first, then the
/// instruction text. The aspect ratio rides in `generationConfig.imageConfig`.
fn request_body(request: &ModelRequest) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "parts": [
                {
                    "inlineData": {
                        "mimeType": request.image.mime_type,
                        "data": request.image.data,
                    }
                },
                {"text": request.prompt},
            ]
        }],
        "generationConfig": {
            "imageConfig": {
                "aspectRatio": request.aspect_ratio,
            }
        }
    })
}

impl ImageModel for GeminiModel {
    fn invoke(&self, request: &ModelRequest) -> InvokeFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let url = format!("{GEMINI_API_BASE}/{}:generateContent", request.model);
            let body = request_body(&request);

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()
                .await?;

            let status = response.status();
            let response_text = response.text().await?;

            if !status.is_success() {
                return Err(AdaptError::Api { status: status.as_u16(), message: response_text });
            }

            // Candidate/part classification happens downstream; this adapter
            // only decodes the wire shape.
            serde_json::from_str::<ModelResponse>(&response_text).map_err(|e| AdaptError::Api {
                status: status.as_u16(),
                message: format!("Failed to parse response: {e}"),
            })
        })
    }
}
