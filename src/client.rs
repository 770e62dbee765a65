//! Generation client: encode, compose, invoke, extract.

use std::path::Path;

use base64::Engine;

use crate::error::AdaptError;
use crate::platform::{Platform, Resolution};
use crate::ports::image_model::{ImageModel, InlineSource, ModelRequest, ModelResponse, PartKind};
use crate::prompt;
use crate::source::SourceImage;

/// Mime type assumed when a response image part does not declare one.
const FALLBACK_MIME: &str = "image/png";

/// A generated image ready to save or embed.
#[derive(Debug, Clone)]
pub struct AdaptedImage {
    /// Decoded image bytes, exactly as the model returned them.
    pub data: Vec<u8>,
    /// Mime type declared by the model, or `image/png` when it declared none.
    pub mime_type: String,
}

impl AdaptedImage {
    /// Render as a `data:` URL for direct embedding.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{encoded}", self.mime_type)
    }

    /// File extension matching the mime type.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            _ => "png",
        }
    }
}

/// Drives one adaptation end to end against an [`ImageModel`].
pub struct GenerationClient {
    model: String,
    api: Box<dyn ImageModel>,
}

impl GenerationClient {
    /// Create a client that sends requests for `model` through `api`.
    #[must_use]
    pub fn new(model: impl Into<String>, api: Box<dyn ImageModel>) -> Self {
        Self { model: model.into(), api }
    }

    /// Adapt the image at `path` to the platform's framing.
    ///
    /// One attempt is one request: the source is read and base64-encoded,
    /// the prompt composed, a single call issued, and the first image part
    /// of the response returned. Failures are classified, never retried.
    ///
    /// # Errors
    ///
    /// [`AdaptError::Encoding`] when the source cannot be read, the
    /// extraction errors documented on [`extract_image`], and whatever
    /// transport or API error the port surfaces.
    pub async fn generate(
        &self,
        path: &Path,
        instruction: &str,
        platform: Platform,
        resolution: Option<Resolution>,
    ) -> Result<AdaptedImage, AdaptError> {
        let source = SourceImage::read(path).await?;
        let prompt = prompt::compose(platform, resolution, instruction);
        let request = ModelRequest {
            model: self.model.clone(),
            image: InlineSource {
                mime_type: source.mime_type.to_string(),
                data: base64::engine::general_purpose::STANDARD.encode(&source.data),
            },
            prompt: prompt.text(),
            aspect_ratio: prompt.aspect_ratio.to_string(),
        };
        let response = self.api.invoke(&request).await?;
        extract_image(&response)
    }
}

/// Pull the first usable image out of a model response.
///
/// Candidates and parts are scanned in order; the first part carrying
/// inline image data wins and nothing is merged across parts. When no
/// image is present, the first non-empty text part is surfaced as a
/// refusal with its text preserved verbatim.
///
/// # Errors
///
/// [`AdaptError::EmptyResponse`] when there are no candidates,
/// [`AdaptError::Decode`] when the winning payload is not valid base64,
/// [`AdaptError::ModelRefusal`] when the model answered in text, and
/// [`AdaptError::NoImageData`] when nothing usable came back.
pub fn extract_image(response: &ModelResponse) -> Result<AdaptedImage, AdaptError> {
    if response.candidates.is_empty() {
        return Err(AdaptError::EmptyResponse);
    }

    let mut refusal: Option<&str> = None;
    for candidate in &response.candidates {
        let Some(content) = &candidate.content else { continue };
        for part in &content.parts {
            match part.kind() {
                PartKind::Image(inline) => {
                    let data = base64::engine::general_purpose::STANDARD
                        .decode(&inline.data)
                        .map_err(|e| AdaptError::Decode(e.to_string()))?;
                    let mime_type =
                        inline.mime_type.clone().unwrap_or_else(|| FALLBACK_MIME.to_string());
                    return Ok(AdaptedImage { data, mime_type });
                }
                PartKind::Text(text) if refusal.is_none() && !text.is_empty() => {
                    refusal = Some(text);
                }
                PartKind::Text(_) | PartKind::Empty => {}
            }
        }
    }

    match refusal {
        Some(text) => Err(AdaptError::ModelRefusal(text.to_string())),
        None => Err(AdaptError::NoImageData),
    }
}
