//! Unified error type for reframe.

use thiserror::Error;

/// Errors that can occur while adapting an image.
#[derive(Debug, Error)]
pub enum AdaptError {
    /// The source image could not be read or is not a recognized format.
    #[error("Failed to read source image: {0}")]
    Encoding(String),

    /// The model returned no candidates at all.
    #[error("No candidates returned")]
    EmptyResponse,

    /// The model answered with text instead of an image.
    #[error("Model returned text instead of image: {0}")]
    ModelRefusal(String),

    /// Candidates were present but no part carried image data.
    #[error("No image data found in response")]
    NoImageData,

    /// An image part carried a payload that was not valid base64.
    #[error("Failed to decode image payload: {0}")]
    Decode(String),

    /// The API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No API key configured.
    #[error("No API key configured. Set GEMINI_API_KEY or add it to the config file.")]
    MissingApiKey,
}
