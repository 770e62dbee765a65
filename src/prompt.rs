//! Prompt composition for platform-adaptive regeneration.
//!
//! Composition is pure: the same platform, resolution, and instruction
//! always produce the same prompt, and the aspect ratio comes from the
//! platform alone.

use crate::platform::{Platform, Resolution};

/// Instruction used when the caller provides none (or only whitespace).
pub const DEFAULT_INSTRUCTION: &str = "Adapt this image to the target aspect ratio. \
    Preserve the main subject, style, and aesthetics. Extend the background seamlessly \
    if needed to fill the space.";

const TIKTOK_RELAYOUT: &str = "*** RE-LAYOUT INSTRUCTIONS (9:16) ***\n\
    Recompose this image into a vertical 9:16 format. DO NOT just extend borders.\n\
    1. Identify and separate the text layer and the main subject.\n\
    2. Move the Title/Text to the upper empty space (top 1/3), make it large and legible.\n\
    3. Move the Main Subject to the center or lower 2/3 and scale it up to fill the width.\n\
    4. Regenerate the background behind moved elements seamlessly.\n\
    The result should look like a native TikTok poster.";

const XIAOHONGSHU_FORMAT: &str = "*** XIAOHONGSHU FORMAT (3:4) ***\n\
    Ensure the composition is balanced vertically. Maintain a lifestyle aesthetic.";

/// A fully composed prompt for one generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    /// Effective user instruction (caller text, or [`DEFAULT_INSTRUCTION`]).
    pub instruction: String,
    /// Platform-specific augmentation block; empty when the platform has none.
    pub augmentation: String,
    /// Aspect ratio requested from the model.
    pub aspect_ratio: &'static str,
}

impl ComposedPrompt {
    /// Assemble the final instruction text sent to the model.
    #[must_use]
    pub fn text(&self) -> String {
        let mut prompt =
            format!("Task: Image Editing / Recomposition.\nUser Instruction: {}\n", self.instruction);
        if !self.augmentation.is_empty() {
            prompt.push('\n');
            prompt.push_str(&self.augmentation);
            prompt.push('\n');
        }
        prompt.push_str("\nReturn ONLY the generated image.");
        prompt
    }
}

/// Compose the prompt for one generation attempt.
///
/// Blank instructions fall back to [`DEFAULT_INSTRUCTION`]; non-blank text
/// passes through verbatim, never rewritten or truncated. The resolution is
/// consulted only for [`Platform::AlbumCover`].
#[must_use]
pub fn compose(
    platform: Platform,
    resolution: Option<Resolution>,
    user_instruction: &str,
) -> ComposedPrompt {
    let instruction = if user_instruction.trim().is_empty() {
        DEFAULT_INSTRUCTION.to_string()
    } else {
        user_instruction.to_string()
    };
    ComposedPrompt {
        instruction,
        augmentation: augmentation(platform, resolution),
        aspect_ratio: platform.aspect_ratio(),
    }
}

/// Platform-specific augmentation block appended after the user instruction.
fn augmentation(platform: Platform, resolution: Option<Resolution>) -> String {
    match platform {
        Platform::TikTok => TIKTOK_RELAYOUT.to_string(),
        Platform::Xiaohongshu => XIAOHONGSHU_FORMAT.to_string(),
        Platform::AlbumCover => {
            let pixels = resolution.unwrap_or_default().pixels();
            format!(
                "*** ALBUM COVER SPECS ***\n\
                 Target Resolution Goal: {pixels}px.\n\
                 Ensure maximum fidelity, crisp text, and artistic composition suitable for music streaming platforms.\n\
                 Upscale and Denoise if necessary to meet high-quality standards."
            )
        }
        Platform::Instagram | Platform::YouTube => String::new(),
    }
}
