//! Reframe - platform-adaptive image regeneration.
//!
//! Takes a source image and a target platform (Instagram, `TikTok`,
//! `YouTube`, Xiaohongshu, album cover) and asks a multimodal model to
//! recompose the visual for that platform's framing. Prompt composition and
//! response extraction sit behind a swappable model port, so the whole
//! pipeline runs identically against the live API, a recording wrapper, or
//! a cassette replay.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use reframe::client::GenerationClient;
//! use reframe::config::Config;
//! use reframe::context::ServiceContext;
//! use reframe::platform::Platform;
//!
//! # async fn demo() -> Result<(), reframe::error::AdaptError> {
//! let config = Config::default();
//! let ctx = ServiceContext::live(&config)?;
//! let client = GenerationClient::new("gemini-2.5-flash-image", ctx.model);
//! let image = client
//!     .generate(Path::new("poster.png"), "make it neon", Platform::TikTok, None)
//!     .await?;
//! std::fs::write("tiktok.png", &image.data)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod platform;
pub mod ports;
pub mod prompt;
pub mod source;

pub use client::{AdaptedImage, GenerationClient};
pub use error::AdaptError;
pub use platform::{Platform, Resolution};
