//! CLI argument parsing with clap.

use clap::Parser;

/// Adapt an image to a social platform's framing via AI regeneration.
#[derive(Parser, Debug)]
#[command(name = "reframe", version, about)]
pub struct Cli {
    /// Path to the source image (PNG, JPEG, or `WebP`).
    pub image: String,

    /// Target platform: instagram, tiktok, youtube, xiaohongshu, album-cover.
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Album resolution tier: standard, hd, ultra-hd, distro.
    /// Only consulted for album-cover.
    #[arg(short, long)]
    pub resolution: Option<String>,

    /// Free-text instruction; omitted means auto-adapt.
    #[arg(short, long, conflicts_with = "instruction_file")]
    pub instruction: Option<String>,

    /// Path to a file containing the instruction text.
    #[arg(long, conflicts_with = "instruction")]
    pub instruction_file: Option<String>,

    /// Model name override.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output file path (auto-generated if not specified).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the instruction from the flag or the file flag.
    ///
    /// Neither flag means an empty instruction; the composer substitutes
    /// its default downstream.
    ///
    /// # Errors
    ///
    /// Returns an error if the instruction file cannot be read.
    pub fn resolve_instruction(&self) -> Result<String, std::io::Error> {
        if let Some(ref text) = self.instruction {
            Ok(text.clone())
        } else if let Some(ref path) = self.instruction_file {
            std::fs::read_to_string(path)
        } else {
            Ok(String::new())
        }
    }
}
