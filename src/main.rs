//! Reframe - adapt a visual to a social platform's framing.

use std::path::Path;
use std::process;

use clap::Parser;

use reframe::cli::Cli;
use reframe::client::GenerationClient;
use reframe::config::{self, Config};
use reframe::context::ServiceContext;
use reframe::error::AdaptError;
use reframe::output::{resolve_output_path, save_image};
use reframe::platform::{Platform, Resolution};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AdaptError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(AdaptError::Config)?;

    // Resolve instruction
    let instruction = cli.resolve_instruction().map_err(AdaptError::Io)?;

    // Resolve platform and resolution, falling back to config defaults
    let platform_name = cli.platform.as_deref().unwrap_or(&config.defaults.platform);
    let platform =
        platform_name.parse::<Platform>().map_err(AdaptError::InvalidArgument)?;
    let resolution = match cli.resolution.as_deref() {
        Some(name) => {
            Some(name.parse::<Resolution>().map_err(AdaptError::InvalidArgument)?)
        }
        None => None,
    };
    let model = cli.model.clone().unwrap_or_else(|| config.defaults.model.clone());

    if cli.verbose {
        eprintln!("Model: {model}");
        eprintln!("Platform: {platform} -> aspect ratio {}", platform.aspect_ratio());
        if let Some(resolution) = resolution {
            eprintln!("Resolution: {resolution}");
        }
    }

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("REFRAME_REPLAY").ok();
    let is_recording = std::env::var("REFRAME_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        if cli.verbose {
            eprintln!("Replaying from: {cassette_path}");
        }
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        if cli.verbose {
            eprintln!("Recording mode enabled");
        }
        let (ctx, session) = ServiceContext::recording(&config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config)?, None)
    };

    // Generate
    let client = GenerationClient::new(model, ctx.model);
    let image =
        client.generate(Path::new(&cli.image), &instruction, platform, resolution).await?;

    // Save
    let output_path = resolve_output_path(cli.output.as_deref(), platform, &image);
    save_image(&image, &output_path)?;
    eprintln!("Saved: {}", output_path.display());

    // Finish recording if active
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    Ok(())
}
