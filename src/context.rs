//! Service context that bundles the model port trait object.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::gemini::GeminiModel;
use crate::adapters::recording::image_model::RecordingImageModel;
use crate::adapters::replaying::image_model::ReplayingImageModel;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::Config;
use crate::error::AdaptError;
use crate::ports::ImageModel;

/// Bundles the port trait object behind a single construction point.
pub struct ServiceContext {
    /// Image model port (live, recording, or replaying).
    pub model: Box<dyn ImageModel>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette file to disk.
    ///
    /// The recording adapter may still hold the recorder; everything
    /// captured up to this point gets written.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<std::path::PathBuf, String> {
        let guard = self.recorder.lock().map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        guard.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context calling the real Gemini API.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured.
    pub fn live(config: &Config) -> Result<Self, AdaptError> {
        let key = config.gemini_key().ok_or(AdaptError::MissingApiKey)?;
        Ok(Self { model: Box::new(GeminiModel::new(key)) })
    }

    /// Create a recording context that wraps the live adapter with a recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the live context cannot be constructed.
    pub fn recording(config: &Config) -> Result<(Self, RecordingSession), AdaptError> {
        let live_ctx = Self::live(config)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = std::path::PathBuf::from(".reframe/cassettes")
            .join(&timestamp)
            .join("image_model.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-image_model"),
            get_commit_hash(),
        )));

        let recording_model = RecordingImageModel::new(live_ctx.model, Arc::clone(&recorder));

        let ctx = Self { model: Box::new(recording_model) };
        let session = RecordingSession { recorder };

        Ok((ctx, session))
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, AdaptError> {
        let replayer = load_cassette(path)
            .map_err(|e| AdaptError::Config(format!("Failed to load cassette: {e}")))?;
        let replayer = Arc::new(Mutex::new(replayer));
        Ok(Self { model: Box::new(ReplayingImageModel::new(replayer)) })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
