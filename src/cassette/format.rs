//! On-disk cassette format shared by the recorder and replayer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session: provenance plus the ordered interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Session name (timestamp-derived for recordings).
    pub name: String,
    /// When the session was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit the recording was made at, or `"unknown"`.
    pub commit: String,
    /// Interactions in recording order.
    pub interactions: Vec<Interaction>,
}

/// One recorded port call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Zero-based sequence number.
    pub seq: u64,
    /// Port identifier (`"image_model"`).
    pub port: String,
    /// Method on the port (`"invoke"`).
    pub method: String,
    /// Serialized request.
    pub input: serde_json::Value,
    /// Serialized result: `{"Ok": ...}` or `{"Err": "..."}`.
    pub output: serde_json::Value,
}
