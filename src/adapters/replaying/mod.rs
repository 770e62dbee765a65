//! Replaying adapters that serve recorded interactions from cassettes.

pub mod image_model;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;

/// Retrieve the next recorded output for a given port and method.
///
/// # Panics
///
/// Panics if the cassette has no more interactions for the port/method.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method).output.clone()
}

/// Deserialize a replayed output as `Result<T, Error>`.
///
/// Outputs use the `{"Ok": ...}` / `{"Err": "..."}` convention; a bare value
/// (hand-written fixture) is treated as an Ok payload.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err_val) = output.get("Err") {
        let msg = err_val.as_str().unwrap_or("replayed error").to_string();
        return Err(msg.into());
    }
    let payload = match output.get("Ok") {
        Some(ok_val) => ok_val.clone(),
        None => output,
    };
    serde_json::from_value(payload)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
}
