//! Replaying adapter for the `ImageModel` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::AdaptError;
use crate::ports::image_model::{ImageModel, InvokeFuture, ModelRequest, ModelResponse};

/// Serves recorded model responses from a cassette; never touches the network.
pub struct ReplayingImageModel {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingImageModel {
    /// Create a replaying model backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl ImageModel for ReplayingImageModel {
    fn invoke(&self, _request: &ModelRequest) -> InvokeFuture<'_> {
        let output = next_output(&self.replayer, "image_model", "invoke");
        Box::pin(async move {
            replay_result::<ModelResponse>(output)
                .map_err(|e| AdaptError::Api { status: 0, message: e.to_string() })
        })
    }
}
