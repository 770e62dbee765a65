//! Recording adapter for the `ImageModel` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::image_model::{ImageModel, InvokeFuture, ModelRequest};

/// Records every invocation while delegating to an inner implementation.
pub struct RecordingImageModel {
    inner: Box<dyn ImageModel>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingImageModel {
    /// Creates a new recording model wrapping the given implementation.
    pub fn new(inner: Box<dyn ImageModel>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ImageModel for RecordingImageModel {
    fn invoke(&self, request: &ModelRequest) -> InvokeFuture<'_> {
        let request_clone = request.clone();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.invoke(&request_clone).await;
            record_result(&recorder, "image_model", "invoke", &request_clone, &result);
            result
        })
    }
}
