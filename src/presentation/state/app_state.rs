use std::sync::Arc;

use crate::application::ports::{MediaExtractor, Transcoder};
use crate::application::services::AudioService;

pub struct AppState<E, T>
where
    E: MediaExtractor,
    T: Transcoder,
{
    pub audio_service: Arc<AudioService<E, T>>,
}

impl<E, T> Clone for AppState<E, T>
where
    E: MediaExtractor,
    T: Transcoder,
{
    fn clone(&self) -> Self {
        Self {
            audio_service: Arc::clone(&self.audio_service),
        }
    }
}
