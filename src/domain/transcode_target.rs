use super::audio_format::AudioContainer;

/// Canonical output of the post-processing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeTarget {
    pub container: AudioContainer,
    pub bitrate_kbps: u32,
}

impl Default for TranscodeTarget {
    fn default() -> Self {
        Self {
            container: AudioContainer::Mp3,
            bitrate_kbps: 320,
        }
    }
}
