//! Audio-related small types and traits.
//!
//! This module defines the backend seam used by the registry: an
//! `AudioBackend` that turns files into `SoundHandle`s, and the error type
//! both report.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("could not determine the duration of {path:?}")]
    UnknownDuration { path: PathBuf },

    #[error("no audio output device: {0}")]
    Output(String),

    #[error("audio backend already shut down")]
    ShutDown,
}

/// Loads files into playable sounds.
pub trait AudioBackend {
    /// Decode `path` and return a stopped sound for it.
    ///
    /// `duration_hint` is the length already read from the file's container,
    /// if any; without it the backend asks the decoder.
    fn load(
        &mut self,
        path: &Path,
        duration_hint: Option<Duration>,
    ) -> Result<Box<dyn SoundHandle>, AudioError>;

    /// Release the output device. Sounds created earlier become silent.
    fn shutdown(&mut self);
}

/// A single decoded sound owned by one track.
pub trait SoundHandle {
    /// Start from the beginning. With `looping` the sound repeats until stopped.
    fn play(&mut self, looping: bool) -> Result<(), AudioError>;

    /// Stop immediately. A no-op when the sound is not playing.
    fn stop(&mut self);

    /// Volume in `[0, 1]`, applied to the current and any later playback.
    fn set_volume(&mut self, volume: f32);

    /// Length of a single pass through the sound.
    fn duration(&self) -> Duration;
}
