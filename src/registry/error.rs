use thiserror::Error;

use crate::audio::AudioError;

use super::model::TrackId;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("track {0} not found")]
    UnknownTrack(TrackId),

    #[error("track {0} is playing; stop it before changing loop mode")]
    LoopLocked(TrackId),

    #[error("volume {0} is outside [0, 1]")]
    InvalidVolume(f32),

    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error("failed to start progress monitor: {0}")]
    Monitor(#[source] std::io::Error),

    #[error("audio backend already shut down")]
    ShutDown,
}
