use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::debug;

use super::sink::{create_sink, decode};
use super::types::{AudioBackend, AudioError, SoundHandle};

/// `AudioBackend` playing through the default output device.
pub struct RodioBackend {
    stream: Option<OutputStream>,
}

impl RodioBackend {
    pub fn new() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::Output(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped, which would scribble
        // over the terminal UI.
        stream.log_on_drop(false);

        Ok(Self {
            stream: Some(stream),
        })
    }
}

impl AudioBackend for RodioBackend {
    fn load(
        &mut self,
        path: &Path,
        duration_hint: Option<Duration>,
    ) -> Result<Box<dyn SoundHandle>, AudioError> {
        let stream = self.stream.as_ref().ok_or(AudioError::ShutDown)?;

        // Decode once up front so unsupported files fail at load, not at play.
        let decoder = decode(path)?;
        let duration = duration_hint
            .or_else(|| decoder.total_duration())
            .ok_or_else(|| AudioError::UnknownDuration {
                path: path.to_path_buf(),
            })?;
        debug!(?path, ?duration, "decoded sound");

        Ok(Box::new(RodioSound {
            path: path.to_path_buf(),
            mixer: stream.mixer().clone(),
            sink: None,
            volume: 1.0,
            duration,
        }))
    }

    fn shutdown(&mut self) {
        if self.stream.take().is_some() {
            debug!("audio output stream released");
        }
    }
}

struct RodioSound {
    path: PathBuf,
    mixer: Mixer,
    sink: Option<Sink>,
    volume: f32,
    duration: Duration,
}

impl SoundHandle for RodioSound {
    fn play(&mut self, looping: bool) -> Result<(), AudioError> {
        self.stop();

        let sink = create_sink(&self.mixer, &self.path, looping)?;
        sink.set_volume(self.volume);
        sink.play();
        self.sink = Some(sink);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(ref sink) = self.sink {
            sink.set_volume(volume);
        }
    }

    fn duration(&self) -> Duration {
        self.duration
    }
}
