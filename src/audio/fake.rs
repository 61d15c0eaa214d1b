//! Recording backend used by tests in place of a sound card.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::types::{AudioBackend, AudioError, SoundHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(PathBuf),
    Play { sound: usize, looping: bool },
    Stop { sound: usize },
    SetVolume { sound: usize, volume: f32 },
    Shutdown,
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub struct FakeBackend {
    pub calls: CallLog,
    durations: HashMap<PathBuf, Duration>,
    default_duration: Duration,
    next_sound: usize,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            durations: HashMap::new(),
            default_duration: Duration::from_secs(60),
            next_sound: 0,
        }
    }

    /// Report `d` for `path` when no hint comes from the caller.
    pub fn with_duration(mut self, path: impl Into<PathBuf>, d: Duration) -> Self {
        self.durations.insert(path.into(), d);
        self
    }

}

impl AudioBackend for FakeBackend {
    fn load(
        &mut self,
        path: &Path,
        duration_hint: Option<Duration>,
    ) -> Result<Box<dyn SoundHandle>, AudioError> {
        self.calls.lock().unwrap().push(Call::Load(path.to_path_buf()));

        if path.extension().and_then(|e| e.to_str()) == Some("bad") {
            return Err(AudioError::Decode {
                path: path.to_path_buf(),
                reason: "unsupported".into(),
            });
        }

        let sound = self.next_sound;
        self.next_sound += 1;
        Ok(Box::new(FakeSound {
            sound,
            calls: self.calls.clone(),
            duration: duration_hint
                .or_else(|| self.durations.get(path).copied())
                .unwrap_or(self.default_duration),
        }))
    }

    fn shutdown(&mut self) {
        self.calls.lock().unwrap().push(Call::Shutdown);
    }
}

struct FakeSound {
    sound: usize,
    calls: CallLog,
    duration: Duration,
}

impl SoundHandle for FakeSound {
    fn play(&mut self, looping: bool) -> Result<(), AudioError> {
        self.calls.lock().unwrap().push(Call::Play {
            sound: self.sound,
            looping,
        });
        Ok(())
    }

    fn stop(&mut self) {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Stop { sound: self.sound });
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.lock().unwrap().push(Call::SetVolume {
            sound: self.sound,
            volume,
        });
    }

    fn duration(&self) -> Duration {
        self.duration
    }
}
