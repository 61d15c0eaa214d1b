use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::audio::{AudioBackend, AudioError, SoundHandle};
use crate::config::{LibrarySettings, Settings};
use crate::library::{TrackInfo, describe};
use crate::monitor::{self, CancelToken, ProgressMonitor};

use super::error::RegistryError;
use super::model::{Progress, TrackHandle, TrackId, TrackRow, TrackState, lock};

struct Track {
    id: TrackId,
    info: TrackInfo,
    sound: Box<dyn SoundHandle>,
    state: TrackHandle,
    cancel: CancelToken,
    worker: Option<JoinHandle<()>>,
    /// Monitors of earlier sessions that were still winding down at restart.
    retired: Vec<JoinHandle<()>>,
}

/// Outcome of a `Registry::load` batch.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<TrackId>,
    pub failed: Vec<(PathBuf, AudioError)>,
}

/// Owns every loaded track and its sound, and starts/stops their monitors.
pub struct Registry<B: AudioBackend> {
    backend: B,
    tracks: Vec<Track>,
    next_id: u64,
    library: LibrarySettings,
    default_volume: f32,
    title_max_chars: usize,
    tick: Duration,
    shut_down: bool,
}

impl<B: AudioBackend> Registry<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        Self {
            backend,
            tracks: Vec::new(),
            next_id: 0,
            library: settings.library.clone(),
            default_volume: settings.audio.default_volume,
            title_max_chars: settings.ui.title_max_chars,
            tick: Duration::from_millis(settings.monitor.tick_ms.max(1)),
            shut_down: false,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Decode each path and register a stopped, non-looping track for it.
    ///
    /// A file that fails to load is reported and skipped; the rest of the
    /// batch still loads.
    pub fn load<I, P>(&mut self, paths: I) -> LoadReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = LoadReport::default();

        for path in paths {
            let path = path.as_ref();
            if self.shut_down {
                report.failed.push((path.to_path_buf(), AudioError::ShutDown));
                continue;
            }

            let info = describe(path, &self.library, self.title_max_chars);
            let mut sound = match self.backend.load(path, info.duration) {
                Ok(s) => s,
                Err(e) => {
                    warn!(?path, error = %e, "failed to load track");
                    report.failed.push((path.to_path_buf(), e));
                    continue;
                }
            };
            sound.set_volume(self.default_volume);

            let id = TrackId(self.next_id);
            self.next_id += 1;

            info!(
                track = %id,
                ?path,
                title = %info.title,
                artist = info.artist.as_deref().unwrap_or("-"),
                album = info.album.as_deref().unwrap_or("-"),
                "loaded track"
            );

            self.tracks.push(Track {
                id,
                info,
                sound,
                state: Arc::new(Mutex::new(TrackState::new(self.default_volume))),
                cancel: CancelToken::new(),
                worker: None,
                retired: Vec::new(),
            });
            report.loaded.push(id);
        }

        report
    }

    /// Start a stopped track or stop a playing one. Returns whether it now plays.
    pub fn toggle_play(&mut self, id: TrackId) -> Result<bool, RegistryError> {
        if self.shut_down {
            return Err(RegistryError::ShutDown);
        }
        let tick = self.tick;
        let track = self.track_mut(id)?;

        let (playing, looping) = {
            let st = lock(&track.state);
            (st.playing, st.looping)
        };

        if playing {
            // Progress stays where it was; the next play resets it.
            track.sound.stop();
            track.cancel.cancel();
            lock(&track.state).playing = false;
            info!(track = %id, "stopped");
            return Ok(false);
        }

        track.sound.play(looping)?;
        let duration = track.sound.duration();

        // Retire the previous session's monitor before starting a new one.
        track.cancel.cancel();
        track.cancel = CancelToken::new();
        if let Some(old) = track.worker.take() {
            track.retired.push(old);
        }
        for old in std::mem::take(&mut track.retired) {
            if old.is_finished() {
                reap(id, old);
            } else {
                track.retired.push(old);
            }
        }

        let session = {
            let mut st = lock(&track.state);
            st.playing = true;
            st.session += 1;
            st.progress = Progress {
                elapsed: Duration::ZERO,
                total: duration,
            };
            st.session
        };

        let monitor = ProgressMonitor::new(
            id,
            track.state.clone(),
            session,
            duration,
            track.cancel.clone(),
        );
        match monitor::spawn(monitor, tick) {
            Ok(handle) => track.worker = Some(handle),
            Err(e) => {
                track.sound.stop();
                lock(&track.state).playing = false;
                return Err(RegistryError::Monitor(e));
            }
        }

        info!(track = %id, path = ?track.info.path, looping, session, "playing");
        Ok(true)
    }

    /// Flip looping on a stopped track. Returns the new looping flag.
    pub fn toggle_loop(&mut self, id: TrackId) -> Result<bool, RegistryError> {
        let track = self.track_mut(id)?;
        let mut st = lock(&track.state);
        if st.playing {
            return Err(RegistryError::LoopLocked(id));
        }
        st.looping = !st.looping;
        debug!(track = %id, looping = st.looping, "loop toggled");
        Ok(st.looping)
    }

    /// Set a track's volume. `value` must be finite and within `[0, 1]`.
    pub fn set_volume(&mut self, id: TrackId, value: f32) -> Result<(), RegistryError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(RegistryError::InvalidVolume(value));
        }
        let track = self.track_mut(id)?;
        track.sound.set_volume(value);
        lock(&track.state).volume = value;
        Ok(())
    }

    pub fn volume(&self, id: TrackId) -> Option<f32> {
        self.track(id).map(|t| lock(&t.state).volume)
    }

    /// Snapshot every row, in load order.
    pub fn rows(&self) -> Vec<TrackRow> {
        self.tracks
            .iter()
            .map(|t| {
                let st = lock(&t.state);
                TrackRow {
                    id: t.id,
                    display: t.info.display.clone(),
                    playing: st.playing,
                    looping: st.looping,
                    volume: st.volume,
                    progress: st.progress,
                }
            })
            .collect()
    }

    #[cfg(test)]
    pub fn row(&self, id: TrackId) -> Option<TrackRow> {
        self.rows().into_iter().find(|r| r.id == id)
    }

    /// Stop every playing track, wait for the monitors and release the backend.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        for track in &mut self.tracks {
            track.cancel.cancel();
            let mut st = lock(&track.state);
            if st.playing {
                track.sound.stop();
                st.playing = false;
                debug!(track = %track.id, "stopped on shutdown");
            }
        }
        for track in &mut self.tracks {
            let workers = track.worker.take().into_iter().chain(track.retired.drain(..));
            for worker in workers {
                reap(track.id, worker);
            }
        }

        self.backend.shutdown();
        info!(tracks = self.tracks.len(), "registry shut down");
    }

    /// Monitor threads not yet joined, current and retired.
    #[cfg(test)]
    pub fn pending_workers(&self) -> usize {
        self.tracks
            .iter()
            .map(|t| t.retired.len() + usize::from(t.worker.is_some()))
            .sum()
    }

    fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    fn track_mut(&mut self, id: TrackId) -> Result<&mut Track, RegistryError> {
        self.tracks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RegistryError::UnknownTrack(id))
    }
}

fn reap(id: TrackId, worker: JoinHandle<()>) {
    if worker.join().is_err() {
        warn!(track = %id, "progress monitor panicked");
    }
}

impl<B: AudioBackend> Drop for Registry<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
