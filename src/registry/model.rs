//! Registry model types shared with the progress monitors.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Identity of one load. Loading the same file twice yields two ids.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(pub(crate) u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Elapsed position of the current session against one pass of the sound.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    pub elapsed: Duration,
    pub total: Duration,
}

impl Progress {
    pub fn ratio(&self) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        (self.elapsed.as_secs_f64() / self.total.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Mutable per-track state. The UI thread and the track's monitor share it.
#[derive(Debug, Clone)]
pub struct TrackState {
    pub playing: bool,
    pub looping: bool,
    pub volume: f32,
    /// Bumped every time playback starts; monitors only write to their own session.
    pub session: u64,
    pub progress: Progress,
}

impl TrackState {
    pub fn new(volume: f32) -> Self {
        Self {
            playing: false,
            looping: false,
            volume,
            session: 0,
            progress: Progress::default(),
        }
    }
}

pub type TrackHandle = Arc<Mutex<TrackState>>;

/// Lock a track's state, recovering it if a monitor panicked while holding it.
pub fn lock(handle: &TrackHandle) -> MutexGuard<'_, TrackState> {
    handle.lock().unwrap_or_else(|e| e.into_inner())
}

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Snapshot of one track as its row of controls shows it.
#[derive(Debug, Clone)]
pub struct TrackRow {
    pub id: TrackId,
    pub display: String,
    pub playing: bool,
    pub looping: bool,
    pub volume: f32,
    pub progress: Progress,
}

impl TrackRow {
    /// The loop control only accepts input while the track is stopped.
    pub fn loop_enabled(&self) -> bool {
        !self.playing
    }

    pub fn play_label(&self) -> &'static str {
        if self.playing { "Stop" } else { "Play" }
    }

    pub fn loop_label(&self) -> &'static str {
        if self.looping { "Loop On" } else { "Loop Off" }
    }

    pub fn time_label(&self) -> String {
        format_mmss(self.progress.elapsed)
    }
}
