use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::registry::{Progress, TrackHandle, TrackId, lock};

use super::cancel::CancelToken;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Finish {
    /// The sound ran to its end and was not looping.
    NaturalEnd,
    /// Stopped from outside: toggled off, cancelled, or superseded by a newer session.
    Stopped,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running { started: Instant },
    Finished(Finish),
}

/// Drives one track's progress for one play session.
///
/// The monitor only ever writes to its track while the track is still playing
/// in the session it was created for.
pub struct ProgressMonitor {
    id: TrackId,
    state: TrackHandle,
    session: u64,
    duration: Duration,
    cancel: CancelToken,
    phase: Phase,
}

impl ProgressMonitor {
    pub fn new(
        id: TrackId,
        state: TrackHandle,
        session: u64,
        duration: Duration,
        cancel: CancelToken,
    ) -> Self {
        Self {
            id,
            state,
            session,
            duration,
            cancel,
            phase: Phase::Idle,
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Enter `Running` with `now` as the start of the first pass.
    pub fn start(&mut self, now: Instant) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running { started: now };
        }
    }

    /// Advance to `now`, writing progress into the track. Returns the new phase.
    pub fn tick(&mut self, now: Instant) -> Phase {
        let Phase::Running { started } = self.phase else {
            return self.phase;
        };

        if self.cancel.is_cancelled() {
            return self.finish(Finish::Stopped);
        }

        let mut st = lock(&self.state);
        if st.session != self.session || !st.playing {
            drop(st);
            return self.finish(Finish::Stopped);
        }

        let elapsed = now.saturating_duration_since(started);
        if elapsed < self.duration {
            st.progress = Progress {
                elapsed,
                total: self.duration,
            };
            return self.phase;
        }

        st.progress = Progress {
            elapsed: Duration::ZERO,
            total: self.duration,
        };
        if st.looping {
            // The backend repeats the audio itself; only the timer restarts.
            debug!(track = %self.id, session = self.session, "loop pass finished");
            self.phase = Phase::Running { started: now };
            self.phase
        } else {
            st.playing = false;
            drop(st);
            info!(track = %self.id, "playback finished");
            self.finish(Finish::NaturalEnd)
        }
    }

    fn finish(&mut self, how: Finish) -> Phase {
        self.phase = Phase::Finished(how);
        self.phase
    }
}
