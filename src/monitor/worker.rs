use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use super::state::{Phase, ProgressMonitor};

/// Run `monitor` on its own thread, ticking every `interval` until it finishes.
pub fn spawn(mut monitor: ProgressMonitor, interval: Duration) -> io::Result<JoinHandle<()>> {
    let id = monitor.id();
    thread::Builder::new()
        .name(format!("progress-{}", id))
        .spawn(move || {
            monitor.start(Instant::now());
            loop {
                if let Phase::Finished(how) = monitor.tick(Instant::now()) {
                    debug!(track = %id, ?how, "progress monitor exited");
                    break;
                }
                thread::sleep(interval);
            }
        })
}
