//! Progress monitors: one polling worker per playing track.
//!
//! A monitor owns nothing but a handle to its track's state and that track's
//! cancellation token, so stopping one track never disturbs another.

mod cancel;
mod state;
mod worker;

pub use cancel::CancelToken;
pub use state::{Finish, Phase, ProgressMonitor};
pub use worker::spawn;
