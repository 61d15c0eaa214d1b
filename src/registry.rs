//! Track registry: the loaded tracks, their sounds and their playback state.
//!
//! Each load gets its own `TrackId`; the file path is metadata only. State
//! shared with a track's progress monitor lives behind that track's own
//! `TrackHandle`.

mod error;
mod model;
mod store;

pub use error::RegistryError;
pub use model::{Progress, TrackHandle, TrackId, TrackRow, TrackState, lock};
pub use store::{LoadReport, Registry};
