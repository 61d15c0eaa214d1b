//! Audio subsystem: the backend seam and its `rodio` implementation.
//!
//! The registry only talks to `AudioBackend` and `SoundHandle`; `RodioBackend`
//! is the implementation used at runtime.

mod player;
mod sink;
mod types;

pub use player::RodioBackend;
pub use types::{AudioBackend, AudioError, SoundHandle};

#[cfg(test)]
pub(crate) mod fake;

#[cfg(test)]
mod tests;
