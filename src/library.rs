//! Library helpers: track metadata for rows and directory listings for the picker.

mod display;
mod model;
mod scan;
mod tags;

pub use model::{DirEntry, TrackInfo};
pub use scan::list_dir;
pub use tags::describe;

#[cfg(test)]
mod tests;

/// A mono 8-bit PCM WAV file holding `samples` frames at `rate` Hz.
#[cfg(test)]
pub(crate) fn test_wav(rate: u32, samples: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(44 + samples as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + samples).to_le_bytes());
    out.extend_from_slice(b"WAVEfmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&rate.to_le_bytes());
    out.extend_from_slice(&rate.to_le_bytes()); // byte rate
    out.extend_from_slice(&1u16.to_le_bytes()); // block align
    out.extend_from_slice(&8u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&samples.to_le_bytes());
    out.resize(44 + samples as usize, 128);
    out
}
