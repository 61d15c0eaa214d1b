//! Utilities for creating `rodio` sinks from files on disk.
//!
//! The helpers here encapsulate opening/decoding a file and preparing a
//! paused `Sink` that either plays once or repeats forever.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::mixer::Mixer;
use rodio::{Decoder, Sink, Source};

use super::types::AudioError;

/// Open and decode `path`.
pub(super) fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Create a paused `Sink` on `mixer` playing `path` once, or forever when `looping`.
pub(super) fn create_sink(mixer: &Mixer, path: &Path, looping: bool) -> Result<Sink, AudioError> {
    let source = decode(path)?;

    let sink = Sink::connect_new(mixer);
    if looping {
        // Repeating needs a cloneable source; buffering decodes each pass only once.
        sink.append(source.buffered().repeat_infinite());
    } else {
        sink.append(source);
    }
    sink.pause();
    Ok(sink)
}
