use std::path::Path;
use std::time::Duration;

use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};

use crate::config::LibrarySettings;

use super::display::{display_from_fields, truncate_display};
use super::model::TrackInfo;

/// Read tags and properties from `path` and build the row metadata for it.
///
/// Files without readable tags still describe fine: the title falls back to
/// the file stem and the duration is left for the decoder to report.
pub fn describe(path: &Path, settings: &LibrarySettings, max_chars: usize) -> TrackInfo {
    let mut title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist: Option<String> = None;
    let mut album: Option<String> = None;
    let mut duration: Option<Duration> = None;

    if let Ok(tagged) = lofty::read_from_path(path) {
        duration = Some(tagged.properties().duration()).filter(|d| !d.is_zero());
        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.title().filter(|v| !v.trim().is_empty()) {
                title = v.to_string();
            }
            artist = non_blank(tag.artist().as_deref());
            album = non_blank(tag.album().as_deref());
        }
    }

    let display = display_from_fields(
        path,
        &title,
        artist.as_deref(),
        album.as_deref(),
        &settings.display_fields,
        &settings.display_separator,
    );

    TrackInfo {
        path: path.to_path_buf(),
        title,
        artist,
        album,
        display: truncate_display(&display, max_chars),
        duration,
    }
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
