use std::path::Path;

use crate::config::TrackDisplayField;

/// Build a display string for a track according to the provided `fields` and separator.
///
/// This composes metadata fields (artist, title, album, filename, path) in the
/// configured order and falls back to `title` when no parts were produced.
pub fn display_from_fields(
    path: &Path,
    title: &str,
    artist: Option<&str>,
    album: Option<&str>,
    fields: &[TrackDisplayField],
    sep: &str,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        let part = match f {
            TrackDisplayField::Title => Some(title.trim()).filter(|s| !s.is_empty()),
            TrackDisplayField::Artist => artist.map(str::trim).filter(|s| !s.is_empty()),
            TrackDisplayField::Album => album.map(str::trim).filter(|s| !s.is_empty()),
            TrackDisplayField::Filename => path
                .file_name()
                .and_then(|s| s.to_str())
                .filter(|s| !s.trim().is_empty()),
            TrackDisplayField::Path => {
                parts.push(path.display().to_string());
                None
            }
        };
        if let Some(p) = part {
            parts.push(p.to_string());
        }
    }

    if parts.is_empty() {
        title.to_string()
    } else {
        parts.join(sep)
    }
}

/// Cut `name` to at most `max_chars` characters, ending in `...` when shortened.
pub fn truncate_display(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = name.chars().take(keep).collect();
    out.push_str("...");
    out
}
