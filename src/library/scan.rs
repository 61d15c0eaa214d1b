use std::cmp::Ordering;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::DirEntry;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the immediate children of `dir` for the picker.
///
/// Directories come first, then audio files matching the configured
/// extensions; each group is sorted case-insensitively. Unreadable children
/// are skipped, but an unreadable `dir` itself is an error.
pub fn list_dir(dir: &Path, settings: &LibrarySettings) -> io::Result<Vec<DirEntry>> {
    // Surface permission/not-found errors for the directory itself.
    std::fs::read_dir(dir)?;

    let mut entries: Vec<DirEntry> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| settings.include_hidden || !is_hidden(e.path()))
        .filter_map(|e| {
            let path = e.path();
            let is_dir = path.is_dir();
            if !is_dir && !(path.is_file() && is_audio_file(path, settings)) {
                return None;
            }
            Some(DirEntry {
                name: e.file_name().to_string_lossy().into_owned(),
                path: path.to_path_buf(),
                is_dir,
            })
        })
        .collect();

    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.wav"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.flac"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));
    }

    #[test]
    fn list_dir_puts_directories_first_and_filters_non_audio() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("A.wav"), b"not a real wav").unwrap();
        fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();
        fs::write(dir.path().join("d.ogg"), b"not offered by default").unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();

        let entries = list_dir(dir.path(), &LibrarySettings::default()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "A.wav", "b.MP3"]);
        assert!(entries[0].is_dir);
        assert!(!entries[1].is_dir);
    }

    #[test]
    fn list_dir_does_not_recurse() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let entries = list_dir(dir.path(), &LibrarySettings::default()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "sub");
    }

    #[test]
    fn list_dir_respects_include_hidden() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

        let entries = list_dir(dir.path(), &LibrarySettings::default()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "visible.mp3");

        let settings = LibrarySettings {
            include_hidden: true,
            ..LibrarySettings::default()
        };
        assert_eq!(list_dir(dir.path(), &settings).unwrap().len(), 2);
    }

    #[test]
    fn list_dir_errors_on_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(list_dir(&missing, &LibrarySettings::default()).is_err());
    }
}
