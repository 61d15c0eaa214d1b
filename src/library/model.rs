use std::path::PathBuf;
use std::time::Duration;

/// Descriptive metadata for one loaded file.
#[derive(Debug, Clone)]
pub struct TrackInfo {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Name shown at the start of the track's row, already truncated.
    pub display: String,
    /// Container-reported length, if the file has a readable one.
    pub duration: Option<Duration>,
}

/// One line in the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}
