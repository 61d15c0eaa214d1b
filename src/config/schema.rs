use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/soundboard/config.toml` or `~/.config/soundboard/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SOUNDBOARD__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub monitor: MonitorSettings,
    pub library: LibrarySettings,
    pub picker: PickerSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume applied to every freshly loaded track, in `[0, 1]`.
    pub default_volume: f32,
    /// Amount added or removed by one volume key press.
    pub volume_step: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            default_volume: 0.5,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    /// How often a playing track's progress is refreshed (milliseconds).
    pub tick_ms: u64,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self { tick_ms: 50 }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    Album,
    Filename,
    Path,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions offered by the picker (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether the picker lists hidden files/directories (dotfiles).
    pub include_hidden: bool,

    /// Which fields to use to build a row's display name.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub display_fields: Vec<TrackDisplayField>,
    /// Separator used to join `display_fields`.
    pub display_separator: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "wav".into()],
            include_hidden: false,
            display_fields: vec![TrackDisplayField::Filename],
            display_separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Directory the picker opens in. Defaults to the working directory.
    pub start_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Title rendered in the header box.
    pub header_text: String,
    /// Longest row name shown before it is cut and suffixed with `...`.
    pub title_max_chars: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "Audio Player".to_string(),
            title_max_chars: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Directory for `soundboard.log`. Defaults to the XDG state directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
