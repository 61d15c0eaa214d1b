//! Application model types: `App` and the status notice.
//!
//! The `App` struct holds what the UI needs beyond the registry itself: the
//! selected row, the open file picker (if any) and the latest notice.

use std::path::Path;

use crate::picker::FilePicker;
use crate::registry::{LoadReport, TrackId, TrackRow};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message shown in the status box until replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

/// The main application model.
#[derive(Default)]
pub struct App {
    pub selected: usize,
    pub picker: Option<FilePicker>,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move selection to the next row, wrapping to the first.
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move selection to the previous row, wrapping to the last.
    pub fn prev(&mut self, len: usize) {
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Id of the selected row, if there are any rows.
    pub fn selected_id(&self, rows: &[TrackRow]) -> Option<TrackId> {
        rows.get(self.selected).map(|r| r.id)
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        });
    }

    /// Summarize a load batch as a notice. Failures win over successes.
    pub fn report_load(&mut self, report: &LoadReport) {
        match report.failed.as_slice() {
            [] => {
                let n = report.loaded.len();
                self.info(format!(
                    "Loaded {} file{}",
                    n,
                    if n == 1 { "" } else { "s" }
                ));
            }
            [(path, err)] => self.error(format!("Could not load {}: {}", file_name(path), err)),
            many => self.error(format!(
                "Could not load {} files (first: {})",
                many.len(),
                file_name(&many[0].0)
            )),
        }
    }

    pub fn picker_open(&self) -> bool {
        self.picker.is_some()
    }
}

/// `current` moved by `delta`, clamped to `[0, 1]` and rounded to hundredths.
pub fn stepped_volume(current: f32, delta: f32) -> f32 {
    ((current + delta).clamp(0.0, 1.0) * 100.0).round() / 100.0
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
