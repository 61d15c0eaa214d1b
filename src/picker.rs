//! In-terminal file picker: browse directories and choose audio files to load.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::LibrarySettings;
use crate::library::{DirEntry, list_dir};

/// What `FilePicker::activate` did.
#[derive(Debug, PartialEq, Eq)]
pub enum PickerAction {
    /// Moved into the directory under the cursor.
    Entered,
    /// The user chose these absolute paths, sorted by path.
    Chosen(Vec<PathBuf>),
    /// Nothing selectable under the cursor.
    Nothing,
}

pub struct FilePicker {
    dir: PathBuf,
    entries: Vec<DirEntry>,
    cursor: usize,
    marked: BTreeSet<PathBuf>,
    settings: LibrarySettings,
}

impl FilePicker {
    /// Open the picker on `dir` (made absolute).
    pub fn open(dir: &Path, settings: &LibrarySettings) -> io::Result<Self> {
        let dir = dir.canonicalize()?;
        let entries = list_dir(&dir, settings)?;
        Ok(Self {
            dir,
            entries,
            cursor: 0,
            marked: BTreeSet::new(),
            settings: settings.clone(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_marked(&self, path: &Path) -> bool {
        self.marked.contains(path)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    pub fn next(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1) % self.entries.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = self
                .cursor
                .checked_sub(1)
                .unwrap_or(self.entries.len() - 1);
        }
    }

    /// Mark or unmark the file under the cursor. Directories cannot be marked.
    pub fn toggle_mark(&mut self) {
        let Some(entry) = self.entries.get(self.cursor) else {
            return;
        };
        if entry.is_dir {
            return;
        }
        if !self.marked.remove(&entry.path) {
            self.marked.insert(entry.path.clone());
        }
    }

    /// Enter the directory under the cursor, or confirm the selection.
    ///
    /// Confirming returns every marked file, or the file under the cursor
    /// when nothing is marked.
    pub fn activate(&mut self) -> io::Result<PickerAction> {
        let Some(entry) = self.entries.get(self.cursor).cloned() else {
            return Ok(self.confirm_marked());
        };

        if entry.is_dir {
            self.change_dir(entry.path)?;
            return Ok(PickerAction::Entered);
        }

        if self.marked.is_empty() {
            return Ok(PickerAction::Chosen(vec![entry.path]));
        }
        Ok(self.confirm_marked())
    }

    /// Move to the parent directory. A no-op at the filesystem root.
    pub fn ascend(&mut self) -> io::Result<()> {
        match self.dir.parent() {
            Some(parent) => self.change_dir(parent.to_path_buf()),
            None => Ok(()),
        }
    }

    fn confirm_marked(&mut self) -> PickerAction {
        if self.marked.is_empty() {
            return PickerAction::Nothing;
        }
        let chosen = std::mem::take(&mut self.marked);
        // Marks may span directories; keep them in path order.
        PickerAction::Chosen(chosen.into_iter().collect())
    }

    fn change_dir(&mut self, dir: PathBuf) -> io::Result<()> {
        let entries = list_dir(&dir, &self.settings)?;
        self.dir = dir;
        self.entries = entries;
        self.cursor = 0;
        Ok(())
    }
}
