//! Native picker wrappers and last-directory state

use std::path::{Path, PathBuf};

use tracing::debug;

/// Most recently chosen directory, used to seed the next dialog
///
/// Owned by the caller and passed by reference into every picker call rather
/// than living in process-wide storage. Absent at startup, set after each
/// successful pick, never cleared.
#[derive(Debug, Clone, Default)]
pub struct LastDirectory(Option<PathBuf>);

impl LastDirectory {
    pub const fn new() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<&Path> {
        self.0.as_deref()
    }

    /// Remember a picked directory
    pub fn remember_directory(&mut self, dir: &Path) {
        self.0 = Some(dir.to_path_buf());
    }

    /// Remember a picked file by storing its parent directory
    pub fn remember_file(&mut self, file: &Path) {
        if let Some(parent) = file.parent() {
            self.0 = Some(parent.to_path_buf());
        }
    }

    /// Directory the next dialog should start in: the last used directory,
    /// else the user's home, else the process working directory
    pub(crate) fn start_dir(&self) -> PathBuf {
        self.0
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Extension filter for the save dialog
#[derive(Debug, Clone)]
pub struct FileFilter {
    pub name: String,
    /// Extensions without the leading dot, as the native dialog expects
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }
}

/// Pick an existing directory; `None` on cancel
pub fn select_directory(last_dir: &mut LastDirectory, title: &str) -> Option<PathBuf> {
    let picked = rfd::FileDialog::new()
        .set_title(title)
        .set_directory(last_dir.start_dir())
        .pick_folder()?;
    debug!(path = %picked.display(), "directory selected");
    last_dir.remember_directory(&picked);
    Some(picked)
}

/// Pick an existing file; `None` on cancel
pub fn select_file(last_dir: &mut LastDirectory, title: &str) -> Option<PathBuf> {
    let picked = rfd::FileDialog::new()
        .set_title(title)
        .set_directory(last_dir.start_dir())
        .pick_file()?;
    debug!(path = %picked.display(), "file selected");
    last_dir.remember_file(&picked);
    Some(picked)
}

/// Pick a save location, optionally pre-filled with `filename`; `None` on
/// cancel
pub fn save_file(
    last_dir: &mut LastDirectory,
    title: &str,
    filename: &str,
    filter: &FileFilter,
) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title(title)
        .set_directory(last_dir.start_dir())
        .add_filter(&filter.name, &filter.extensions);
    if !filename.trim().is_empty() {
        dialog = dialog.set_file_name(filename);
    }
    let picked = dialog.save_file()?;
    debug!(path = %picked.display(), "save location selected");
    last_dir.remember_file(&picked);
    Some(picked)
}
