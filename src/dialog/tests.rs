//! Tests for the dialog wrapper
//!
//! The native dialogs themselves cannot run headless; these cover the
//! last-directory bookkeeping and filter construction around them.

use super::*;
use std::path::{Path, PathBuf};

#[test]
fn test_last_directory_starts_empty() {
    let last = LastDirectory::new();
    assert!(last.get().is_none());
}

#[test]
fn test_remember_directory_stores_the_directory() {
    let mut last = LastDirectory::new();
    last.remember_directory(Path::new("/home/u/media"));
    assert_eq!(last.get(), Some(Path::new("/home/u/media")));
}

#[test]
fn test_remember_file_stores_the_parent() {
    let mut last = LastDirectory::new();
    last.remember_file(Path::new("/home/u/media/movie.mkv"));
    assert_eq!(last.get(), Some(Path::new("/home/u/media")));
}

#[test]
fn test_remember_file_without_parent_leaves_state_untouched() {
    let mut last = LastDirectory::new();
    last.remember_directory(Path::new("/home/u"));
    last.remember_file(Path::new("/"));
    assert_eq!(last.get(), Some(Path::new("/home/u")));
}

#[test]
fn test_start_dir_prefers_last_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let mut last = LastDirectory::new();
    last.remember_directory(tmp.path());
    assert_eq!(last.start_dir(), tmp.path());
}

#[test]
fn test_start_dir_falls_back_to_home() {
    let last = LastDirectory::new();
    let expected = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    assert_eq!(last.start_dir(), expected);
}

#[test]
fn test_file_filter_strips_dots_and_lowercases() {
    let filter = FileFilter::new("Subtitles", &[".SRT", "sub"]);
    assert_eq!(filter.name, "Subtitles");
    assert_eq!(filter.extensions, ["srt".to_string(), "sub".to_string()]);
}
