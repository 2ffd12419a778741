//! desk-launcher - desktop integration helpers
//!
//! This crate provides the desktop plumbing a GUI application needs to hand
//! work off to the rest of the system:
//! - Resolving which external program should open a given file path or URL,
//!   with an ordered per-platform fallback chain
//! - A preferred-player override trusted above the OS file association
//! - Native file/directory/save pickers seeded by last-used-directory state
//! - Desktop-integration last resort for platforms without a known launcher

pub mod core;
pub mod dialog;
pub mod launcher;
pub mod ui;

// Re-export commonly used items
pub use crate::core::config::PreferredPlayerConfig;
pub use crate::core::error::{DeskError, Result};
pub use crate::core::platform::PlatformKind;
pub use crate::dialog::{FileFilter, LastDirectory};
pub use crate::launcher::{
    browse_url, open_file, open_target, DesktopService, LaunchError, LauncherCandidate,
    ProcessSpawner, SystemDesktop, SystemSpawner, Target,
};
