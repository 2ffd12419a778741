//! Launcher Resolver Module
//!
//! Provides functionality for:
//! - Resolving which external program should open a file path or URL
//! - Ordered per-platform candidate fallback with first-spawn-wins semantics
//! - Desktop-integration last resort
//! - A preferred-player override trusted above the OS file association
//!
//! Resolution is deterministic in its inputs (target, platform, preferred
//! config); the only side effect is the detached spawn itself. Spawned
//! children are never waited on.

mod resolver;
mod spawn;

pub use resolver::{open_target, LaunchError, LauncherCandidate, Target};
pub use spawn::{DesktopService, ProcessSpawner, SystemDesktop, SystemSpawner};

use std::path::Path;

use crate::core::config::PreferredPlayerConfig;
use crate::core::platform::PlatformKind;

/// Open a file on the host system, honoring the preferred-player config
///
/// Convenience wrapper over [`open_target`] with the system spawner and
/// desktop service for the current platform.
pub fn open_file(path: &Path, preferred: &PreferredPlayerConfig) -> Result<(), LaunchError> {
    let platform = PlatformKind::current();
    open_target(
        &Target::file(path),
        platform,
        preferred,
        &SystemSpawner,
        &SystemDesktop::new(platform),
    )
}

/// Open a URL with the host system's default handler
pub fn browse_url(url: &str) -> Result<(), LaunchError> {
    let platform = PlatformKind::current();
    open_target(
        &Target::url(url),
        platform,
        &PreferredPlayerConfig::default(),
        &SystemSpawner,
        &SystemDesktop::new(platform),
    )
}
