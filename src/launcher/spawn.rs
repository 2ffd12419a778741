//! Process-spawn and desktop-integration seams
//!
//! The resolver talks to the OS through two narrow traits so the fallback
//! logic can be tested with scripted doubles. The system implementations are
//! the only code in the crate that actually creates processes.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

#[cfg(windows)]
use std::os::windows::process::CommandExt;

use super::resolver::LauncherCandidate;
use crate::core::platform::PlatformKind;

/// OS process-creation facility
pub trait ProcessSpawner {
    /// Ask the OS to create the process described by `candidate`
    ///
    /// Success means creation succeeded; what the child does afterwards is
    /// not this trait's concern.
    fn spawn(&self, candidate: &LauncherCandidate) -> io::Result<()>;
}

/// Spawns detached via `std::process::Command`, dropping the child handle
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, candidate: &LauncherCandidate) -> io::Result<()> {
        let mut cmd = Command::new(candidate.program());
        cmd.args(candidate.args());

        #[cfg(windows)]
        {
            const CREATE_NO_WINDOW: u32 = 0x08000000;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        // Fire and forget: the child handle is dropped, never waited on.
        cmd.spawn().map(|_| ())
    }
}

/// Platform-provided facility for opening targets with the default
/// association, used as the last-resort fallback
pub trait DesktopService {
    fn is_available(&self) -> bool;

    fn open_file(&self, path: &Path) -> io::Result<()>;

    fn open_url(&self, url: &str) -> io::Result<()>;
}

/// Desktop integration backed by each platform's "open with default" entry
/// point
///
/// macOS `open` and Windows `cmd /C start` are always present; on Linux this
/// layer is `gio open`, probed on PATH, which is distinct from the
/// `gnome-open`/`kde-open`/`xdg-open` helpers the resolver chain has already
/// tried by the time it gets here.
#[derive(Debug, Clone, Copy)]
pub struct SystemDesktop {
    platform: PlatformKind,
}

impl SystemDesktop {
    pub fn new(platform: PlatformKind) -> Self {
        Self { platform }
    }

    fn open_with_default(&self, target: &str) -> io::Result<()> {
        let candidate = match self.platform {
            PlatformKind::MacOs => LauncherCandidate::new(["open", target]),
            PlatformKind::Windows => LauncherCandidate::new(["cmd", "/C", "start", "", target]),
            PlatformKind::Linux => LauncherCandidate::new(["gio", "open", target]),
            PlatformKind::Other => {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "no desktop integration on this platform",
                ))
            }
        };
        debug!(%candidate, "opening via desktop integration");
        SystemSpawner.spawn(&candidate)
    }
}

impl DesktopService for SystemDesktop {
    fn is_available(&self) -> bool {
        match self.platform {
            PlatformKind::MacOs | PlatformKind::Windows => true,
            PlatformKind::Linux => which::which("gio").is_ok(),
            PlatformKind::Other => false,
        }
    }

    fn open_file(&self, path: &Path) -> io::Result<()> {
        self.open_with_default(&path.display().to_string())
    }

    fn open_url(&self, url: &str) -> io::Result<()> {
        self.open_with_default(url)
    }
}
