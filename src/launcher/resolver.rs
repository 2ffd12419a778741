//! Launcher resolution
//!
//! Computes an ordered list of candidate process invocations for a target and
//! attempts them in order. Two branch families exist: committed branches
//! (preferred player, Windows explorer) stake everything on one candidate and
//! propagate its spawn error, while the Linux chain swallows per-candidate
//! spawn failures and keeps going. The chain exists precisely because no
//! single launcher is reliably present on Linux; the committed branches are
//! trusted configuration or a deliberate platform workaround.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use super::spawn::{DesktopService, ProcessSpawner};
use crate::core::config::PreferredPlayerConfig;
use crate::core::platform::PlatformKind;

/// Linux launcher helpers, attempted in this exact order
const LINUX_LAUNCHERS: [&str; 3] = ["gnome-open", "kde-open", "xdg-open"];

/// Errors surfaced by [`open_target`]
#[derive(Error, Debug)]
pub enum LaunchError {
    /// A committed single-candidate branch failed to create the process
    #[error("Failed to spawn `{candidate}`: {source}")]
    SpawnFailed {
        candidate: LauncherCandidate,
        #[source]
        source: std::io::Error,
    },

    /// The desktop-integration service was available but its open call failed
    #[error("Desktop integration failed to open target: {source}")]
    DesktopFailed {
        #[source]
        source: std::io::Error,
    },

    /// No launch strategy exists for this platform/target combination
    #[error("No launcher available for this platform/target combination")]
    Unsupported,
}

/// What to open: a filesystem path or an absolute URL
///
/// Never blank; callers validate before resolving. No normalization is
/// performed beyond extracting a lowercase extension from file targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    FilePath(PathBuf),
    Url(String),
}

impl Target {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Target::FilePath(path.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        Target::Url(url.into())
    }

    /// Lowercase extension with leading dot, file targets only
    fn dotted_extension(&self) -> Option<String> {
        match self {
            Target::FilePath(path) => path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| format!(".{}", e.to_lowercase())),
            Target::Url(_) => None,
        }
    }
}

/// One fully formed external-process invocation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherCandidate {
    /// Complete argv, program first
    pub command: Vec<String>,
}

impl LauncherCandidate {
    pub fn new<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or("")
    }

    pub fn args(&self) -> &[String] {
        self.command.get(1..).unwrap_or(&[])
    }
}

impl fmt::Display for LauncherCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command.join(" "))
    }
}

/// Resolved launch strategy for a (target, platform, preferred) triple
///
/// Kept separate from execution so branch selection and candidate order are
/// testable without touching the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LaunchPlan {
    /// One committed candidate; its spawn outcome is final
    Committed(LauncherCandidate),
    /// Best-effort chain; spawn failures skip to the next entry, exhaustion
    /// falls through to the desktop service
    ChainThenDesktop(Vec<LauncherCandidate>),
    /// Hand straight to the desktop service
    Desktop,
}

/// Select the launch strategy. Branches are mutually exclusive and evaluated
/// in the documented order; the first match wins.
pub(crate) fn plan(
    target: &Target,
    platform: PlatformKind,
    preferred: &PreferredPlayerConfig,
) -> LaunchPlan {
    match target {
        Target::FilePath(path) => {
            let abs = path.display().to_string();

            // Explicit user configuration is trusted over OS defaults, with
            // no safety net even if the configured program fails to spawn.
            let preferred_program = target
                .dotted_extension()
                .filter(|ext| preferred.applies_to(ext))
                .and_then(|_| preferred.program());
            if let Some(program) = preferred_program {
                let command = if platform == PlatformKind::MacOs {
                    vec!["open".to_string(), program.to_string(), "--args".to_string(), abs]
                } else {
                    vec![program.to_string(), abs]
                };
                return LaunchPlan::Committed(LauncherCandidate { command });
            }

            match platform {
                // explorer instead of the generic open API: the generic path
                // raises spurious access/network errors for some paths and
                // explorer tolerates them.
                PlatformKind::Windows => {
                    LaunchPlan::Committed(LauncherCandidate::new(["explorer", abs.as_str()]))
                }
                PlatformKind::Linux => LaunchPlan::ChainThenDesktop(linux_chain(&abs)),
                PlatformKind::MacOs | PlatformKind::Other => LaunchPlan::Desktop,
            }
        }
        Target::Url(url) => match platform {
            PlatformKind::Linux => LaunchPlan::ChainThenDesktop(linux_chain(url)),
            _ => LaunchPlan::Desktop,
        },
    }
}

fn linux_chain(argument: &str) -> Vec<LauncherCandidate> {
    LINUX_LAUNCHERS
        .iter()
        .map(|launcher| LauncherCandidate::new([*launcher, argument]))
        .collect()
}

/// Resolve and attempt launchers for a target, stopping at the first that
/// spawns
///
/// "Spawned" means the OS created the process; the child's exit status is
/// never inspected. Committed branches return their single candidate's
/// outcome directly; the Linux chain skips candidates that fail to spawn and
/// falls back to the desktop-integration service once exhausted.
pub fn open_target<S, D>(
    target: &Target,
    platform: PlatformKind,
    preferred: &PreferredPlayerConfig,
    spawner: &S,
    desktop: &D,
) -> Result<(), LaunchError>
where
    S: ProcessSpawner + ?Sized,
    D: DesktopService + ?Sized,
{
    match plan(target, platform, preferred) {
        LaunchPlan::Committed(candidate) => {
            debug!(%candidate, "attempting committed launcher");
            spawner
                .spawn(&candidate)
                .map_err(|source| LaunchError::SpawnFailed { candidate, source })
        }
        LaunchPlan::ChainThenDesktop(chain) => {
            let mut skipped = Vec::new();
            for candidate in chain {
                match spawner.spawn(&candidate) {
                    Ok(()) => {
                        debug!(%candidate, "launcher spawned");
                        return Ok(());
                    }
                    Err(source) => {
                        debug!(%candidate, error = %source, "launcher did not spawn, trying next");
                        skipped.push((candidate, source));
                    }
                }
            }
            debug!(
                skipped = skipped.len(),
                "launcher chain exhausted, falling back to desktop integration"
            );
            open_via_desktop(target, desktop)
        }
        LaunchPlan::Desktop => open_via_desktop(target, desktop),
    }
}

fn open_via_desktop<D>(target: &Target, desktop: &D) -> Result<(), LaunchError>
where
    D: DesktopService + ?Sized,
{
    if !desktop.is_available() {
        return Err(LaunchError::Unsupported);
    }

    let result = match target {
        Target::FilePath(path) => desktop.open_file(path),
        Target::Url(url) => desktop.open_url(url),
    };
    result.map_err(|source| LaunchError::DesktopFailed { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_extension() {
        assert_eq!(
            Target::file("/home/u/movie.MKV").dotted_extension(),
            Some(".mkv".to_string())
        );
        assert_eq!(Target::file("/home/u/README").dotted_extension(), None);
        assert_eq!(
            Target::url("https://example.com/a.html").dotted_extension(),
            None
        );
    }

    #[test]
    fn test_candidate_display() {
        let candidate = LauncherCandidate::new(["xdg-open", "/tmp/a.txt"]);
        assert_eq!(candidate.to_string(), "xdg-open /tmp/a.txt");
        assert_eq!(candidate.program(), "xdg-open");
        assert_eq!(candidate.args(), ["/tmp/a.txt".to_string()]);
    }
}
