//! Host platform classification
//!
//! The launcher resolver branches on a closed enum rather than re-inspecting
//! the environment per call. Classify once at startup and pass the value down.

/// Host operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    MacOs,
    Windows,
    Linux,
    /// Anything else (BSDs, unknown targets); only the desktop-integration
    /// fallback can apply here
    Other,
}

impl PlatformKind {
    /// Classify the host platform from the compile target
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            PlatformKind::MacOs
        } else if cfg!(target_os = "windows") {
            PlatformKind::Windows
        } else if cfg!(target_os = "linux") {
            PlatformKind::Linux
        } else {
            PlatformKind::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_is_stable() {
        // One classification per process; repeated reads must agree.
        assert_eq!(PlatformKind::current(), PlatformKind::current());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_current_matches_target() {
        assert_eq!(PlatformKind::current(), PlatformKind::Linux);
    }
}
