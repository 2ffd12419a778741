//! Preferred-player configuration
//!
//! The launcher resolver trusts an externally-configured media player over the
//! OS default for file extensions that player declares support for. The value
//! is owned by the embedding application (settings store, CLI flags, whatever)
//! and is read-only here.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Externally-owned preferred-program configuration
///
/// `supported_extensions` entries are normalized to lowercase with a leading
/// dot (e.g. `.mkv`). [`PreferredPlayerConfig::new`] normalizes for you;
/// deserialized values are expected to already be in that form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferredPlayerConfig {
    /// Path to the preferred program, if any. Blank counts as unset.
    #[serde(default)]
    pub program_path: Option<String>,

    /// File extensions the program handles, lowercase with leading dot
    #[serde(default)]
    pub supported_extensions: HashSet<String>,
}

impl PreferredPlayerConfig {
    /// Create a config, normalizing every extension
    pub fn new<I, S>(program_path: impl Into<String>, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            program_path: Some(program_path.into()),
            supported_extensions: extensions
                .into_iter()
                .map(|e| Self::normalize_extension(e.as_ref()))
                .collect(),
        }
    }

    /// Normalize an extension to lowercase with a leading dot
    ///
    /// Accepts `mkv`, `.mkv`, `.MKV` and friends; all map to `.mkv`.
    pub fn normalize_extension(extension: &str) -> String {
        let trimmed = extension.trim().trim_start_matches('.');
        format!(".{}", trimmed.to_lowercase())
    }

    /// The configured program, treating blank as unset
    pub fn program(&self) -> Option<&str> {
        self.program_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Whether the preferred program should handle a file with the given
    /// normalized extension (lowercase, leading dot)
    pub fn applies_to(&self, extension: &str) -> bool {
        self.program().is_some() && self.supported_extensions.contains(extension)
    }
}
