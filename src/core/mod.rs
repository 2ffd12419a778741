//! Core types shared across the crate
//!
//! Holds the error taxonomy, the externally-owned preferred-player
//! configuration value, and the host platform classification.

pub mod config;
pub mod error;
pub mod platform;

pub use config::PreferredPlayerConfig;
pub use error::{DeskError, Result};
pub use platform::PlatformKind;
