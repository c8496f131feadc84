//! Error types for control operations.

use thiserror::Error;

/// Errors that can occur in control operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Preset key did not match any known scenario.
    #[error("Unknown preset: {name} (expected one of: {expected})")]
    UnknownPreset { name: String, expected: String },
}
