//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("decimal marker `{0}` cannot be a digit")]
    DigitMarker(char),
    #[error("decimal marker `{0}` collides with a unit suffix")]
    UnitMarker(char),
    #[error("decimal marker {0:?} must be a printable character")]
    ControlMarker(char),
    #[error("bar character {0:?} must be a printable character")]
    ControlBarChar(char),
    #[error("bar width {width} exceeds the maximum of {max}")]
    WidthTooLarge { width: usize, max: usize },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("line {line} does not match the \"space-size-unit\" schema")]
    ImproperLine { line: usize },
    #[error("no lines to chart")]
    EmptyInput,
    #[error("total size on line {line} is zero, cannot scale the other lines")]
    ZeroTotal { line: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("size pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
