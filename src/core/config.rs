//! Run-time configuration object + fluent builder.

use crate::core::{
    constants::{DEFAULT_BAR_CHAR, DEFAULT_DECIMAL_MARKER, DEFAULT_WIDTH, MAX_WIDTH, UNIT_SUFFIXES},
    error::ConfigError,
};

/// How the digits after the decimal marker contribute to a size.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum FractionMode {
    /// `1.5` reads as `1 + 5`, the way the classic tool has always done it.
    #[default]
    Literal,
    /// `1.5` reads as one and a half.
    Positional,
}

/// Immutable parameters handed to the chart processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub decimal_marker: char,
    pub bar_char: char,
    pub width: usize,
    pub fraction: FractionMode,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimal_marker: DEFAULT_DECIMAL_MARKER,
            bar_char: DEFAULT_BAR_CHAR,
            width: DEFAULT_WIDTH,
            fraction: FractionMode::default(),
        }
    }
}

/// Fluent builder, every field falls back to its default in `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    decimal_marker: Option<char>,
    bar_char: Option<char>,
    width: Option<usize>,
    fraction: Option<FractionMode>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn decimal_marker(mut self, c: char) -> Self {
        self.decimal_marker = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn bar_char(mut self, c: char) -> Self {
        self.bar_char = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }
    #[inline]
    #[must_use]
    pub fn fraction(mut self, mode: FractionMode) -> Self {
        self.fraction = Some(mode);
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// # Errors
    /// * the decimal marker is a digit, a unit suffix or a control character
    /// * the bar character is a control character
    /// * the width is above [`MAX_WIDTH`]
    pub fn build(self) -> Result<Config, ConfigError> {
        let decimal_marker = self.decimal_marker.unwrap_or(DEFAULT_DECIMAL_MARKER);
        let bar_char = self.bar_char.unwrap_or(DEFAULT_BAR_CHAR);
        let width = self.width.unwrap_or(DEFAULT_WIDTH);

        if decimal_marker.is_ascii_digit() {
            return Err(ConfigError::DigitMarker(decimal_marker));
        }
        if UNIT_SUFFIXES.contains(&decimal_marker.to_ascii_lowercase()) {
            return Err(ConfigError::UnitMarker(decimal_marker));
        }
        if decimal_marker.is_control() {
            return Err(ConfigError::ControlMarker(decimal_marker));
        }
        if bar_char.is_control() {
            return Err(ConfigError::ControlBarChar(bar_char));
        }
        if width > MAX_WIDTH {
            return Err(ConfigError::WidthTooLarge {
                width,
                max: MAX_WIDTH,
            });
        }

        Ok(Config {
            decimal_marker,
            bar_char,
            width,
            fraction: self.fraction.unwrap_or_default(),
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
