//! Leading size token of a `du`-style line -> byte count.
//!
//! Schema, anchored at the start of the line:
//!
//! ```text
//! [whitespace] digits [marker [digits]] [k|m|g|t]
//! ```
//!
//! Everything after the token is free text and never inspected here.

use regex::Regex;

use crate::core::{
    config::{Config, FractionMode},
    constants::{UNIT_BASE, UNIT_SUFFIXES},
    error::ChartError,
};

/// Pattern compiled once for one decimal marker.
#[derive(Debug, Clone)]
pub struct SizeParser {
    pattern: Regex,
    fraction: FractionMode,
}

impl SizeParser {
    /// Compile the line pattern for `cfg`'s decimal marker.
    ///
    /// # Errors
    /// Only if the regex engine rejects the pattern, which the escaped
    /// marker rules out in practice.
    pub fn new(cfg: &Config) -> Result<Self, ChartError> {
        let marker = regex::escape(cfg.decimal_marker.encode_utf8(&mut [0u8; 4]));
        let units: String = UNIT_SUFFIXES
            .iter()
            .flat_map(|u| [*u, u.to_ascii_uppercase()])
            .collect();
        let pattern = Regex::new(&format!(
            r"^\s*(?P<integer>[0-9]+)(?:{marker}(?P<fraction>[0-9]+)?)?(?P<unit>[{units}])?"
        ))?;
        Ok(Self {
            pattern,
            fraction: cfg.fraction,
        })
    }

    /// Absolute size of `line` in bytes.
    ///
    /// `ordinal` is the 1-based line number reported on failure.
    ///
    /// # Errors
    /// [`ChartError::ImproperLine`] if the line does not open with a size
    /// token, or the token is too large to be represented.
    pub fn parse(&self, line: &str, ordinal: usize) -> Result<f64, ChartError> {
        let improper = || ChartError::ImproperLine { line: ordinal };

        let caps = self.pattern.captures(line).ok_or_else(improper)?;
        let integer = caps.name("integer").ok_or_else(improper)?.as_str();

        let mut size = match (self.fraction, caps.name("fraction")) {
            (_, None) => parse_digits(integer.as_bytes()).ok_or_else(improper)?,
            (FractionMode::Literal, Some(frac)) => {
                let whole = parse_digits(integer.as_bytes()).ok_or_else(improper)?;
                whole + parse_digits(frac.as_str().as_bytes()).ok_or_else(improper)?
            }
            (FractionMode::Positional, Some(frac)) => {
                let mut buf = Vec::with_capacity(integer.len() + frac.len() + 1);
                buf.extend_from_slice(integer.as_bytes());
                buf.push(b'.');
                buf.extend_from_slice(frac.as_str().as_bytes());
                parse_digits(&buf).ok_or_else(improper)?
            }
        };

        if let Some(unit) = caps.name("unit") {
            let factor = unit
                .as_str()
                .chars()
                .next()
                .and_then(unit_factor)
                .ok_or_else(improper)?;
            size *= factor;
        }

        if size.is_finite() {
            Ok(size)
        } else {
            Err(improper())
        }
    }
}

#[inline]
fn parse_digits(bytes: &[u8]) -> Option<f64> {
    lexical_core::parse::<f64>(bytes).ok()
}

/// 1024 raised to the suffix's rank, case-insensitive.
#[must_use]
pub fn unit_factor(unit: char) -> Option<f64> {
    let unit = unit.to_ascii_lowercase();
    UNIT_SUFFIXES
        .iter()
        .zip(1..)
        .find(|(u, _)| **u == unit)
        .map(|(_, exp)| UNIT_BASE.powi(exp))
}
