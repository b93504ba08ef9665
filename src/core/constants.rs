//! A collection of constants.

/// Separates integer and fractional digits unless configured otherwise.
pub const DEFAULT_DECIMAL_MARKER: char = '.';
/// Glyph repeated to draw a proportional bar.
pub const DEFAULT_BAR_CHAR: char = '#';
/// Bars are 10 columns wide unless configured otherwise.
pub const DEFAULT_WIDTH: usize = 10;
/// Widest bar a configuration accepts.
pub const MAX_WIDTH: usize = 4096;

/// Glyph used for the full-width bar of the total line.
pub const TOTAL_BAR_CHAR: char = '=';
/// One space between the bar and the original line.
pub const BAR_GUTTER: char = ' ';

/// Unit suffixes accepted right after the digits, in ascending order.
///
/// `k` is 1024¹, `t` is 1024⁴. Matching is case-insensitive.
pub const UNIT_SUFFIXES: [char; 4] = ['k', 'm', 'g', 't'];
/// Each unit step multiplies by this factor.
pub const UNIT_BASE: f64 = 1024.0;
