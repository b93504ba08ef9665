//! Fixed-width bar prefixes.
//!
//! Every rendered row is `bar + ' ' + line`, where `bar` is exactly
//! `cfg.width` columns: right-aligned fill glyphs padded with blanks on the
//! left, or a run of `=` for the total row.

use crate::core::{
    config::Config,
    constants::{BAR_GUTTER, TOTAL_BAR_CHAR},
};

/// Number of fill glyphs for `ratio` of a `width`-column bar.
///
/// Rounds half away from zero and clamps to `[0, width]`, so sizes larger
/// than the total saturate instead of overflowing the column.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn filled_columns(ratio: f64, width: usize) -> usize {
    let cols = (ratio * width as f64).round();
    if cols.is_nan() || cols <= 0.0 {
        0
    } else if cols >= width as f64 {
        width
    } else {
        cols as usize
    }
}

#[inline]
fn push_repeated(buf: &mut String, c: char, n: usize) {
    buf.extend(std::iter::repeat_n(c, n));
}

/// Append one proportional row.
pub fn push_bar_line(buf: &mut String, ratio: f64, line: &str, cfg: &Config) {
    let filled = filled_columns(ratio, cfg.width);
    push_repeated(buf, ' ', cfg.width - filled);
    push_repeated(buf, cfg.bar_char, filled);
    buf.push(BAR_GUTTER);
    buf.push_str(line);
}

/// Append the row of the total entry.
pub fn push_total_line(buf: &mut String, line: &str, cfg: &Config) {
    push_repeated(buf, TOTAL_BAR_CHAR, cfg.width);
    buf.push(BAR_GUTTER);
    buf.push_str(line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(width: usize) -> Config {
        Config::builder().width(width).build().unwrap()
    }

    #[test]
    fn rounding_and_clamping() {
        assert_eq!(filled_columns(0.5, 10), 5);
        assert_eq!(filled_columns(0.25, 10), 3);
        assert_eq!(filled_columns(0.04, 10), 0);
        assert_eq!(filled_columns(1.0, 10), 10);
        assert_eq!(filled_columns(3.7, 10), 10);
        assert_eq!(filled_columns(-0.5, 10), 0);
        assert_eq!(filled_columns(f64::NAN, 10), 0);
        assert_eq!(filled_columns(0.9, 0), 0);
    }

    #[test]
    fn half_bar() {
        let mut buf = String::new();
        push_bar_line(&mut buf, 0.5, "a\n", &cfg(10));
        assert_eq!(buf, "     ##### a\n");
    }

    #[test]
    fn total_bar() {
        let mut buf = String::new();
        push_total_line(&mut buf, "total", &cfg(4));
        assert_eq!(buf, "==== total");
    }

    #[test]
    fn multibyte_glyph_counts_columns_not_bytes() {
        let cfg = Config::builder().bar_char('█').width(4).build().unwrap();
        let mut buf = String::new();
        push_bar_line(&mut buf, 0.5, "x", &cfg);
        assert_eq!(buf, "  ██ x");
    }
}
