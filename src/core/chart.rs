//! Line buffer that turns a `du` listing into a bar chart.
//!
//! Bars are relative to the total, and the total only arrives with the last
//! line, so nothing can be emitted before every line has been fed. The
//! processor therefore has two states: accumulating (`feed`) and finalized.
//! `finalize` takes `self` by value, so a finalized chart cannot be fed again.

use tracing::{debug, trace};

use crate::{
    core::{config::Config, error::ChartError, size::SizeParser},
    render::{push_bar_line, push_total_line},
};

/// One parsed input line.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// Size in bytes, never negative.
    pub size: f64,
    /// The line exactly as fed, terminator included.
    pub line: String,
    /// 1-based position in feed order.
    pub ordinal: usize,
}

/// Accumulates entries until the total is known.
#[derive(Debug)]
pub struct ChartProcessor {
    cfg: Config,
    parser: SizeParser,
    entries: Vec<Entry>,
    line_count: usize,
}

impl ChartProcessor {
    /// # Errors
    /// Propagates a failure to compile the size pattern.
    pub fn new(cfg: Config) -> Result<Self, ChartError> {
        let parser = SizeParser::new(&cfg)?;
        Ok(Self {
            cfg,
            parser,
            entries: Vec::new(),
            line_count: 0,
        })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse and buffer one line.
    ///
    /// The line counter advances even when parsing fails, so later lines keep
    /// their real line numbers; the failing line itself is not buffered.
    ///
    /// # Errors
    /// [`ChartError::ImproperLine`] carrying this line's number.
    pub fn feed(&mut self, line: impl Into<String>) -> Result<(), ChartError> {
        self.line_count += 1;
        let line = line.into();
        let size = self.parser.parse(&line, self.line_count)?;
        trace!(ordinal = self.line_count, size, "buffered line");
        self.entries.push(Entry {
            size,
            line,
            ordinal: self.line_count,
        });
        Ok(())
    }

    /// Render the chart, consuming the buffer.
    ///
    /// Rows come out in feed order; the last fed line is the total and gets a
    /// full-width `=` bar.
    ///
    /// # Errors
    /// * [`ChartError::EmptyInput`] if nothing was fed
    /// * [`ChartError::ZeroTotal`] if the total is zero while other rows
    ///   need scaling against it
    pub fn finalize(mut self) -> Result<String, ChartError> {
        let total = self.entries.pop().ok_or(ChartError::EmptyInput)?;
        if !self.entries.is_empty() && total.size == 0.0 {
            return Err(ChartError::ZeroTotal {
                line: total.ordinal,
            });
        }
        debug!(
            rows = self.entries.len() + 1,
            total = total.size,
            "rendering chart"
        );

        let mut out = String::new();

        for entry in &self.entries {
            push_bar_line(&mut out, entry.size / total.size, &entry.line, &self.cfg);
        }
        push_total_line(&mut out, &total.line, &self.cfg);
        Ok(out)
    }
}

/// Feed every line and render in one go.
///
/// # Errors
/// Anything [`ChartProcessor::feed`] or [`ChartProcessor::finalize`] reports.
pub fn render_chart<I, S>(lines: I, cfg: &Config) -> Result<String, ChartError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut chart = ChartProcessor::new(cfg.clone())?;
    for line in lines {
        chart.feed(line)?;
    }
    chart.finalize()
}
