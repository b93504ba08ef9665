//! Diagnostics go to stderr so they never mix with the chart on stdout.

use std::fmt;

use tracing::Level;
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

struct NoTime;

impl FormatTime for NoTime {
    fn format_time(&self, _: &mut Writer<'_>) -> fmt::Result {
        Ok(())
    }
}

/// Level used for a given `--debug` setting.
#[inline]
#[must_use]
pub fn level(debug: bool) -> Level {
    if debug { Level::DEBUG } else { Level::WARN }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(NoTime)
        .with_target(false)
        .with_level(true)
        .with_max_level(level(debug))
        .try_init();
}
