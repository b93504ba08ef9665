//! Public-facing crate root – re-exports + one-shot helper.
//!
//! ```
//! use du_barchart::{Config, render_chart};
//!
//! let cfg = Config::default();
//! let chart = render_chart(["50 a\n", "100 total\n"], &cfg).unwrap();
//! assert_eq!(chart, "     ##### 50 a\n========== 100 total\n");
//! ```

pub mod cli;
pub mod core;
pub mod logging;
pub mod render;

pub use crate::core::{
    chart::{ChartProcessor, Entry, render_chart},
    config::{Config, ConfigBuilder, FractionMode},
    constants::{DEFAULT_BAR_CHAR, DEFAULT_DECIMAL_MARKER, DEFAULT_WIDTH, MAX_WIDTH, TOTAL_BAR_CHAR},
    error::{ChartError, ConfigError},
    size::SizeParser,
};
