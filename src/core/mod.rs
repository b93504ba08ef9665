//! Aggregates the “business logic” layer.

pub mod chart;
pub mod config;
pub mod constants;
pub mod error;
pub mod size;

// re-export frequently-used items for convenience
pub use chart::{ChartProcessor, Entry, render_chart};
pub use config::{Config, ConfigBuilder, FractionMode};
pub use constants::{DEFAULT_BAR_CHAR, DEFAULT_DECIMAL_MARKER, DEFAULT_WIDTH, MAX_WIDTH, TOTAL_BAR_CHAR};
pub use error::{ChartError, ConfigError};
pub use size::SizeParser;
