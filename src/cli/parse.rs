use clap::Parser;

use crate::core::{
    config::FractionMode,
    constants::{DEFAULT_BAR_CHAR, DEFAULT_DECIMAL_MARKER, DEFAULT_WIDTH},
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "du-barchart",
    version,
    about = "Bar chart of file/directory sizes, relative to the total on the last line",
    long_about = "Reads lines formatted as \"size name\" (as printed by `du`) and prefixes \
                  each with a bar proportional to the total size, which is taken from the \
                  last line."
)]
pub struct Cli {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Character separating integer and fractional digits
    #[arg(long = "decimal-char", value_name = "C", default_value_t = DEFAULT_DECIMAL_MARKER)]
    pub decimal_char: char,

    /// Character to build the bars with
    #[arg(short = 'c', long = "char", value_name = "C", default_value_t = DEFAULT_BAR_CHAR)]
    pub bar_char: char,

    /// Width of the bars in columns
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// How digits after the decimal character are read
    #[arg(long, value_enum, default_value_t = FractionMode::Literal)]
    pub fraction: FractionMode,

    /// Emit timing diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}
