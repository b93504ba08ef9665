pub mod bar;

pub use bar::{filled_columns, push_bar_line, push_total_line};
