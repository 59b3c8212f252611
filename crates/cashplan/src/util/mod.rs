pub mod format;

pub use format::{format_euro, format_euro_short, format_percent};
