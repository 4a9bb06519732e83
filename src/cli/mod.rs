/// CLI layer: argument parsing and output formatting.
pub mod args;
pub mod output;

pub use args::{ConvertArgs, TemplateConfigArgs, parse_or_usage};
pub use output::{OutputCtx, write_error};
