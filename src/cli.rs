//! CLI domain: parse, route, output, and presentation only.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{exit_code, map_error};
pub use parse::Cli;
pub use presentation::{format_no_files, format_outcome};
pub use route::{RunContext, RunOutcome, RunRequest};
