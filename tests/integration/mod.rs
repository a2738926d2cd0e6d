//! Integration tests for multicat

mod cli_binary;
mod report_output;
