//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::MulticatError;

/// Map domain errors to the message printed on stderr.
pub fn map_error(e: &MulticatError) -> String {
    match e {
        MulticatError::InvalidRoot(_) => {
            "Error: Specified path is invalid or not a directory".to_string()
        }
        other => format!("Error: {}", other),
    }
}

/// Process exit status for an error that ended the run.
pub fn exit_code(e: &MulticatError) -> i32 {
    match e {
        MulticatError::InvalidRoot(_)
        | MulticatError::Read { .. }
        | MulticatError::Clipboard(_)
        | MulticatError::ConfigError(_)
        | MulticatError::IoError(_) => 1,
    }
}
