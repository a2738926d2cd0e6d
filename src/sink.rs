//! Output sinks receiving the finished report.

use crate::error::MulticatError;
use std::io::{Read, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// Destination for the concatenated report
pub trait OutputSink {
    /// Hand the report over. Called at most once per run.
    fn deliver(&mut self, report: &str) -> Result<(), MulticatError>;

    /// Message confirming delivery, printed after `deliver` succeeds.
    fn confirmation(&self) -> Option<&'static str> {
        None
    }
}

/// Writes the report to standard output followed by a newline
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn deliver(&mut self, report: &str) -> Result<(), MulticatError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", report)?;
        handle.flush()?;
        Ok(())
    }
}

/// Environment variable marking a re-executed clipboard holder process.
pub const CLIPBOARD_HOLDER_ENV: &str = "MULTICAT_CLIPBOARD_HOLDER";

/// Places the report on the system clipboard
///
/// On Linux the selection belongs to the process that set it, so the report
/// is handed to a detached copy of this executable that keeps serving it
/// until another client takes the clipboard.
#[derive(Debug, Default)]
pub struct ClipboardSink;

impl OutputSink for ClipboardSink {
    // The holder outlives this process and is reparented on exit; never waited on.
    #[cfg(target_os = "linux")]
    #[allow(clippy::zombie_processes)]
    fn deliver(&mut self, report: &str) -> Result<(), MulticatError> {
        let exe = std::env::current_exe()
            .map_err(|e| MulticatError::Clipboard(format!("Failed to locate executable: {}", e)))?;
        let mut child = holder_command(&exe)
            .spawn()
            .map_err(|e| MulticatError::Clipboard(format!("Failed to start clipboard holder: {}", e)))?;
        let mut stdin = child.stdin.take().ok_or_else(|| {
            MulticatError::Clipboard("Clipboard holder has no stdin".to_string())
        })?;
        stdin
            .write_all(report.as_bytes())
            .map_err(|e| MulticatError::Clipboard(format!("Failed to hand over report: {}", e)))?;
        drop(stdin);
        tracing::debug!(pid = child.id(), bytes = report.len(), "Report handed to clipboard holder");
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn deliver(&mut self, report: &str) -> Result<(), MulticatError> {
        set_clipboard_text(report.to_string())?;
        tracing::debug!(bytes = report.len(), "Report copied to clipboard");
        Ok(())
    }

    fn confirmation(&self) -> Option<&'static str> {
        Some("Concatenated contents copied to clipboard")
    }
}

/// Command re-running `exe` as a clipboard holder fed through stdin.
pub fn holder_command(exe: &Path) -> Command {
    let mut command = Command::new(exe);
    command
        .env(CLIPBOARD_HOLDER_ENV, "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// Serve stdin on the clipboard when this process was started as a holder.
///
/// Returns `Ok(false)` for a normal run. A holder blocks until another client
/// takes ownership of the clipboard, then returns `Ok(true)`.
pub fn run_clipboard_holder_if_requested() -> Result<bool, MulticatError> {
    if std::env::var_os(CLIPBOARD_HOLDER_ENV).is_none() {
        return Ok(false);
    }
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    set_clipboard_text(text)?;
    Ok(true)
}

#[cfg(target_os = "linux")]
fn set_clipboard_text(text: String) -> Result<(), MulticatError> {
    use arboard::SetExtLinux;

    let mut clipboard = open_clipboard()?;
    clipboard
        .set()
        .wait()
        .text(text)
        .map_err(|e| MulticatError::Clipboard(format!("Failed to set clipboard text: {}", e)))
}

#[cfg(not(target_os = "linux"))]
fn set_clipboard_text(text: String) -> Result<(), MulticatError> {
    open_clipboard()?
        .set_text(text)
        .map_err(|e| MulticatError::Clipboard(format!("Failed to set clipboard text: {}", e)))
}

fn open_clipboard() -> Result<arboard::Clipboard, MulticatError> {
    arboard::Clipboard::new()
        .map_err(|e| MulticatError::Clipboard(format!("Failed to open clipboard: {}", e)))
}

/// Keeps the delivered report in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub delivered: Option<String>,
}

impl OutputSink for MemorySink {
    fn deliver(&mut self, report: &str) -> Result<(), MulticatError> {
        self.delivered = Some(report.to_string());
        Ok(())
    }
}
