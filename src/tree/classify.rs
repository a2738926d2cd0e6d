//! Text file classification
//!
//! Files are classified by looking up a content-type label for their
//! extension in a static table. No content is read unless sniffing of
//! unclassifiable files is switched on explicitly.

use std::fs;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected when sniffing file content.
pub const SNIFF_LEN: u64 = 8192;

/// Outcome of classifying a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextClassification {
    /// Regular file whose content type is a text type
    Text,
    /// Not a regular file, or a known non-text content type
    NotText,
    /// Regular file whose content type cannot be inferred
    Unknown,
}

impl TextClassification {
    /// Collapse to a yes/no answer. `Unknown` counts as non-text.
    pub fn is_text(self) -> bool {
        matches!(self, TextClassification::Text)
    }
}

/// Infer a content-type label from the extension of `path`.
///
/// Extension lookup is case-insensitive. Returns `None` for extensionless
/// names and extensions missing from the table.
pub fn guess_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();

    let label = match ext.as_str() {
        // Plain and structured text
        "txt" | "text" | "log" | "srt" | "bat" | "ksh" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "rst" => "text/x-rst",
        "csv" => "text/csv",
        "tsv" => "text/tab-separated-values",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "xml" | "xsl" => "text/xml",
        "ics" => "text/calendar",
        "vcf" => "text/x-vcard",
        "vtt" => "text/vtt",
        "rtx" => "text/richtext",
        "sgm" | "sgml" => "text/x-sgml",
        "etx" => "text/x-setext",
        "tex" => "text/x-tex",

        // Source code
        "py" | "pyw" => "text/x-python",
        "js" | "mjs" | "cjs" => "text/javascript",
        "ts" | "tsx" => "text/x-typescript",
        "jsx" => "text/jsx",
        "rs" => "text/x-rust",
        "go" => "text/x-go",
        "java" => "text/x-java",
        "kt" | "kts" => "text/x-kotlin",
        "scala" => "text/x-scala",
        "c" | "h" => "text/x-c",
        "cc" | "cpp" | "cxx" | "hpp" | "hh" | "hxx" => "text/x-c++",
        "cs" => "text/x-csharp",
        "rb" => "text/x-ruby",
        "pl" | "pm" => "text/x-perl",
        "php" => "text/x-php",
        "swift" => "text/x-swift",
        "lua" => "text/x-lua",
        "sql" => "text/x-sql",
        "diff" | "patch" => "text/x-diff",

        // Non-text
        "json" => "application/json",
        "yaml" | "yml" => "application/yaml",
        "toml" => "application/toml",
        "sh" => "application/x-sh",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "tar" => "application/x-tar",
        "gz" | "tgz" => "application/gzip",
        "bz2" => "application/x-bzip2",
        "xz" => "application/x-xz",
        "7z" => "application/x-7z-compressed",
        "exe" | "dll" | "bin" | "so" | "o" | "a" => "application/octet-stream",
        "class" => "application/java-vm",
        "jar" => "application/java-archive",
        "wasm" => "application/wasm",
        "pyc" => "application/x-python-code",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "ico" => "image/vnd.microsoft.icon",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp3" => "audio/mpeg",
        "wav" => "audio/x-wav",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "webm" => "video/webm",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        _ => return None,
    };

    Some(label)
}

/// Classify `path` by extension only.
pub fn is_text_file(path: &Path) -> TextClassification {
    Classifier::default().classify(path)
}

/// Text classifier with optional content sniffing
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    /// Re-check `Unknown` files by inspecting their leading bytes
    pub sniff_unknown: bool,
}

impl Classifier {
    pub fn new(sniff_unknown: bool) -> Self {
        Self { sniff_unknown }
    }

    pub fn classify(&self, path: &Path) -> TextClassification {
        let is_file = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            return TextClassification::NotText;
        }

        match guess_content_type(path) {
            Some(label) if label.contains("text") => TextClassification::Text,
            Some(_) => TextClassification::NotText,
            None if self.sniff_unknown => sniff(path),
            None => TextClassification::Unknown,
        }
    }
}

/// Inspect the first bytes of a file. Unreadable files stay `Unknown`.
fn sniff(path: &Path) -> TextClassification {
    let mut sample = Vec::new();
    let read = fs::File::open(path).and_then(|f| f.take(SNIFF_LEN).read_to_end(&mut sample));
    match read {
        Ok(_) if is_likely_text(&sample) => TextClassification::Text,
        Ok(_) => TextClassification::NotText,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Failed to sniff file");
            TextClassification::Unknown
        }
    }
}

/// No NUL bytes and valid UTF-8. Empty input counts as text.
fn is_likely_text(sample: &[u8]) -> bool {
    if sample.contains(&0) {
        return false;
    }
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        // A multi-byte character cut off by the sample limit is still text
        Err(e) => e.error_len().is_none() && sample.len() as u64 == SNIFF_LEN,
    }
}
