//! Copy and download of generated outlines.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;

/// Tags whose end starts a new line in extracted text.
const BLOCK_TAGS: [&str; 9] = ["p", "h1", "h2", "h3", "h4", "li", "ul", "div", "br"];

/// Clipboard and download capability for the result toolbar.
pub trait Exporter: Send + Sync {
    /// Places text on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns error if the clipboard cannot be written.
    fn copy(&self, text: &str) -> Result<()>;

    /// Saves text as a download and returns where it was written.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    fn download(&self, text: &str) -> Result<PathBuf>;
}

/// Exporter writing downloads to a directory and copies to a writer.
///
/// The CLI passes stdout as the clipboard writer so copied text can be
/// piped into a system clipboard tool.
#[derive(Debug)]
pub struct FileExporter<W> {
    dir: PathBuf,
    clipboard: Mutex<W>,
}

impl<W: Write + Send> FileExporter<W> {
    /// Creates exporter saving downloads under `dir`.
    pub fn new(dir: impl Into<PathBuf>, clipboard: W) -> Self {
        Self {
            dir: dir.into(),
            clipboard: Mutex::new(clipboard),
        }
    }

    /// Consumes exporter and returns the clipboard writer.
    pub fn into_clipboard(self) -> W {
        self.clipboard
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Exporter for FileExporter<W> {
    fn copy(&self, text: &str) -> Result<()> {
        let mut clipboard = self
            .clipboard
            .lock()
            .map_err(|_| anyhow!("Clipboard writer lock poisoned"))?;
        writeln!(clipboard, "{text}").context("Failed to write clipboard text")?;
        clipboard.flush().context("Failed to flush clipboard text")
    }

    fn download(&self, text: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create download directory: {}", self.dir.display())
        })?;

        let path = self
            .dir
            .join(download_file_name(chrono::Utc::now().date_naive()));
        std::fs::write(&path, text)
            .with_context(|| format!("Failed to write download: {}", path.display()))?;

        info!(path = %path.display(), bytes = text.len(), "outline downloaded");
        Ok(path)
    }
}

/// Returns the download file name for an outline saved on `date`.
pub fn download_file_name(date: NaiveDate) -> String {
    format!("course-outline-{}.txt", date.format("%Y-%m-%d"))
}

/// Extracts readable text from rendered outline HTML.
///
/// Tags are dropped and a `<` that does not open a tag is kept as text.
/// Block ends and `<br>` become line breaks, the common entities are
/// decoded, trailing spaces are trimmed per line and the result is trimmed
/// as a whole.
///
/// # Arguments
///
/// * `html`: Rendered HTML fragment
///
/// # Returns
///
/// Plain text suitable for copying or saving
pub fn plain_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);

        // Only `<` followed by a letter, `/` or `!` opens a tag.
        let opens_tag = rest[start + 1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!');
        if !opens_tag {
            text.push('<');
            rest = &rest[start + 1..];
            continue;
        }

        let Some(end) = rest[start..].find('>') else {
            text.push_str(&rest[start..]);
            rest = "";
            break;
        };

        let tag = &rest[start + 1..start + end];
        let closing = tag.starts_with('/');
        let name = tag
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        if BLOCK_TAGS.contains(&name.as_str()) && (closing || name == "br") {
            text.push('\n');
        }

        rest = &rest[start + end + 1..];
    }
    text.push_str(rest);

    let decoded = html_decode(&text);
    decoded
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Decodes the entities produced by common HTML escaping.
fn html_decode(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
