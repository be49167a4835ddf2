//! Outline markdown to HTML rendering.

use anyhow::{Context, Result};
use std::path::Path;

use super::block::{Block, blocks};
use super::inline;

/// Renders the restricted outline markdown dialect to HTML.
///
/// Supports headings levels 1 to 4, unordered list items, bold and italic
/// emphasis, paragraphs and blank line breaks. Every source line produces
/// exactly one block; there is no nesting and no paragraph merging.
/// Rendering is total: any input produces output.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Creates renderer.
    pub fn new() -> Self {
        Self
    }

    /// Renders markdown content to HTML string.
    ///
    /// Walks the classified lines with a single "inside list" flag. Any
    /// non-item block closes an open list before it is written, and a list
    /// still open after the last line is closed, so every `<ul>` is closed
    /// exactly once.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML, empty for empty input
    pub fn render(&self, content: &str) -> String {
        let mut html = String::with_capacity(content.len() + content.len() / 2);
        let mut in_list = false;

        for block in blocks(content) {
            if in_list && block.closes_list() {
                html.push_str("</ul>");
                in_list = false;
            }

            match block {
                Block::Break => html.push_str("<br>"),
                Block::Heading { level, content } => {
                    html.push_str(&format!("<h{level}>"));
                    html.push_str(&inline::format(content));
                    html.push_str(&format!("</h{level}>"));
                }
                Block::ListItem(content) => {
                    if !in_list {
                        html.push_str("<ul>");
                        in_list = true;
                    }
                    html.push_str("<li>");
                    html.push_str(&inline::format(content));
                    html.push_str("</li>");
                }
                Block::Paragraph(content) => {
                    html.push_str("<p>");
                    html.push_str(&inline::format(content));
                    html.push_str("</p>");
                }
            }
        }

        if in_list {
            html.push_str("</ul>");
        }

        html
    }

    /// Renders optional content, treating `None` as empty input.
    pub fn render_opt(&self, content: Option<&str>) -> String {
        self.render(content.unwrap_or_default())
    }

    /// Renders markdown file at given path.
    ///
    /// Convenience method that reads file and renders content.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to markdown file
    ///
    /// # Returns
    ///
    /// Rendered HTML string
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}
