//! Markdown rendering for generated course outlines.
//!
//! This module renders a small line-oriented markdown dialect: headings
//! levels 1 to 4, unordered list items, bold and italic emphasis,
//! paragraphs and blank line breaks. Each source line becomes exactly one
//! block, so the output never nests beyond a single open list.

mod block;
mod inline;
mod renderer;

pub use block::{Block, blocks};
pub use renderer::MarkdownRenderer;
