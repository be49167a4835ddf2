//! Line classification for the outline markdown dialect.

/// One rendered unit derived from exactly one source line.
///
/// Content is the raw inline text captured after the line marker. Inline
/// emphasis is applied by the renderer when the block is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// Heading with level 1 to 4.
    Heading { level: u8, content: &'a str },
    /// Unordered list item introduced by `- ` or `* `.
    ListItem(&'a str),
    /// Any line that matches no other marker.
    Paragraph(&'a str),
    /// Blank or whitespace-only line.
    Break,
}

/// Heading markers ordered so that longer prefixes are tried first.
const HEADING_MARKERS: [(&str, u8); 4] = [("####", 4), ("###", 3), ("##", 2), ("#", 1)];

/// List item markers.
const LIST_MARKERS: [char; 2] = ['-', '*'];

impl<'a> Block<'a> {
    /// Classifies a single source line.
    ///
    /// Trailing whitespace is trimmed first; leading whitespace is kept, so an
    /// indented marker falls through to a paragraph. Markers must be followed
    /// by at least one whitespace character and only match at the start of
    /// the line. Precedence is blank, heading 4 down to 1, list item, then
    /// paragraph.
    ///
    /// # Arguments
    ///
    /// * `line`: Source line without its newline terminator
    ///
    /// # Returns
    ///
    /// The block this line produces
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim_end();

        if line.is_empty() {
            return Block::Break;
        }

        for (marker, level) in HEADING_MARKERS {
            if let Some(content) = after_marker(line, marker) {
                return Block::Heading { level, content };
            }
        }

        for marker in LIST_MARKERS {
            if let Some(content) = line
                .strip_prefix(marker)
                .and_then(after_separator)
            {
                return Block::ListItem(content);
            }
        }

        Block::Paragraph(line)
    }

    /// Returns true when this block closes an open list before rendering.
    pub fn closes_list(&self) -> bool {
        !matches!(self, Block::ListItem(_))
    }
}

/// Returns the content following `marker` and its whitespace separator.
fn after_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.strip_prefix(marker).and_then(after_separator)
}

/// Requires at least one leading whitespace character and skips the run.
///
/// The line is already right-trimmed, so a match always leaves non-empty
/// content behind.
fn after_separator(rest: &str) -> Option<&str> {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => {
            let content = rest.trim_start();
            if content.is_empty() { None } else { Some(content) }
        }
        _ => None,
    }
}

/// Splits source text into classified blocks.
///
/// CRLF line endings are treated as LF. Empty input yields no
/// blocks; any other input yields one block per `\n`-separated line, so a
/// trailing newline produces a final [`Block::Break`].
///
/// # Arguments
///
/// * `text`: Markdown source
///
/// # Returns
///
/// Blocks in source order, each borrowing from `text`
pub fn blocks(text: &str) -> Vec<Block<'_>> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(Block::classify)
        .collect()
}
