//! Source text handling
//!
//! [`SourceCode`] holds the raw HLSL input together with a logical name
//! (usually the file name) used in diagnostics.  A [`SourceCursor`] walks the
//! text character by character while tracking a 1-based line and column,
//! which the lexer stamps onto every token it produces.

use std::fmt;
use std::io;
use std::path::Path;

/// A position in source code (1-based line and column).
///
/// Every token and every AST node stores the position of its first lexeme,
/// fixed at creation.  Rendered as `line:column` in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An immutable piece of HLSL source text with a logical name.
#[derive(Debug, Clone)]
pub struct SourceCode {
    name: String,
    text: String,
}

impl SourceCode {
    /// Wrap an in-memory string as a named source.
    pub fn from_string(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read a source file from disk; the path becomes the logical name.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Ok(Self {
            name: path.display().to_string(),
            text,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Start a character cursor at the beginning of the text.
    pub fn cursor(&self) -> SourceCursor {
        SourceCursor {
            input: self.text.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }
}

/// Character cursor over a [`SourceCode`] with line/column tracking.
pub struct SourceCursor {
    input: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
}

impl SourceCursor {
    /// Peek at the current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead `n` characters past the current one.
    pub fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Consume and return the current character, advancing line/column.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Position of the character the cursor currently stands on.
    pub fn pos(&self) -> SourcePos {
        SourcePos::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_tracks_lines_and_columns() {
        let source = SourceCode::from_string("test", "ab\ncd");
        let mut cursor = source.cursor();

        assert_eq!(cursor.pos(), SourcePos::new(1, 1));
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.pos(), SourcePos::new(1, 2));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), Some('\n'));
        assert_eq!(cursor.pos(), SourcePos::new(2, 1));
        assert_eq!(cursor.advance(), Some('c'));
        assert_eq!(cursor.peek(), Some('d'));
        assert_eq!(cursor.advance(), Some('d'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_pos_renders_line_colon_column() {
        assert_eq!(SourcePos::new(12, 7).to_string(), "12:7");
    }
}
